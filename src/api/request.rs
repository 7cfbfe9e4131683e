//! Request types for the attrition engine API.
//!
//! This module defines the JSON request body of the `/metrics` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::FilterSelection;

/// Request body for the `/metrics` endpoint.
///
/// Every field is optional; a missing or empty list means "no restriction".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsRequest {
    /// Departments to include.
    #[serde(default)]
    pub departments: Vec<String>,
    /// Genders to include.
    #[serde(default)]
    pub genders: Vec<String>,
    /// Termination statuses to include in the terminated slice.
    #[serde(default)]
    pub statuses: Vec<String>,
    /// Inclusive termination-year range, as `[from, to]`.
    #[serde(default)]
    pub year_range: Option<[i32; 2]>,
}

impl From<MetricsRequest> for FilterSelection {
    fn from(req: MetricsRequest) -> Self {
        fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
            (!values.is_empty()).then_some(values)
        }

        FilterSelection {
            departments: non_empty(req.departments),
            genders: non_empty(req.genders),
            statuses: non_empty(req.statuses),
            year_range: req.year_range.map(|[from, to]| (from, to)),
        }
    }
}
