//! Slice building.
//!
//! Splits the dataset into the three working subsets every aggregator reads
//! from. Department and gender narrow the whole population; status and year
//! range narrow only the terminated slice.

use crate::models::{Dataset, EmployeeRecord, FilterSpec};

/// The filtered subsets of one invocation, borrowed from the dataset.
#[derive(Debug, Clone, Default)]
pub struct Slices<'a> {
    /// Records matching the department and gender filters.
    pub full: Vec<&'a EmployeeRecord>,
    /// Records of `full` that are not terminated.
    pub active: Vec<&'a EmployeeRecord>,
    /// Terminated records of `full` that also match status and year range.
    pub terminated: Vec<&'a EmployeeRecord>,
}

/// Builds the full, active and terminated slices.
///
/// # Example
///
/// ```
/// use attrition_engine::aggregation::build_slices;
/// use attrition_engine::models::{Dataset, EmployeeRecord, FilterSpec};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let dataset = Dataset::new(vec![
///     EmployeeRecord::new("1", "A", "Sales", "F", Decimal::ZERO),
///     EmployeeRecord::new("2", "B", "Sales", "M", Decimal::ZERO)
///         .terminated("Terminated for Cause", NaiveDate::from_ymd_opt(2015, 2, 1)),
/// ])?;
///
/// let filter = FilterSpec::unrestricted().with_statuses(["Voluntarily Terminated"]);
/// let slices = build_slices(&dataset, &filter);
/// assert_eq!(slices.full.len(), 2);
/// assert_eq!(slices.active.len(), 1);
/// assert_eq!(slices.terminated.len(), 0);
/// # Ok::<(), attrition_engine::error::EngineError>(())
/// ```
pub fn build_slices<'a>(dataset: &'a Dataset, filter: &FilterSpec) -> Slices<'a> {
    let full: Vec<&EmployeeRecord> = dataset
        .records()
        .iter()
        .filter(|r| filter.matches_population(r))
        .collect();

    let (terminated_all, active): (Vec<&EmployeeRecord>, Vec<&EmployeeRecord>) =
        full.iter().copied().partition(|r| r.is_terminated);

    let terminated = terminated_all
        .into_iter()
        .filter(|r| filter.matches_termination(r))
        .collect();

    Slices {
        full,
        active,
        terminated,
    }
}
