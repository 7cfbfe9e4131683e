//! Configuration types for the attrition engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from a YAML configuration file. Every field has a default,
//! so an empty file yields [`EngineConfig::default`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Department label the legacy admin and executive labels collapse into.
pub const ADMIN_AND_EXECUTIVE_OFFICES: &str = "Admin and Executive Offices";

/// Denominator used for the cumulative monthly termination rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineDenominator {
    /// Size of the filtered population, identical for every year.
    #[default]
    DatasetWide,
    /// Employees of the filtered population hired in or before the year.
    HireYearCutoff,
}

/// How the department breakdown is expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentBreakdownMode {
    /// Terminated headcount per department, sorted by count.
    #[default]
    RawCount,
    /// Terminated share of each department's filtered headcount, sorted by rate.
    Rate,
}

/// Settings applied while turning raw roster rows into records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Raw department label to canonical label.
    pub department_aliases: BTreeMap<String, String>,
    /// `chrono` formats tried in order when parsing dates.
    pub date_formats: Vec<String>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        let department_aliases = ["Admin Offices", "Executive Office", "Executive Offices"]
            .into_iter()
            .map(|label| (label.to_string(), ADMIN_AND_EXECUTIVE_OFFICES.to_string()))
            .collect();

        Self {
            department_aliases,
            date_formats: vec!["%m/%d/%Y".to_string(), "%Y-%m-%d".to_string()],
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Denominator policy of the timeline series.
    pub timeline_denominator: TimelineDenominator,
    /// Mode of the department breakdown.
    pub department_breakdown_mode: DepartmentBreakdownMode,
    /// Number of termination reasons kept in the reason breakdown.
    pub top_reasons_limit: usize,
    /// Number of rows in the recent terminations table.
    pub recent_terminations_limit: usize,
    /// Ingestion settings.
    pub ingest: IngestConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timeline_denominator: TimelineDenominator::default(),
            department_breakdown_mode: DepartmentBreakdownMode::default(),
            top_reasons_limit: 10,
            recent_terminations_limit: 10,
            ingest: IngestConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Returns a copy using the given timeline denominator.
    pub fn with_timeline_denominator(mut self, denominator: TimelineDenominator) -> Self {
        self.timeline_denominator = denominator;
        self
    }

    /// Returns a copy using the given department breakdown mode.
    pub fn with_department_breakdown_mode(mut self, mode: DepartmentBreakdownMode) -> Self {
        self.department_breakdown_mode = mode;
        self
    }
}
