//! The attrition metrics engine.
//!
//! [`AttritionEngine`] turns a dataset and a filter into a [`MetricsResult`].
//! It holds only its policy configuration, so one engine can serve any number
//! of datasets and concurrent invocations.

use std::time::Instant;

use tracing::{debug, warn};

use crate::aggregation::{
    build_slices, compute_department_breakdown, compute_engagement_comparison,
    compute_gender_breakdown, compute_kpis, compute_reason_breakdown,
    compute_recent_terminations, compute_salary_comparison, compute_timeline,
};
use crate::config::EngineConfig;
use crate::models::{Dataset, FilterSelection, FilterSpec, MetricsResult};

/// Computes attrition metrics under a fixed policy configuration.
///
/// # Example
///
/// ```
/// use attrition_engine::config::EngineConfig;
/// use attrition_engine::engine::AttritionEngine;
/// use attrition_engine::models::{Dataset, EmployeeRecord, FilterSpec};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let dataset = Dataset::new(vec![
///     EmployeeRecord::new("1", "A", "Sales", "F", Decimal::new(50000, 0)),
///     EmployeeRecord::new("2", "B", "Sales", "M", Decimal::new(48000, 0))
///         .terminated("Voluntarily Terminated", NaiveDate::from_ymd_opt(2016, 5, 2)),
/// ])?;
///
/// let engine = AttritionEngine::new(EngineConfig::default());
/// let result = engine.compute(&dataset, &FilterSpec::unrestricted());
/// assert_eq!(result.kpi_display.attrition_rate, "50.0%");
/// # Ok::<(), attrition_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttritionEngine {
    config: EngineConfig,
}

impl AttritionEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Normalizes a raw selection and computes the metrics for it.
    pub fn compute_selection(&self, dataset: &Dataset, selection: &FilterSelection) -> MetricsResult {
        self.compute(dataset, &FilterSpec::select(selection))
    }

    /// Computes every metric for one filter.
    ///
    /// This never fails: empty slices produce "no data" charts, zero counts
    /// and empty tables. Filter values unknown to the dataset are logged and
    /// match nothing.
    pub fn compute(&self, dataset: &Dataset, filter: &FilterSpec) -> MetricsResult {
        let start_time = Instant::now();

        let unknown = filter.unknown_values(&dataset.filter_options());
        if !unknown.is_empty() {
            warn!(unknown = ?unknown, "Filter values not present in dataset");
        }

        let slices = build_slices(dataset, filter);
        let kpis = compute_kpis(&slices);

        let result = MetricsResult {
            kpi_display: kpis.display(),
            timeline: compute_timeline(&slices, self.config.timeline_denominator),
            gender_breakdown: compute_gender_breakdown(&slices),
            department_breakdown: compute_department_breakdown(
                &slices,
                self.config.department_breakdown_mode,
            ),
            reason_breakdown: compute_reason_breakdown(&slices, self.config.top_reasons_limit),
            engagement_comparison: compute_engagement_comparison(&slices),
            salary_comparison: compute_salary_comparison(&slices),
            recent_terminations: compute_recent_terminations(
                &slices,
                self.config.recent_terminations_limit,
            ),
            kpis,
        };

        debug!(
            total = result.kpis.total,
            active = result.kpis.active,
            terminated = result.kpis.terminated,
            attrition_rate = %result.kpis.attrition_rate,
            duration_us = start_time.elapsed().as_micros(),
            "Computed attrition metrics"
        );

        result
    }
}
