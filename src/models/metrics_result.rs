//! Metrics result models.
//!
//! This module contains the [`MetricsResult`] bundle returned by one engine
//! invocation, and the chart and table shapes it is made of. Every chart is a
//! [`ChartData`], which is either an explicit "no data" marker or a series of
//! generic (category, value) or (x, y, series) rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{DepartmentBreakdownMode, TimelineDenominator};

/// A chart payload, or an explicit marker that there is nothing to plot.
///
/// # Example
///
/// ```
/// use attrition_engine::models::ChartData;
///
/// let empty: ChartData<Vec<u32>> = ChartData::from_rows(vec![]);
/// assert!(empty.is_no_data());
/// assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"status":"no_data"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ChartData<T> {
    /// Nothing matched the filters.
    NoData,
    /// The chart payload.
    Ready(T),
}

impl<T> ChartData<T> {
    /// Returns true for the "no data" marker.
    pub fn is_no_data(&self) -> bool {
        matches!(self, ChartData::NoData)
    }

    /// The payload, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            ChartData::NoData => None,
            ChartData::Ready(data) => Some(data),
        }
    }
}

impl<R> ChartData<Vec<R>> {
    /// Wraps rows, mapping an empty series to [`ChartData::NoData`].
    pub fn from_rows(rows: Vec<R>) -> Self {
        if rows.is_empty() {
            ChartData::NoData
        } else {
            ChartData::Ready(rows)
        }
    }
}

/// One bar or slice of a categorical chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryValue {
    /// The category label.
    pub category: String,
    /// The value: a count, or a percentage with one decimal.
    pub value: Decimal,
}

impl CategoryValue {
    /// Creates a row holding a count.
    pub fn count(category: impl Into<String>, count: u64) -> Self {
        Self {
            category: category.into(),
            value: Decimal::from(count),
        }
    }
}

/// Scalar headline figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpis {
    /// Size of the filtered population.
    pub total: u64,
    /// `total - terminated`.
    pub active: u64,
    /// Size of the narrowed terminated slice.
    pub terminated: u64,
    /// `terminated / total * 100`, one decimal; zero for an empty population.
    pub attrition_rate: Decimal,
}

/// The headline figures as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiDisplay {
    /// Total employees.
    pub total: String,
    /// Active employees.
    pub active: String,
    /// Terminated employees.
    pub terminated: String,
    /// Attrition rate with a `%` suffix.
    pub attrition_rate: String,
}

/// One point of the cumulative termination timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Termination year (the series).
    pub year: i32,
    /// Month number, 1 to 12 (the x axis).
    pub month: u32,
    /// Three-letter month label.
    pub month_label: String,
    /// Terminations in this month.
    pub monthly_terminations: u64,
    /// Terminations from January through this month.
    pub cumulative_terminations: u64,
    /// `cumulative_terminations / denominator * 100` (the y axis).
    pub cumulative_rate: Decimal,
}

/// The cumulative termination rate series, one per termination year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Denominator policy the rates were computed with.
    pub denominator: TimelineDenominator,
    /// Years in legend order (most recent first).
    pub years: Vec<i32>,
    /// Twelve points per year, grouped by year in legend order.
    pub points: Vec<TimelinePoint>,
}

impl Timeline {
    /// The twelve points of one year, in month order.
    pub fn series(&self, year: i32) -> impl Iterator<Item = &TimelinePoint> + '_ {
        self.points.iter().filter(move |p| p.year == year)
    }
}

/// Department breakdown rows, with the mode that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentBreakdown {
    /// Whether values are counts or rates.
    pub mode: DepartmentBreakdownMode,
    /// One row per department.
    pub rows: Vec<CategoryValue>,
}

/// Mean engagement of active and terminated employees in one department.
///
/// `None` means no employee of that side contributed a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementRow {
    /// Department label.
    pub department: String,
    /// Mean score of active employees.
    pub active_mean: Option<Decimal>,
    /// Mean score of terminated employees.
    pub terminated_mean: Option<Decimal>,
}

/// One row of the salary comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRow {
    /// "Active" or "Terminated".
    pub status: String,
    /// Mean salary rounded to cents, absent for an empty slice.
    pub average: Option<Decimal>,
    /// Currency string (e.g., "$62,345.67"), or "N/A".
    pub display: String,
}

/// One row of the recent terminations table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentTerminationRow {
    /// Employee name.
    pub employee_name: String,
    /// Department label.
    pub department: String,
    /// Termination reason.
    pub termination_reason: String,
    /// Termination date as `YYYY-MM-DD`, if known.
    pub termination_date: Option<String>,
    /// Manager name.
    pub manager_name: String,
}

/// Everything one engine invocation produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsResult {
    /// Headline figures.
    pub kpis: Kpis,
    /// Headline figures as display strings.
    pub kpi_display: KpiDisplay,
    /// Cumulative monthly termination rate per year.
    pub timeline: ChartData<Timeline>,
    /// Terminations per gender.
    pub gender_breakdown: ChartData<Vec<CategoryValue>>,
    /// Terminations (or attrition rate) per department.
    pub department_breakdown: ChartData<DepartmentBreakdown>,
    /// Top termination reasons, ascending by count.
    pub reason_breakdown: ChartData<Vec<CategoryValue>>,
    /// Engagement of active versus terminated employees per department.
    pub engagement_comparison: ChartData<Vec<EngagementRow>>,
    /// Mean salary of active and terminated employees.
    pub salary_comparison: Vec<SalaryRow>,
    /// Most recent terminations, newest first.
    pub recent_terminations: Vec<RecentTerminationRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_data_from_rows() {
        let ready = ChartData::from_rows(vec![CategoryValue::count("F", 3)]);
        assert!(!ready.is_no_data());
        assert_eq!(ready.data().map(Vec::len), Some(1));

        let empty: ChartData<Vec<CategoryValue>> = ChartData::from_rows(vec![]);
        assert!(empty.is_no_data());
        assert!(empty.data().is_none());
    }

    #[test]
    fn test_chart_data_serialization() {
        let ready = ChartData::from_rows(vec![CategoryValue::count("F", 3)]);
        let json = serde_json::to_value(&ready).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["data"][0]["category"], "F");
        assert_eq!(json["data"][0]["value"], "3");
    }

    #[test]
    fn test_engagement_row_keeps_missing_side_distinct_from_zero() {
        let row = EngagementRow {
            department: "Sales".to_string(),
            active_mean: Some(Decimal::ZERO),
            terminated_mean: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["active_mean"], "0");
        assert!(json["terminated_mean"].is_null());
    }

    #[test]
    fn test_timeline_series_filters_by_year() {
        let point = |year, month| TimelinePoint {
            year,
            month,
            month_label: String::new(),
            monthly_terminations: 0,
            cumulative_terminations: 0,
            cumulative_rate: Decimal::ZERO,
        };
        let timeline = Timeline {
            denominator: TimelineDenominator::DatasetWide,
            years: vec![2016, 2015],
            points: vec![point(2016, 1), point(2016, 2), point(2015, 1)],
        };
        assert_eq!(timeline.series(2016).count(), 2);
        assert_eq!(timeline.series(2015).count(), 1);
        assert_eq!(timeline.series(2014).count(), 0);
    }
}
