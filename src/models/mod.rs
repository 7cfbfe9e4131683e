//! Core data models for the attrition engine.
//!
//! This module contains the roster records, the dataset, the filter
//! selection and the metrics result bundle.

mod dataset;
mod employee;
mod filter;
mod metrics_result;

pub use dataset::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, Dataset, FilterOptions};
pub use employee::{
    EmployeeRecord, STATUS_TERMINATED_FOR_CAUSE, STATUS_VOLUNTARILY_TERMINATED,
    TERMINATION_STATUSES,
};
pub use filter::{FilterSelection, FilterSpec, YearRange};
pub use metrics_result::{
    CategoryValue, ChartData, DepartmentBreakdown, EngagementRow, KpiDisplay, Kpis,
    MetricsResult, RecentTerminationRow, SalaryRow, Timeline, TimelinePoint,
};
