//! Aggregation logic for the attrition engine.
//!
//! This module builds the filtered slices of a dataset and derives every
//! metric from them: the headline figures, the cumulative monthly termination
//! timeline, the gender, department and reason breakdowns, the engagement
//! comparison, and the salary and recent-termination tables. Each aggregator
//! reads only the slices and is independent of the others.

mod department;
mod engagement;
mod gender;
mod grouping;
mod kpis;
mod reasons;
mod recent;
mod salary;
mod slices;
mod timeline;

pub use department::compute_department_breakdown;
pub use engagement::compute_engagement_comparison;
pub use gender::compute_gender_breakdown;
pub use kpis::compute_kpis;
pub use reasons::compute_reason_breakdown;
pub use recent::compute_recent_terminations;
pub use salary::{NOT_AVAILABLE, compute_salary_comparison, format_currency};
pub use slices::{Slices, build_slices};
pub use timeline::{MONTH_LABELS, compute_timeline, month_label};
