//! Engagement of active versus terminated employees, per department.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{ChartData, EmployeeRecord, EngagementRow};

use super::grouping::{mean, round_to};
use super::slices::Slices;

/// Decimal places kept on engagement means.
const MEAN_DP: u32 = 2;

/// Computes mean engagement per department for both slices.
///
/// The two sides are outer-joined on department: a department seen on only
/// one side is kept, with the other side's mean absent. Records without a
/// score are left out of their group's mean, and a group with no scores at
/// all has an absent mean rather than zero. Rows are ordered by department.
pub fn compute_engagement_comparison(slices: &Slices<'_>) -> ChartData<Vec<EngagementRow>> {
    let active = means_by_department(&slices.active);
    let terminated = means_by_department(&slices.terminated);

    let mut joined: BTreeMap<&str, EngagementRow> = BTreeMap::new();
    for (department, avg) in active {
        joined.entry(department).or_insert_with(|| empty_row(department)).active_mean = avg;
    }
    for (department, avg) in terminated {
        joined.entry(department).or_insert_with(|| empty_row(department)).terminated_mean = avg;
    }

    ChartData::from_rows(joined.into_values().collect())
}

fn empty_row(department: &str) -> EngagementRow {
    EngagementRow {
        department: department.to_string(),
        active_mean: None,
        terminated_mean: None,
    }
}

fn means_by_department<'a>(records: &[&'a EmployeeRecord]) -> BTreeMap<&'a str, Option<Decimal>> {
    let mut scores: BTreeMap<&'a str, Vec<Decimal>> = BTreeMap::new();
    for &record in records {
        let group = scores.entry(record.department.as_str()).or_default();
        if let Some(score) = record.engagement_score {
            group.push(score);
        }
    }

    scores
        .into_iter()
        .map(|(department, values)| (department, mean(values).map(|m| round_to(m, MEAN_DP))))
        .collect()
}
