//! Terminations per gender.

use crate::models::{CategoryValue, ChartData};

use super::grouping::{count_by, sort_by_count_desc};
use super::slices::Slices;

/// Counts the terminated slice per gender, largest group first.
pub fn compute_gender_breakdown(slices: &Slices<'_>) -> ChartData<Vec<CategoryValue>> {
    let mut counts = count_by(&slices.terminated, |r| r.gender.as_str());
    sort_by_count_desc(&mut counts);

    ChartData::from_rows(
        counts
            .into_iter()
            .map(|(gender, count)| CategoryValue::count(gender, count))
            .collect(),
    )
}
