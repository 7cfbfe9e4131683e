//! Most frequent termination reasons.

use crate::models::{CategoryValue, ChartData};

use super::grouping::{count_by, sort_by_count_desc};
use super::slices::Slices;

/// Picks the `limit` most frequent termination reasons.
///
/// Selection is by count descending, ties going to the reason seen first.
/// Rows are emitted in reverse of that ranking (ascending by count), the
/// order a horizontal bar chart draws bottom-up.
pub fn compute_reason_breakdown(slices: &Slices<'_>, limit: usize) -> ChartData<Vec<CategoryValue>> {
    let mut counts = count_by(&slices.terminated, |r| r.termination_reason.as_str());
    sort_by_count_desc(&mut counts);
    counts.truncate(limit);

    ChartData::from_rows(
        counts
            .into_iter()
            .rev()
            .map(|(reason, count)| CategoryValue::count(reason, count))
            .collect(),
    )
}
