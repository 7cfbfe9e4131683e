//! Cumulative monthly termination rate per termination year.
//!
//! For each year present in the terminated slice the series has exactly twelve
//! points. Months without terminations contribute zero, so the running total
//! (and the rate) never decreases within a year.

use std::collections::BTreeMap;

use crate::config::TimelineDenominator;
use crate::models::{ChartData, Timeline, TimelinePoint};

use super::grouping::percentage;
use super::slices::Slices;

/// Three-letter month labels, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Returns the label for a month number (1-12).
pub fn month_label(month: u32) -> &'static str {
    MONTH_LABELS
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("")
}

/// Computes the cumulative termination rate series.
///
/// Yields [`ChartData::NoData`] when the population or the terminated slice is
/// empty, or when no terminated record carries a termination date.
pub fn compute_timeline(
    slices: &Slices<'_>,
    denominator: TimelineDenominator,
) -> ChartData<Timeline> {
    if slices.full.is_empty() || slices.terminated.is_empty() {
        return ChartData::NoData;
    }

    // year -> terminations per month, index 0 = January
    let mut monthly: BTreeMap<i32, [u64; 12]> = BTreeMap::new();
    for record in &slices.terminated {
        if let (Some(year), Some(month)) = (record.termination_year(), record.termination_month())
        {
            monthly.entry(year).or_insert([0; 12])[(month - 1) as usize] += 1;
        }
    }

    if monthly.is_empty() {
        return ChartData::NoData;
    }

    let mut years = Vec::with_capacity(monthly.len());
    let mut points = Vec::with_capacity(monthly.len() * 12);

    for (&year, counts) in monthly.iter().rev() {
        let headcount = headcount_for(slices, denominator, year);
        years.push(year);

        let mut cumulative = 0u64;
        for (i, &count) in counts.iter().enumerate() {
            cumulative += count;
            let month = i as u32 + 1;
            points.push(TimelinePoint {
                year,
                month,
                month_label: month_label(month).to_string(),
                monthly_terminations: count,
                cumulative_terminations: cumulative,
                cumulative_rate: percentage(cumulative, headcount),
            });
        }
    }

    ChartData::Ready(Timeline {
        denominator,
        years,
        points,
    })
}

/// Headcount the rates of `year` are measured against.
fn headcount_for(slices: &Slices<'_>, denominator: TimelineDenominator, year: i32) -> u64 {
    match denominator {
        TimelineDenominator::DatasetWide => slices.full.len() as u64,
        TimelineDenominator::HireYearCutoff => slices
            .full
            .iter()
            .filter(|r| r.hire_year().is_some_and(|hired| hired <= year))
            .count() as u64,
    }
}
