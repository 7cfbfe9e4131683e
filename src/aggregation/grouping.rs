//! Keyed counting and percentage helpers shared by the aggregators.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::EmployeeRecord;

/// Counts records per key, keeping keys in first-encounter order.
pub(crate) fn count_by<'a, F>(records: &[&'a EmployeeRecord], key: F) -> Vec<(&'a str, u64)>
where
    F: Fn(&'a EmployeeRecord) -> &'a str,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, u64)> = Vec::new();

    for &record in records {
        let k = key(record);
        match index.get(k) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(k, counts.len());
                counts.push((k, 1));
            }
        }
    }
    counts
}

/// Sorts counts descending; equal counts keep their encounter order.
pub(crate) fn sort_by_count_desc(counts: &mut [(&str, u64)]) {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
}

/// `part / whole * 100`, exact. Zero when `whole` is zero.
pub(crate) fn percentage(part: u64, whole: u64) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole)
}

/// Rounds half-to-even to `dp` places and pins the scale, so 50 prints as "50.0".
pub(crate) fn round_to(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(dp);
    rounded
}

/// `part / whole * 100` rounded to one decimal. Zero when `whole` is zero.
pub(crate) fn rate(part: u64, whole: u64) -> Decimal {
    round_to(percentage(part, whole), 1)
}

/// Arithmetic mean, or `None` for no values.
pub(crate) fn mean<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let (sum, n) = values
        .into_iter()
        .fold((Decimal::ZERO, 0u64), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / Decimal::from(n))
}
