//! Headline figures: total, active, terminated and attrition rate.

use crate::models::{KpiDisplay, Kpis};

use super::grouping::rate;
use super::slices::Slices;

/// Computes the headline figures.
///
/// The active count is `total - terminated`, where `terminated` is the slice
/// after status and year narrowing. A terminated employee excluded by those
/// filters is therefore counted as active.
pub fn compute_kpis(slices: &Slices<'_>) -> Kpis {
    let total = slices.full.len() as u64;
    let terminated = slices.terminated.len() as u64;

    Kpis {
        total,
        active: total - terminated,
        terminated,
        attrition_rate: rate(terminated, total),
    }
}

impl Kpis {
    /// Display strings: plain integers and a one-decimal percentage.
    ///
    /// # Example
    ///
    /// ```
    /// use attrition_engine::models::Kpis;
    /// use rust_decimal::Decimal;
    ///
    /// let kpis = Kpis { total: 3, active: 1, terminated: 2, attrition_rate: Decimal::new(667, 1) };
    /// assert_eq!(kpis.display().attrition_rate, "66.7%");
    /// ```
    pub fn display(&self) -> KpiDisplay {
        KpiDisplay {
            total: self.total.to_string(),
            active: self.active.to_string(),
            terminated: self.terminated.to_string(),
            attrition_rate: format!("{:.1}%", self.attrition_rate),
        }
    }
}
