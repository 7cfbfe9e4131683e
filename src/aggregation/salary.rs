//! Salary comparison table: mean salary of active versus terminated employees.

use rust_decimal::Decimal;

use crate::models::{EmployeeRecord, SalaryRow};

use super::grouping::{mean, round_to};
use super::slices::Slices;

/// Marker shown in place of a mean for an empty slice.
pub const NOT_AVAILABLE: &str = "N/A";

/// Builds the two-row salary comparison table.
pub fn compute_salary_comparison(slices: &Slices<'_>) -> Vec<SalaryRow> {
    vec![
        salary_row("Active", &slices.active),
        salary_row("Terminated", &slices.terminated),
    ]
}

fn salary_row(status: &str, records: &[&EmployeeRecord]) -> SalaryRow {
    let average = mean(records.iter().map(|r| r.salary)).map(|m| round_to(m, 2));
    let display = match average {
        Some(amount) => format_currency(amount),
        None => NOT_AVAILABLE.to_string(),
    };

    SalaryRow {
        status: status.to_string(),
        average,
        display,
    }
}

/// Formats an amount as dollars with thousands separators and two decimals.
///
/// # Example
///
/// ```
/// use attrition_engine::aggregation::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(123456789, 2)), "$1,234,567.89");
/// assert_eq!(format_currency(Decimal::new(5, 1)), "$0.50");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let fixed = format!("{:.2}", round_to(amount.abs(), 2));
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < Decimal::ZERO { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}
