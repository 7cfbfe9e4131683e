//! Recent terminations table.

use std::cmp::Reverse;

use crate::models::{EmployeeRecord, RecentTerminationRow};

use super::slices::Slices;

/// Lists the `limit` most recent terminations, newest first.
///
/// Records without a termination date sort after every dated record. An
/// empty terminated slice yields an empty table.
pub fn compute_recent_terminations(slices: &Slices<'_>, limit: usize) -> Vec<RecentTerminationRow> {
    let mut records: Vec<&EmployeeRecord> = slices.terminated.clone();
    // `None` is the smallest Option, so the reversed key puts it last.
    records.sort_by_key(|r| Reverse(r.termination_date));

    records
        .into_iter()
        .take(limit)
        .map(|r| RecentTerminationRow {
            employee_name: r.employee_name.clone(),
            department: r.department.clone(),
            termination_reason: r.termination_reason.clone(),
            termination_date: r.termination_date.map(|d| d.format("%Y-%m-%d").to_string()),
            manager_name: r.manager_name.clone(),
        })
        .collect()
}
