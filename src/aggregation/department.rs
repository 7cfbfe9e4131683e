//! Terminations per department, as counts or as attrition rates.

use std::collections::HashMap;

use crate::config::DepartmentBreakdownMode;
use crate::models::{CategoryValue, ChartData, DepartmentBreakdown};

use super::grouping::{count_by, rate, sort_by_count_desc};
use super::slices::Slices;

/// Computes the department breakdown in the requested mode.
///
/// In [`DepartmentBreakdownMode::RawCount`] only departments with
/// terminations appear. In [`DepartmentBreakdownMode::Rate`] every department
/// of the filtered population appears, with a rate of zero when nobody left.
pub fn compute_department_breakdown(
    slices: &Slices<'_>,
    mode: DepartmentBreakdownMode,
) -> ChartData<DepartmentBreakdown> {
    let rows = match mode {
        DepartmentBreakdownMode::RawCount => raw_counts(slices),
        DepartmentBreakdownMode::Rate => rates(slices),
    };

    if rows.is_empty() {
        return ChartData::NoData;
    }
    ChartData::Ready(DepartmentBreakdown { mode, rows })
}

fn raw_counts(slices: &Slices<'_>) -> Vec<CategoryValue> {
    let mut counts = count_by(&slices.terminated, |r| r.department.as_str());
    sort_by_count_desc(&mut counts);

    counts
        .into_iter()
        .map(|(department, count)| CategoryValue::count(department, count))
        .collect()
}

fn rates(slices: &Slices<'_>) -> Vec<CategoryValue> {
    let headcounts = count_by(&slices.full, |r| r.department.as_str());
    let terminated: HashMap<&str, u64> = count_by(&slices.terminated, |r| r.department.as_str())
        .into_iter()
        .collect();

    // Left join on the population's departments.
    let mut rows: Vec<CategoryValue> = headcounts
        .into_iter()
        .map(|(department, headcount)| {
            let left = terminated.get(department).copied().unwrap_or(0);
            CategoryValue {
                category: department.to_string(),
                value: rate(left, headcount),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.value.cmp(&a.value));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::build_slices;
    use crate::models::{Dataset, EmployeeRecord, FilterSpec};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee(id: &str, dept: &str) -> EmployeeRecord {
        EmployeeRecord::new(id, id, dept, "F", Decimal::ZERO)
    }

    fn dataset() -> Dataset {
        let date = |m| NaiveDate::from_ymd_opt(2020, m, 1);
        Dataset::new(vec![
            employee("1", "A"),
            employee("2", "A").terminated("Voluntarily Terminated", date(3)),
            employee("3", "B").terminated("Terminated for Cause", date(5)),
            employee("4", "C"),
            employee("5", "C"),
            employee("6", "D").terminated("Voluntarily Terminated", date(6)),
            employee("7", "D").terminated("Voluntarily Terminated", date(7)),
            employee("8", "D"),
        ])
        .unwrap()
    }

    fn rows(slices: &Slices<'_>, mode: DepartmentBreakdownMode) -> Vec<CategoryValue> {
        match compute_department_breakdown(slices, mode) {
            ChartData::Ready(breakdown) => {
                assert_eq!(breakdown.mode, mode);
                breakdown.rows
            }
            ChartData::NoData => panic!("Expected rows"),
        }
    }

    #[test]
    fn test_raw_counts_sorted_descending() {
        let dataset = dataset();
        let slices = build_slices(&dataset, &FilterSpec::unrestricted());
        let rows = rows(&slices, DepartmentBreakdownMode::RawCount);
        let categories: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["D", "A", "B"]);
        assert_eq!(rows[0].value, Decimal::from(2));
    }

    #[test]
    fn test_rates_keep_departments_without_terminations() {
        let dataset = dataset();
        let slices = build_slices(&dataset, &FilterSpec::unrestricted());
        let rows = rows(&slices, DepartmentBreakdownMode::Rate);

        let categories: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["B", "D", "A", "C"]);
        assert_eq!(rows[0].value, dec("100.0"));
        assert_eq!(rows[1].value, dec("66.7"));
        assert_eq!(rows[2].value, dec("50.0"));
        assert_eq!(rows[3].value, Decimal::ZERO);
    }

    #[test]
    fn test_rates_use_narrowed_terminations() {
        let dataset = dataset();
        let filter = FilterSpec::unrestricted().with_statuses(["Terminated for Cause"]);
        let slices = build_slices(&dataset, &filter);
        let rows = rows(&slices, DepartmentBreakdownMode::Rate);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].category, "B");
        assert!(rows[1..].iter().all(|r| r.value == Decimal::ZERO));
    }

    #[test]
    fn test_raw_counts_no_data_without_terminations() {
        let dataset = Dataset::new(vec![employee("1", "A")]).unwrap();
        let slices = build_slices(&dataset, &FilterSpec::unrestricted());
        assert!(compute_department_breakdown(&slices, DepartmentBreakdownMode::RawCount).is_no_data());

        // The rate view still reports the department, at zero.
        let rows = rows(&slices, DepartmentBreakdownMode::Rate);
        assert_eq!(rows, vec![CategoryValue { category: "A".into(), value: dec("0.0") }]);
    }

    #[test]
    fn test_empty_population_is_no_data_in_both_modes() {
        let dataset = Dataset::empty();
        let slices = build_slices(&dataset, &FilterSpec::unrestricted());
        assert!(compute_department_breakdown(&slices, DepartmentBreakdownMode::RawCount).is_no_data());
        assert!(compute_department_breakdown(&slices, DepartmentBreakdownMode::Rate).is_no_data());
    }
}
