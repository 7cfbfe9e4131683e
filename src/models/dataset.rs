//! Immutable roster dataset.
//!
//! A [`Dataset`] is built once by ingestion and shared read-only by every
//! engine invocation. The engine never mutates it; each call derives its own
//! filtered slices.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::error::{EngineError, EngineResult};

use super::employee::{EmployeeRecord, TERMINATION_STATUSES};

/// Fallback bounds of the year range when no termination year is known.
pub const DEFAULT_MIN_YEAR: i32 = 2010;
/// Fallback upper bound of the year range.
pub const DEFAULT_MAX_YEAR: i32 = 2025;

/// An ordered, validated collection of employee records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<EmployeeRecord>,
}

impl Dataset {
    /// Builds a dataset, rejecting records that break the roster contract.
    ///
    /// Every record must pass [`EmployeeRecord::validate`] and employee ids
    /// must be unique.
    ///
    /// # Example
    ///
    /// ```
    /// use attrition_engine::models::{Dataset, EmployeeRecord};
    /// use rust_decimal::Decimal;
    ///
    /// let dataset = Dataset::new(vec![
    ///     EmployeeRecord::new("1", "A", "Sales", "F", Decimal::new(50000, 0)),
    ///     EmployeeRecord::new("2", "B", "Sales", "M", Decimal::new(52000, 0)),
    /// ])?;
    /// assert_eq!(dataset.len(), 2);
    /// # Ok::<(), attrition_engine::error::EngineError>(())
    /// ```
    pub fn new(records: Vec<EmployeeRecord>) -> EngineResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !seen.insert(record.employee_id.as_str()) {
                return Err(EngineError::InvalidEmployee {
                    employee_id: record.employee_id.clone(),
                    field: "employee_id".to_string(),
                    message: "duplicate employee id".to_string(),
                });
            }
        }
        Ok(Self { records })
    }

    /// Parses a JSON array of records and validates it.
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let records: Vec<EmployeeRecord> =
            serde_json::from_str(json).map_err(|e| EngineError::DatasetParseError {
                line: e.line() as u64,
                message: e.to_string(),
            })?;
        Self::new(records)
    }

    /// An empty dataset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The records, in ingestion order.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Known filter domains of this dataset.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_dataset(self)
    }
}

/// The values a caller can meaningfully filter on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Sorted distinct departments.
    pub departments: Vec<String>,
    /// Sorted distinct genders.
    pub genders: Vec<String>,
    /// Termination statuses offered for the terminated slice.
    pub statuses: Vec<String>,
    /// Sorted distinct termination years.
    pub years: Vec<i32>,
    /// Lowest termination year, or the fallback when none exist.
    pub min_year: i32,
    /// Highest termination year, or the fallback when none exist.
    pub max_year: i32,
}

impl FilterOptions {
    /// Collects the known domains of a dataset.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut departments = BTreeSet::new();
        let mut genders = BTreeSet::new();
        let mut years = BTreeSet::new();

        for record in dataset.records() {
            if !record.department.is_empty() {
                departments.insert(record.department.clone());
            }
            if !record.gender.is_empty() {
                genders.insert(record.gender.clone());
            }
            if let Some(year) = record.termination_year() {
                years.insert(year);
            }
        }

        let years: Vec<i32> = years.into_iter().collect();
        let min_year = years.first().copied().unwrap_or(DEFAULT_MIN_YEAR);
        let max_year = years.last().copied().unwrap_or(DEFAULT_MAX_YEAR);

        Self {
            departments: departments.into_iter().collect(),
            genders: genders.into_iter().collect(),
            statuses: TERMINATION_STATUSES.iter().map(|s| s.to_string()).collect(),
            years,
            min_year,
            max_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn record(id: &str, dept: &str, gender: &str) -> EmployeeRecord {
        EmployeeRecord::new(id, format!("Employee {}", id), dept, gender, Decimal::new(50000, 0))
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let result = Dataset::new(vec![record("1", "Sales", "F"), record("1", "IT/IS", "M")]);
        match result {
            Err(EngineError::InvalidEmployee { employee_id, message, .. }) => {
                assert_eq!(employee_id, "1");
                assert!(message.contains("duplicate"));
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_negative_salary() {
        let mut bad = record("2", "Sales", "F");
        bad.salary = Decimal::new(-100, 0);
        assert!(Dataset::new(vec![record("1", "Sales", "M"), bad]).is_err());
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::empty();
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
    }

    #[test]
    fn test_filter_options_are_sorted_and_distinct() {
        let dataset = Dataset::new(vec![
            record("1", "Sales", "M"),
            record("2", "IT/IS", "F"),
            record("3", "Sales", "F"),
            record("4", "Production", "M")
                .terminated("Voluntarily Terminated", NaiveDate::from_ymd_opt(2016, 3, 1)),
            record("5", "Production", "F")
                .terminated("Terminated for Cause", NaiveDate::from_ymd_opt(2012, 9, 2)),
        ])
        .unwrap();

        let options = dataset.filter_options();
        assert_eq!(options.departments, vec!["IT/IS", "Production", "Sales"]);
        assert_eq!(options.genders, vec!["F", "M"]);
        assert_eq!(options.years, vec![2012, 2016]);
        assert_eq!(options.min_year, 2012);
        assert_eq!(options.max_year, 2016);
        assert_eq!(
            options.statuses,
            vec!["Terminated for Cause", "Voluntarily Terminated"]
        );
    }

    #[test]
    fn test_filter_options_fall_back_without_years() {
        let dataset = Dataset::new(vec![record("1", "Sales", "M")]).unwrap();
        let options = dataset.filter_options();
        assert!(options.years.is_empty());
        assert_eq!(options.min_year, DEFAULT_MIN_YEAR);
        assert_eq!(options.max_year, DEFAULT_MAX_YEAR);
    }

    #[test]
    fn test_from_json_str_reports_parse_errors() {
        let result = Dataset::from_json_str("[{\"employee_id\": 1}");
        assert!(matches!(result, Err(EngineError::DatasetParseError { .. })));
    }
}
