//! Filter selection models.
//!
//! [`FilterSelection`] is the raw input from the presentation layer, where any
//! part may be missing. [`FilterSpec`] is its normalized form, built once per
//! engine invocation by [`FilterSpec::select`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::dataset::FilterOptions;
use super::employee::EmployeeRecord;

/// Raw filter input, as submitted by a caller.
///
/// A missing or empty list means "no restriction".
///
/// # Example
///
/// ```
/// use attrition_engine::models::FilterSelection;
///
/// let selection: FilterSelection = serde_json::from_str(
///     r#"{"departments": ["Sales"], "year_range": [2014, 2016]}"#,
/// ).unwrap();
/// assert_eq!(selection.year_range, Some((2014, 2016)));
/// assert!(selection.genders.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Departments to keep.
    #[serde(default)]
    pub departments: Option<Vec<String>>,
    /// Genders to keep.
    #[serde(default)]
    pub genders: Option<Vec<String>>,
    /// Employment statuses to keep in the terminated slice.
    #[serde(default)]
    pub statuses: Option<Vec<String>>,
    /// Inclusive termination-year range for the terminated slice.
    #[serde(default)]
    pub year_range: Option<(i32, i32)>,
}

/// An inclusive range of termination years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    /// First year included.
    pub min: i32,
    /// Last year included.
    pub max: i32,
}

impl YearRange {
    /// Creates a range, swapping the bounds if they are reversed.
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Returns true if `year` lies within the range.
    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }
}

/// Normalized filter for one engine invocation.
///
/// Department and gender restrict the whole population. Status and year
/// range only narrow the terminated slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    departments: BTreeSet<String>,
    genders: BTreeSet<String>,
    statuses: BTreeSet<String>,
    year_range: Option<YearRange>,
}

impl FilterSpec {
    /// A filter that restricts nothing.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Normalizes a raw selection.
    ///
    /// Values are accepted as-is; unknown values simply match nothing.
    pub fn select(selection: &FilterSelection) -> Self {
        fn to_set(values: &Option<Vec<String>>) -> BTreeSet<String> {
            values.iter().flatten().cloned().collect()
        }

        Self {
            departments: to_set(&selection.departments),
            genders: to_set(&selection.genders),
            statuses: to_set(&selection.statuses),
            year_range: selection.year_range.map(|(a, b)| YearRange::new(a, b)),
        }
    }

    /// Restricts the population to the given departments.
    pub fn with_departments<I, S>(mut self, departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.departments = departments.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts the population to the given genders.
    pub fn with_genders<I, S>(mut self, genders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genders = genders.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts the terminated slice to the given statuses.
    pub fn with_statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statuses = statuses.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts the terminated slice to an inclusive year range.
    pub fn with_year_range(mut self, min: i32, max: i32) -> Self {
        self.year_range = Some(YearRange::new(min, max));
        self
    }

    /// The selected departments (empty means all).
    pub fn departments(&self) -> &BTreeSet<String> {
        &self.departments
    }

    /// The selected genders (empty means all).
    pub fn genders(&self) -> &BTreeSet<String> {
        &self.genders
    }

    /// The selected statuses (empty means all).
    pub fn statuses(&self) -> &BTreeSet<String> {
        &self.statuses
    }

    /// The selected year range, if any.
    pub fn year_range(&self) -> Option<YearRange> {
        self.year_range
    }

    /// Department and gender test, applied to the whole population.
    pub fn matches_population(&self, record: &EmployeeRecord) -> bool {
        (self.departments.is_empty() || self.departments.contains(&record.department))
            && (self.genders.is_empty() || self.genders.contains(&record.gender))
    }

    /// Status and year test, applied only to terminated records.
    ///
    /// A record without a termination year never matches a set year range.
    pub fn matches_termination(&self, record: &EmployeeRecord) -> bool {
        let status_ok =
            self.statuses.is_empty() || self.statuses.contains(&record.employment_status);
        let year_ok = match self.year_range {
            None => true,
            Some(range) => record
                .termination_year()
                .is_some_and(|year| range.contains(year)),
        };
        status_ok && year_ok
    }

    /// Selected values that are not among the dataset's known domains.
    pub fn unknown_values(&self, options: &FilterOptions) -> Vec<String> {
        let departments = self
            .departments
            .iter()
            .filter(|d| !options.departments.contains(d));
        let genders = self.genders.iter().filter(|g| !options.genders.contains(g));
        let statuses = self.statuses.iter().filter(|s| !options.statuses.contains(s));

        departments.chain(genders).chain(statuses).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dataset;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn terminated_in(year: i32, status: &str) -> EmployeeRecord {
        EmployeeRecord::new("1", "A", "Sales", "F", Decimal::new(50000, 0))
            .terminated(status, NaiveDate::from_ymd_opt(year, 6, 1))
    }

    #[test]
    fn test_select_treats_missing_and_empty_lists_alike() {
        let missing = FilterSpec::select(&FilterSelection::default());
        let empty = FilterSpec::select(&FilterSelection {
            departments: Some(vec![]),
            genders: Some(vec![]),
            statuses: Some(vec![]),
            year_range: None,
        });
        assert_eq!(missing, empty);
        assert_eq!(missing, FilterSpec::unrestricted());
    }

    #[test]
    fn test_select_deduplicates_values() {
        let spec = FilterSpec::select(&FilterSelection {
            departments: Some(vec!["Sales".into(), "Sales".into(), "IT/IS".into()]),
            ..Default::default()
        });
        assert_eq!(spec.departments().len(), 2);
    }

    #[test]
    fn test_reversed_year_range_is_swapped() {
        let spec = FilterSpec::select(&FilterSelection {
            year_range: Some((2018, 2012)),
            ..Default::default()
        });
        assert_eq!(spec.year_range(), Some(YearRange { min: 2012, max: 2018 }));
    }

    #[test]
    fn test_year_range_is_inclusive() {
        let range = YearRange::new(2014, 2016);
        assert!(range.contains(2014));
        assert!(range.contains(2016));
        assert!(!range.contains(2013));
        assert!(!range.contains(2017));
    }

    #[test]
    fn test_population_match_ignores_status_and_year() {
        let spec = FilterSpec::unrestricted()
            .with_departments(["Sales"])
            .with_statuses(["Terminated for Cause"])
            .with_year_range(2000, 2001);
        let record = EmployeeRecord::new("1", "A", "Sales", "F", Decimal::ZERO);
        assert!(spec.matches_population(&record));
    }

    #[test]
    fn test_termination_match_requires_year_when_range_set() {
        let spec = FilterSpec::unrestricted().with_year_range(2015, 2016);
        let undated = EmployeeRecord::new("1", "A", "Sales", "F", Decimal::ZERO)
            .terminated("Voluntarily Terminated", None);
        assert!(!spec.matches_termination(&undated));
        assert!(spec.matches_termination(&terminated_in(2015, "Voluntarily Terminated")));
        assert!(!spec.matches_termination(&terminated_in(2017, "Voluntarily Terminated")));
    }

    #[test]
    fn test_termination_match_filters_status() {
        let spec = FilterSpec::unrestricted().with_statuses(["Terminated for Cause"]);
        assert!(spec.matches_termination(&terminated_in(2015, "Terminated for Cause")));
        assert!(!spec.matches_termination(&terminated_in(2015, "Voluntarily Terminated")));
    }

    #[test]
    fn test_unknown_values_are_reported() {
        let dataset = Dataset::new(vec![EmployeeRecord::new(
            "1",
            "A",
            "Sales",
            "F",
            Decimal::ZERO,
        )])
        .unwrap();
        let spec = FilterSpec::unrestricted()
            .with_departments(["Sales", "Marketing"])
            .with_genders(["X"])
            .with_statuses(["Retired"]);

        let unknown = spec.unknown_values(&dataset.filter_options());
        assert_eq!(unknown, vec!["Marketing", "X", "Retired"]);
    }
}
