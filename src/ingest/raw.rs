//! Raw roster rows and their conversion into employee records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::config::IngestConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeRecord;

/// One row of the HR roster CSV, as text.
///
/// Columns not listed here are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEmployeeRow {
    /// Employee name ("Last, First").
    #[serde(rename = "Employee_Name", default)]
    pub employee_name: String,
    /// Employee id.
    #[serde(rename = "EmpID", default)]
    pub employee_id: String,
    /// Department label before alias mapping.
    #[serde(rename = "Department", default)]
    pub department: String,
    /// Gender, possibly padded.
    #[serde(rename = "Sex", default)]
    pub sex: String,
    /// Employment status.
    #[serde(rename = "EmploymentStatus", default)]
    pub employment_status: String,
    /// Termination flag, "1" for terminated.
    #[serde(rename = "Termd", default)]
    pub terminated: String,
    /// Salary.
    #[serde(rename = "Salary", default)]
    pub salary: String,
    /// Engagement survey score.
    #[serde(rename = "EngagementSurvey", default)]
    pub engagement_survey: String,
    /// Hire date.
    #[serde(rename = "DateofHire", default)]
    pub date_of_hire: String,
    /// Termination date.
    #[serde(rename = "DateofTermination", default)]
    pub date_of_termination: String,
    /// Termination reason.
    #[serde(rename = "TermReason", default)]
    pub term_reason: String,
    /// Manager name.
    #[serde(rename = "ManagerName", default)]
    pub manager_name: String,
}

impl RawEmployeeRow {
    /// Cleans the row into a record.
    ///
    /// Categorical strings are trimmed and the department alias map applied.
    /// Unparseable dates and blank scores become absent. A salary that is not
    /// a non-negative number rejects the row.
    pub fn into_record(self, config: &IngestConfig) -> EngineResult<EmployeeRecord> {
        let employee_id = self.employee_id.trim().to_string();

        let salary = Decimal::from_str(self.salary.trim()).map_err(|e| {
            EngineError::InvalidEmployee {
                employee_id: employee_id.clone(),
                field: "salary".to_string(),
                message: format!("'{}' is not a number: {}", self.salary, e),
            }
        })?;

        let department = self.department.trim();
        let department = config
            .department_aliases
            .get(department)
            .map(String::as_str)
            .unwrap_or(department)
            .to_string();

        let record = EmployeeRecord {
            employee_id,
            employee_name: self.employee_name.trim().to_string(),
            department,
            gender: self.sex.trim().to_string(),
            employment_status: self.employment_status.trim().to_string(),
            is_terminated: self.terminated.trim() == "1",
            salary,
            engagement_score: Decimal::from_str(self.engagement_survey.trim()).ok(),
            hire_date: parse_date(&self.date_of_hire, &config.date_formats),
            termination_date: parse_date(&self.date_of_termination, &config.date_formats),
            termination_reason: self.term_reason.trim().to_string(),
            manager_name: self.manager_name.trim().to_string(),
        };

        record.validate()?;
        Ok(record)
    }
}

/// Parses a date with the first matching format; anything else is absent.
pub fn parse_date(value: &str, formats: &[String]) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> RawEmployeeRow {
        RawEmployeeRow {
            employee_name: "Adinolfi, Wilson  K".to_string(),
            employee_id: "10026".to_string(),
            department: "Production       ".to_string(),
            sex: "M ".to_string(),
            employment_status: "Active".to_string(),
            terminated: "0".to_string(),
            salary: "62506".to_string(),
            engagement_survey: "4.6".to_string(),
            date_of_hire: "7/5/2011".to_string(),
            date_of_termination: String::new(),
            term_reason: "N/A-StillEmployed".to_string(),
            manager_name: "Michael Albert".to_string(),
        }
    }

    #[test]
    fn test_active_row_is_cleaned() {
        let record = row().into_record(&IngestConfig::default()).unwrap();
        assert_eq!(record.employee_id, "10026");
        assert_eq!(record.department, "Production");
        assert_eq!(record.gender, "M");
        assert!(!record.is_terminated);
        assert_eq!(record.salary, Decimal::new(62506, 0));
        assert_eq!(record.engagement_score, Some(Decimal::new(46, 1)));
        assert_eq!(record.hire_date, NaiveDate::from_ymd_opt(2011, 7, 5));
        assert_eq!(record.termination_date, None);
        assert_eq!(record.hire_year(), Some(2011));
    }

    #[test]
    fn test_terminated_row_derives_year_and_month() {
        let mut raw = row();
        raw.terminated = "1".to_string();
        raw.employment_status = "Voluntarily Terminated".to_string();
        raw.date_of_termination = "6/16/2016".to_string();

        let record = raw.into_record(&IngestConfig::default()).unwrap();
        assert!(record.is_terminated);
        assert_eq!(record.termination_year(), Some(2016));
        assert_eq!(record.termination_month(), Some(6));
    }

    #[test]
    fn test_department_aliases_are_applied() {
        let mut raw = row();
        raw.department = " Executive Office ".to_string();
        let record = raw.into_record(&IngestConfig::default()).unwrap();
        assert_eq!(record.department, "Admin and Executive Offices");
    }

    #[test]
    fn test_unparseable_dates_and_scores_are_absent() {
        let mut raw = row();
        raw.date_of_hire = "sometime in 2011".to_string();
        raw.engagement_survey = "  ".to_string();
        let record = raw.into_record(&IngestConfig::default()).unwrap();
        assert_eq!(record.hire_date, None);
        assert_eq!(record.engagement_score, None);
    }

    #[test]
    fn test_iso_dates_are_accepted() {
        let formats = IngestConfig::default().date_formats;
        assert_eq!(
            parse_date("2015-04-20", &formats),
            NaiveDate::from_ymd_opt(2015, 4, 20)
        );
        assert_eq!(parse_date("", &formats), None);
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        let mut raw = row();
        raw.salary = "-10".to_string();
        let err = raw.into_record(&IngestConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidEmployee { ref field, .. } if field == "salary"));
    }

    #[test]
    fn test_non_numeric_salary_is_rejected() {
        let mut raw = row();
        raw.salary = "lots".to_string();
        assert!(raw.into_record(&IngestConfig::default()).is_err());
    }

    #[test]
    fn test_blank_id_is_rejected() {
        let mut raw = row();
        raw.employee_id = " ".to_string();
        let err = raw.into_record(&IngestConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidEmployee { ref field, .. } if field == "employee_id"));
    }
}
