//! Employee record model.
//!
//! This module defines [`EmployeeRecord`], one pre-cleaned row of the HR roster.
//! Year and month fields are derived from the stored dates, so a record carries
//! a termination year exactly when it carries a termination date.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Employment status of an employee dismissed by the employer.
pub const STATUS_TERMINATED_FOR_CAUSE: &str = "Terminated for Cause";

/// Employment status of an employee who resigned.
pub const STATUS_VOLUNTARILY_TERMINATED: &str = "Voluntarily Terminated";

/// The termination statuses offered as filter options.
pub const TERMINATION_STATUSES: [&str; 2] =
    [STATUS_TERMINATED_FOR_CAUSE, STATUS_VOLUNTARILY_TERMINATED];

/// Represents one employee of the roster, after ingestion.
///
/// # Example
///
/// ```
/// use attrition_engine::models::EmployeeRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = EmployeeRecord::new("10001", "Doe, Jane", "Production", "F", Decimal::new(62000, 0))
///     .terminated("Voluntarily Terminated", NaiveDate::from_ymd_opt(2016, 4, 20));
///
/// assert!(record.is_terminated);
/// assert_eq!(record.termination_year(), Some(2016));
/// assert_eq!(record.termination_month(), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// Display name, as recorded in the roster ("Last, First").
    pub employee_name: String,
    /// Canonical department label.
    pub department: String,
    /// Trimmed gender label (e.g., "F", "M").
    pub gender: String,
    /// Employment status (e.g., "Active", "Voluntarily Terminated").
    pub employment_status: String,
    /// Source of truth for the active/terminated split.
    pub is_terminated: bool,
    /// Annual salary.
    pub salary: Decimal,
    /// Engagement survey score, when the employee answered the survey.
    #[serde(default)]
    pub engagement_score: Option<Decimal>,
    /// Date of hire, if parseable.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Date of termination, if parseable.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    /// Free-text termination reason.
    #[serde(default)]
    pub termination_reason: String,
    /// Name of the employee's manager.
    #[serde(default)]
    pub manager_name: String,
}

impl EmployeeRecord {
    /// Creates an active employee with no optional fields set.
    pub fn new(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        department: impl Into<String>,
        gender: impl Into<String>,
        salary: Decimal,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            department: department.into(),
            gender: gender.into(),
            employment_status: "Active".to_string(),
            is_terminated: false,
            salary,
            engagement_score: None,
            hire_date: None,
            termination_date: None,
            termination_reason: String::new(),
            manager_name: String::new(),
        }
    }

    /// Marks the employee as terminated with the given status and date.
    pub fn terminated(mut self, status: impl Into<String>, date: Option<NaiveDate>) -> Self {
        self.is_terminated = true;
        self.employment_status = status.into();
        self.termination_date = date;
        self
    }

    /// Sets the termination reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.termination_reason = reason.into();
        self
    }

    /// Sets the manager name.
    pub fn with_manager(mut self, manager: impl Into<String>) -> Self {
        self.manager_name = manager.into();
        self
    }

    /// Sets the hire date.
    pub fn with_hire_date(mut self, date: Option<NaiveDate>) -> Self {
        self.hire_date = date;
        self
    }

    /// Sets the engagement score.
    pub fn with_engagement(mut self, score: Option<Decimal>) -> Self {
        self.engagement_score = score;
        self
    }

    /// Year of the termination date.
    pub fn termination_year(&self) -> Option<i32> {
        self.termination_date.map(|d| d.year())
    }

    /// Month (1-12) of the termination date.
    pub fn termination_month(&self) -> Option<u32> {
        self.termination_date.map(|d| d.month())
    }

    /// Year of the hire date.
    pub fn hire_year(&self) -> Option<i32> {
        self.hire_date.map(|d| d.year())
    }

    /// Checks the roster contract: a non-blank id and a non-negative salary.
    pub fn validate(&self) -> EngineResult<()> {
        if self.employee_id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                employee_id: self.employee_id.clone(),
                field: "employee_id".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        if self.salary < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                employee_id: self.employee_id.clone(),
                field: "salary".to_string(),
                message: format!("must not be negative (got {})", self.salary),
            });
        }
        Ok(())
    }
}
