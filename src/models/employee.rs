//! Employee master data.
//!
//! This module defines the [`Employee`] struct and [`EmploymentStatus`] enum
//! consumed by the payroll pipeline.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Hours per working day used to estimate a monthly salary.
pub const ESTIMATED_DAILY_HOURS: Decimal = dec!(8);

/// Working days per month used to estimate a monthly salary.
pub const ESTIMATED_WORKING_DAYS_PER_MONTH: Decimal = dec!(22);

/// Largest accepted hourly rate in PHP.
pub const MAX_HOURLY_RATE: Decimal = dec!(1000000);

/// Largest accepted basic monthly salary in PHP.
pub const MAX_BASIC_SALARY: Decimal = dec!(1000000000);

/// Represents the employment status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Regular (permanent) employee.
    Regular,
    /// Employee still under probation.
    Probationary,
}

impl std::fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmploymentStatus::Regular => write!(f, "Regular"),
            EmploymentStatus::Probationary => write!(f, "Probationary"),
        }
    }
}

/// Represents an employee whose attendance is paid through the engine.
///
/// Immutable once loaded and keyed by [`Employee::id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee (e.g. "10001").
    pub id: String,
    /// Full name of the employee.
    pub name: String,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// Hourly rate in PHP.
    pub hourly_rate: Decimal,
    /// Basic monthly salary in PHP, used for the SSS bracket lookup.
    /// Zero when unknown.
    #[serde(default)]
    pub basic_salary: Decimal,
    /// Employment status.
    pub status: EmploymentStatus,
    /// Job position (e.g. "Account Manager").
    pub position: String,
}

impl Employee {
    /// Returns the monthly salary estimated from the hourly rate
    /// (`hourly_rate × 8 × 22`).
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Employee, EmploymentStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "10001".to_string(),
    ///     name: "Juan Dela Cruz".to_string(),
    ///     date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
    ///     hourly_rate: Decimal::new(50, 0),
    ///     basic_salary: Decimal::ZERO,
    ///     status: EmploymentStatus::Regular,
    ///     position: "Account Rank and File".to_string(),
    /// };
    /// assert_eq!(employee.estimated_monthly_salary(), Decimal::new(8800, 0));
    /// ```
    pub fn estimated_monthly_salary(&self) -> Decimal {
        self.hourly_rate * ESTIMATED_DAILY_HOURS * ESTIMATED_WORKING_DAYS_PER_MONTH
    }

    /// Returns the salary used for the SSS bracket lookup.
    ///
    /// The basic salary when it is positive, otherwise the estimate from
    /// [`Employee::estimated_monthly_salary`]. Gross income is unaffected.
    pub fn sss_salary_basis(&self) -> Decimal {
        if self.basic_salary > Decimal::ZERO {
            self.basic_salary
        } else {
            self.estimated_monthly_salary()
        }
    }

    /// Checks that the rate and salary are usable for payroll arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if the hourly rate is outside
    /// `0..=MAX_HOURLY_RATE` or the basic salary is outside
    /// `0..=MAX_BASIC_SALARY`.
    pub fn validate(&self) -> EngineResult<()> {
        check_amount(&self.id, "hourly_rate", self.hourly_rate, MAX_HOURLY_RATE)?;
        check_amount(&self.id, "basic_salary", self.basic_salary, MAX_BASIC_SALARY)
    }
}

fn check_amount(employee_id: &str, field: &str, value: Decimal, max: Decimal) -> EngineResult<()> {
    let message = if value < Decimal::ZERO {
        format!("must not be negative, got {}", value)
    } else if value > max {
        format!("must not exceed {}, got {}", max, value)
    } else {
        return Ok(());
    };
    Err(EngineError::InvalidEmployee {
        employee_id: employee_id.to_string(),
        field: field.to_string(),
        message,
    })
}
