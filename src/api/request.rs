//! Request types for the Payroll Computation Engine API.
//!
//! This module defines the JSON request structures for the `/payroll/report`
//! and `/payroll/summaries` endpoints.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::PayrollQuery;
use crate::models::{
    DeMinimisBenefits, Employee, EmploymentStatus, PayPeriod, PeriodMode, TimeEntry,
};

/// The request body for the `/payroll/report` endpoint.
///
/// # Example JSON
///
/// ```json
/// {
///     "employees": [{
///         "id": "10001",
///         "name": "Manuel Garcia III",
///         "date_of_birth": "1983-10-11",
///         "hourly_rate": "535.71",
///         "basic_salary": "90000",
///         "status": "regular",
///         "position": "Chief Executive Officer"
///     }],
///     "time_entries": [{
///         "employee_id": "10001",
///         "clock_in": "2024-06-04T08:30:00",
///         "clock_out": "2024-06-04T18:00:00"
///     }],
///     "benefits": [{
///         "employee_id": "10001",
///         "rice_subsidy": "1500",
///         "phone_allowance": "2000",
///         "clothing_allowance": "1000"
///     }],
///     "query": {
///         "employee_id": "10001",
///         "start_date": "2024-06-01",
///         "end_date": "2024-06-30"
///     }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollReportRequest {
    /// Employee master data.
    pub employees: Vec<EmployeeRequest>,
    /// Attendance records.
    pub time_entries: Vec<TimeEntryRequest>,
    /// Monthly de-minimis entitlements; employees without one get none.
    #[serde(default)]
    pub benefits: Vec<BenefitEntitlementRequest>,
    /// The payroll query.
    pub query: QueryRequest,
}

/// The request body for the `/payroll/summaries` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummariesRequest {
    /// Employee master data.
    pub employees: Vec<EmployeeRequest>,
    /// Attendance records.
    pub time_entries: Vec<TimeEntryRequest>,
    /// How records are bucketed; monthly when omitted.
    #[serde(default)]
    pub period_mode: PeriodMode,
}

/// Employee master data in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Employee id.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Hourly rate in PHP.
    pub hourly_rate: Decimal,
    /// Basic monthly salary; zero or omitted means unknown.
    #[serde(default)]
    pub basic_salary: Decimal,
    /// Employment status.
    pub status: EmploymentStatus,
    /// Job position.
    pub position: String,
}

/// One attendance record in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryRequest {
    /// The employee who clocked in.
    pub employee_id: String,
    /// Clock-in timestamp.
    pub clock_in: NaiveDateTime,
    /// Clock-out timestamp.
    pub clock_out: NaiveDateTime,
    /// Whether the entry was flagged as intended overtime.
    #[serde(default)]
    pub has_overtime_flag: bool,
}

/// One employee's monthly de-minimis entitlement in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitEntitlementRequest {
    /// The entitled employee.
    pub employee_id: String,
    /// Rice subsidy in PHP.
    #[serde(default)]
    pub rice_subsidy: Decimal,
    /// Phone allowance in PHP.
    #[serde(default)]
    pub phone_allowance: Decimal,
    /// Clothing allowance in PHP.
    #[serde(default)]
    pub clothing_allowance: Decimal,
}

/// The query part of a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The employee to report on.
    pub employee_id: String,
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// How records are bucketed before merging; monthly when omitted.
    #[serde(default)]
    pub period_mode: PeriodMode,
    /// Divisor applied to monthly benefits; 1 when omitted.
    #[serde(default = "default_benefit_divisor")]
    pub benefit_divisor: Decimal,
}

fn default_benefit_divisor() -> Decimal {
    Decimal::ONE
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            date_of_birth: req.date_of_birth,
            hourly_rate: req.hourly_rate,
            basic_salary: req.basic_salary,
            status: req.status,
            position: req.position,
        }
    }
}

impl From<TimeEntryRequest> for TimeEntry {
    fn from(req: TimeEntryRequest) -> Self {
        TimeEntry {
            employee_id: req.employee_id,
            clock_in: req.clock_in,
            clock_out: req.clock_out,
            has_overtime_flag: req.has_overtime_flag,
        }
    }
}

impl From<BenefitEntitlementRequest> for (String, DeMinimisBenefits) {
    fn from(req: BenefitEntitlementRequest) -> Self {
        (
            req.employee_id,
            DeMinimisBenefits {
                rice_subsidy: req.rice_subsidy,
                phone_allowance: req.phone_allowance,
                clothing_allowance: req.clothing_allowance,
            },
        )
    }
}

impl From<QueryRequest> for PayrollQuery {
    fn from(req: QueryRequest) -> Self {
        PayrollQuery::new(
            req.employee_id,
            PayPeriod {
                start_date: req.start_date,
                end_date: req.end_date,
            },
        )
        .with_period_mode(req.period_mode)
        .with_benefit_divisor(req.benefit_divisor)
    }
}

/// Indexes employee requests by id. Later duplicates replace earlier ones.
pub fn employees_by_id(employees: Vec<EmployeeRequest>) -> HashMap<String, Employee> {
    employees
        .into_iter()
        .map(|req| (req.id.clone(), Employee::from(req)))
        .collect()
}
