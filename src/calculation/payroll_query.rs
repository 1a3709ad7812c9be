//! Payroll queries.
//!
//! This module answers "what is this employee's payroll for this date range"
//! by running the full pipeline: range filtering, aggregation, merging of the
//! periods the range touches, and assembly.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::WorkdayRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DeMinimisBenefits, Employee, HolidayCalendar, PayPeriod, PayrollReport, PeriodMode,
    PeriodSummary, TimeEntry,
};

use super::{aggregate_time_entries, assemble_payroll};

/// Smallest accepted divisor for monthly de-minimis benefits.
pub const MIN_BENEFIT_DIVISOR: Decimal = dec!(0.01);

/// A request for one employee's payroll over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollQuery {
    /// The employee to report on.
    pub employee_id: String,
    /// The inclusive date range.
    pub pay_period: PayPeriod,
    /// How daily records are bucketed before merging.
    pub period_mode: PeriodMode,
    /// Divisor applied to monthly de-minimis benefits (1 for a monthly run,
    /// 4 for a weekly run).
    pub benefit_divisor: Decimal,
}

impl PayrollQuery {
    /// Creates a monthly query with undivided benefits.
    pub fn new(employee_id: impl Into<String>, pay_period: PayPeriod) -> Self {
        Self {
            employee_id: employee_id.into(),
            pay_period,
            period_mode: PeriodMode::default(),
            benefit_divisor: Decimal::ONE,
        }
    }

    /// Sets the period mode.
    pub fn with_period_mode(mut self, period_mode: PeriodMode) -> Self {
        self.period_mode = period_mode;
        self
    }

    /// Sets the benefit divisor.
    pub fn with_benefit_divisor(mut self, benefit_divisor: Decimal) -> Self {
        self.benefit_divisor = benefit_divisor;
        self
    }

    fn validate(&self) -> EngineResult<()> {
        if !self.pay_period.is_well_formed() {
            return Err(EngineError::InvalidQuery {
                message: format!(
                    "end date {} is before start date {}",
                    self.pay_period.end_date, self.pay_period.start_date
                ),
            });
        }
        if self.benefit_divisor < MIN_BENEFIT_DIVISOR {
            return Err(EngineError::InvalidQuery {
                message: format!(
                    "benefit divisor must be at least {}, got {}",
                    MIN_BENEFIT_DIVISOR, self.benefit_divisor
                ),
            });
        }
        Ok(())
    }
}

/// Read-only master data and rules a query runs against.
#[derive(Clone, Copy)]
pub struct PayrollContext<'a> {
    /// Employee master data keyed by id.
    pub employees: &'a HashMap<String, Employee>,
    /// Monthly de-minimis entitlements keyed by employee id. Missing entries
    /// mean no benefits.
    pub benefits: &'a HashMap<String, DeMinimisBenefits>,
    /// The holiday calendar.
    pub calendar: &'a dyn HolidayCalendar,
    /// The workday rules.
    pub rules: &'a WorkdayRules,
}

/// Why a query produced no report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundReason {
    /// No time entry at all falls in the date range.
    NoRecordsInRange,
    /// The employee id has no master data.
    UnknownEmployee,
    /// The employee has no time entry in the date range.
    EmployeeNotFoundInRange,
}

impl std::fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotFoundReason::NoRecordsInRange => write!(f, "No records found in the date range"),
            NotFoundReason::UnknownEmployee => write!(f, "Employee does not exist"),
            NotFoundReason::EmployeeNotFoundInRange => {
                write!(f, "Employee has no records in the date range")
            }
        }
    }
}

/// The outcome of a payroll query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayrollOutcome {
    /// A report was assembled.
    Found(Box<PayrollReport>),
    /// No report could be produced.
    NotFound(NotFoundReason),
}

/// Runs a payroll query.
///
/// Only entries whose clock-in date falls inside the query range are
/// considered. When the range spans several periods, the employee's summaries
/// for all of them are merged in period order before assembly.
///
/// # Errors
///
/// Returns [`EngineError::InvalidQuery`] if the range is inverted or the
/// benefit divisor is below [`MIN_BENEFIT_DIVISOR`], and
/// [`EngineError::InvalidEmployee`] if the employee's rate, salary or
/// allowances fail [`Employee::validate`] or
/// [`DeMinimisBenefits::validate`]. Missing data is
/// reported through [`PayrollOutcome::NotFound`], checked in this order:
/// no entries in range, unknown employee, no entries for the employee.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::{run_payroll_query, NotFoundReason, PayrollContext, PayrollOutcome, PayrollQuery};
/// use payroll_engine::config::WorkdayRules;
/// use payroll_engine::models::{NoHolidays, PayPeriod};
///
/// let employees = HashMap::new();
/// let benefits = HashMap::new();
/// let rules = WorkdayRules::default();
/// let ctx = PayrollContext { employees: &employees, benefits: &benefits, calendar: &NoHolidays, rules: &rules };
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
/// };
/// let outcome = run_payroll_query(&ctx, &[], &PayrollQuery::new("10001", period)).unwrap();
/// assert_eq!(outcome, PayrollOutcome::NotFound(NotFoundReason::NoRecordsInRange));
/// ```
pub fn run_payroll_query(
    ctx: &PayrollContext<'_>,
    entries: &[TimeEntry],
    query: &PayrollQuery,
) -> EngineResult<PayrollOutcome> {
    query.validate()?;

    let in_range: Vec<TimeEntry> = entries
        .iter()
        .filter(|entry| query.pay_period.contains_date(entry.work_date()))
        .cloned()
        .collect();

    if in_range.is_empty() {
        return Ok(not_found(query, NotFoundReason::NoRecordsInRange));
    }

    let Some(employee) = ctx.employees.get(&query.employee_id) else {
        return Ok(not_found(query, NotFoundReason::UnknownEmployee));
    };
    employee.validate()?;

    let employee_entries: Vec<TimeEntry> = in_range
        .into_iter()
        .filter(|entry| entry.employee_id == query.employee_id)
        .collect();

    if employee_entries.is_empty() {
        return Ok(not_found(query, NotFoundReason::EmployeeNotFoundInRange));
    }

    let summaries = aggregate_time_entries(
        ctx.employees,
        &employee_entries,
        ctx.calendar,
        ctx.rules,
        query.period_mode,
    );

    let mut merged: Option<PeriodSummary> = None;
    for summary in summaries.into_values() {
        match merged.as_mut() {
            Some(total) => total.merge(summary),
            None => merged = Some(summary),
        }
    }
    let Some(summary) = merged else {
        return Ok(not_found(query, NotFoundReason::EmployeeNotFoundInRange));
    };

    let entitlement = ctx
        .benefits
        .get(&query.employee_id)
        .copied()
        .unwrap_or_default();
    entitlement.validate(&query.employee_id)?;
    let benefits = entitlement.prorated(query.benefit_divisor);

    let report = assemble_payroll(&summary, employee, &benefits, query.pay_period);

    info!(
        employee_id = %query.employee_id,
        start_date = %query.pay_period.start_date,
        end_date = %query.pay_period.end_date,
        periods = summary.period_keys.len(),
        days_worked = summary.days_worked(),
        net_pay = %report.net_pay,
        "payroll query completed"
    );

    Ok(PayrollOutcome::Found(Box::new(report)))
}

fn not_found(query: &PayrollQuery, reason: NotFoundReason) -> PayrollOutcome {
    debug!(
        employee_id = %query.employee_id,
        start_date = %query.pay_period.start_date,
        end_date = %query.pay_period.end_date,
        reason = ?reason,
        "payroll query found nothing"
    );
    PayrollOutcome::NotFound(reason)
}
