//! Payroll report models.
//!
//! This module contains the [`PayrollReport`] type and its associated
//! structures that capture every intermediate value of an assembled payroll,
//! from gross income down to net pay.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BreakdownLine, DeMinimisBenefits, EmploymentStatus, PayPeriod, PeriodKey};

/// Government deductions for one payroll.
///
/// # Example
///
/// ```
/// use payroll_engine::models::DeductionBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = DeductionBreakdown::new(
///     Decimal::new(112500, 2),
///     Decimal::new(900, 0),
///     Decimal::new(100, 0),
///     Decimal::new(250000, 2),
/// );
/// assert_eq!(breakdown.total, Decimal::new(462500, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// SSS contribution.
    pub sss: Decimal,
    /// PhilHealth contribution.
    pub philhealth: Decimal,
    /// Pag-IBIG (HDMF) contribution.
    pub pagibig: Decimal,
    /// BIR withholding tax.
    pub withholding_tax: Decimal,
    /// Sum of the four amounts.
    pub total: Decimal,
}

impl DeductionBreakdown {
    /// Creates a breakdown, computing its total.
    pub fn new(
        sss: Decimal,
        philhealth: Decimal,
        pagibig: Decimal,
        withholding_tax: Decimal,
    ) -> Self {
        Self {
            sss,
            philhealth,
            pagibig,
            withholding_tax,
            total: sss + pagibig + philhealth + withholding_tax,
        }
    }

    /// Returns the mandatory contributions (everything except withholding tax).
    pub fn contributions(&self) -> Decimal {
        self.sss + self.philhealth + self.pagibig
    }
}

/// Identity fields of the employee a report was produced for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDetails {
    /// Employee id.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Job position.
    pub position: String,
    /// Employment status.
    pub status: EmploymentStatus,
    /// Hourly rate in PHP.
    pub hourly_rate: Decimal,
}

/// Hour totals of the reported period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourTotals {
    /// Billable hours worked.
    pub worked_hours: Decimal,
    /// Regular hours.
    pub regular_hours: Decimal,
    /// Overtime hours.
    pub overtime_hours: Decimal,
    /// Billable hours worked on holidays.
    pub holiday_hours: Decimal,
    /// Late time in hours.
    pub late_hours: Decimal,
}

/// Earnings of the reported period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Earnings {
    /// Billable hours times the hourly rate.
    pub regular_pay: Decimal,
    /// Overtime pay.
    pub overtime_pay: Decimal,
    /// Holiday premium pay.
    pub holiday_pay: Decimal,
    /// Rest-day premium pay.
    pub rest_day_ot_pay: Decimal,
    /// Sum of the four components.
    pub gross_income: Decimal,
}

/// The complete result of one payroll query.
///
/// Every intermediate value is kept so slip renderers can show the full
/// breakdown. Created once per query and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The employee the report is for.
    pub employee: EmployeeDetails,
    /// The queried date range.
    pub pay_period: PayPeriod,
    /// The periods folded into the report.
    pub period_keys: Vec<PeriodKey>,
    /// Hour totals.
    pub hours: HourTotals,
    /// Earnings before deductions.
    pub earnings: Earnings,
    /// Salary used for the SSS bracket lookup.
    pub sss_salary_basis: Decimal,
    /// Gross income minus mandatory contributions.
    pub taxable_income: Decimal,
    /// Government deductions.
    pub deductions: DeductionBreakdown,
    /// Late deductions.
    pub late_deductions: Decimal,
    /// Government deductions plus late deductions.
    pub total_deductions: Decimal,
    /// De-minimis benefits at the periodicity the caller supplied.
    pub de_minimis: DeMinimisBenefits,
    /// Sum of de-minimis benefits.
    pub total_de_minimis: Decimal,
    /// Gross income minus total deductions plus de-minimis benefits.
    pub net_pay: Decimal,
    /// Per-day overtime and lateness log.
    pub breakdown: Vec<BreakdownLine>,
}

/// Truncates an amount to two decimal places, toward zero.
///
/// # Example
///
/// ```
/// use payroll_engine::models::truncate_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(truncate_to_cents(Decimal::from_str("2499.879").unwrap()), Decimal::from_str("2499.87").unwrap());
/// assert_eq!(truncate_to_cents(Decimal::from_str("-0.109").unwrap()), Decimal::from_str("-0.10").unwrap());
/// ```
pub fn truncate_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::ToZero)
}

impl PayrollReport {
    /// Returns a copy with every amount and hour total truncated to two
    /// decimal places.
    ///
    /// Intended for display only; identities such as
    /// `net = gross - deductions + de minimis` hold exactly on the original
    /// report but not necessarily on the presented copy.
    pub fn presented(&self) -> PayrollReport {
        let t = truncate_to_cents;
        let mut report = self.clone();

        report.employee.hourly_rate = t(report.employee.hourly_rate);

        let hours = &mut report.hours;
        hours.worked_hours = t(hours.worked_hours);
        hours.regular_hours = t(hours.regular_hours);
        hours.overtime_hours = t(hours.overtime_hours);
        hours.holiday_hours = t(hours.holiday_hours);
        hours.late_hours = t(hours.late_hours);

        let earnings = &mut report.earnings;
        earnings.regular_pay = t(earnings.regular_pay);
        earnings.overtime_pay = t(earnings.overtime_pay);
        earnings.holiday_pay = t(earnings.holiday_pay);
        earnings.rest_day_ot_pay = t(earnings.rest_day_ot_pay);
        earnings.gross_income = t(earnings.gross_income);

        report.sss_salary_basis = t(report.sss_salary_basis);
        report.taxable_income = t(report.taxable_income);
        report.deductions = DeductionBreakdown {
            sss: t(report.deductions.sss),
            philhealth: t(report.deductions.philhealth),
            pagibig: t(report.deductions.pagibig),
            withholding_tax: t(report.deductions.withholding_tax),
            total: t(report.deductions.total),
        };
        report.late_deductions = t(report.late_deductions);
        report.total_deductions = t(report.total_deductions);
        report.de_minimis = DeMinimisBenefits {
            rice_subsidy: t(report.de_minimis.rice_subsidy),
            phone_allowance: t(report.de_minimis.phone_allowance),
            clothing_allowance: t(report.de_minimis.clothing_allowance),
        };
        report.total_de_minimis = t(report.total_de_minimis);
        report.net_pay = t(report.net_pay);

        for line in &mut report.breakdown {
            line.billable_hours = t(line.billable_hours);
            line.overtime_hours = t(line.overtime_hours);
            line.overtime_pay = t(line.overtime_pay);
            line.late_deduction = t(line.late_deduction);
        }

        report
    }
}
