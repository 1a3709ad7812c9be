//! Payroll assembly.
//!
//! This module combines a [`PeriodSummary`], employee master data and
//! de-minimis benefits into the final [`PayrollReport`].

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::models::{
    DeMinimisBenefits, DeductionBreakdown, Earnings, Employee, EmployeeDetails, HourTotals,
    PayPeriod, PayrollReport, PeriodSummary,
};

use super::{calculate_pagibig, calculate_philhealth, calculate_sss, calculate_withholding_tax};

/// The engine version embedded in every report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Assembles a payroll report from a period summary.
///
/// Steps, in order:
///
/// 1. gross = worked hours × rate + overtime pay + holiday pay + rest-day pay
/// 2. SSS on the employee's salary basis (basic salary, or rate × 8 × 22)
/// 3. PhilHealth and Pag-IBIG on gross income
/// 4. taxable = gross − (SSS + PhilHealth + Pag-IBIG)
/// 5. withholding tax on taxable income
/// 6. government total = SSS + Pag-IBIG + PhilHealth + withholding tax
/// 7. total deductions = government total + late deductions
/// 8. de-minimis total = rice + phone + clothing
/// 9. net = gross − total deductions + de-minimis total
///
/// No intermediate value is rounded.
pub fn assemble_payroll(
    summary: &PeriodSummary,
    employee: &Employee,
    benefits: &DeMinimisBenefits,
    pay_period: PayPeriod,
) -> PayrollReport {
    let rate = employee.hourly_rate;

    let regular_pay = summary.total_work_hours * rate;
    let gross_income = regular_pay
        + summary.total_overtime_pay
        + summary.total_holiday_pay
        + summary.total_rest_day_ot_pay;

    let sss_salary_basis = employee.sss_salary_basis();
    let sss = calculate_sss(sss_salary_basis);
    let philhealth = calculate_philhealth(gross_income);
    let pagibig = calculate_pagibig(gross_income);

    let taxable_income = gross_income - (sss + philhealth + pagibig);
    let withholding_tax = calculate_withholding_tax(taxable_income);

    let deductions = DeductionBreakdown::new(sss, philhealth, pagibig, withholding_tax);
    let total_deductions = deductions.total + summary.total_late_deductions;

    let total_de_minimis = benefits.total();
    let net_pay = gross_income - total_deductions + total_de_minimis;

    debug!(
        employee_id = %employee.id,
        gross_income = %gross_income,
        total_deductions = %total_deductions,
        net_pay = %net_pay,
        "assembled payroll"
    );

    PayrollReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        employee: EmployeeDetails {
            id: employee.id.clone(),
            name: employee.name.clone(),
            date_of_birth: employee.date_of_birth,
            position: employee.position.clone(),
            status: employee.status,
            hourly_rate: rate,
        },
        pay_period,
        period_keys: summary.period_keys.clone(),
        hours: HourTotals {
            worked_hours: summary.total_work_hours,
            regular_hours: summary.total_regular_hours,
            overtime_hours: summary.total_overtime_hours,
            holiday_hours: summary.total_holiday_worked_hours,
            late_hours: summary.total_late_hours,
        },
        earnings: Earnings {
            regular_pay,
            overtime_pay: summary.total_overtime_pay,
            holiday_pay: summary.total_holiday_pay,
            rest_day_ot_pay: summary.total_rest_day_ot_pay,
            gross_income,
        },
        sss_salary_basis,
        taxable_income,
        deductions,
        late_deductions: summary.total_late_deductions,
        total_deductions,
        de_minimis: *benefits,
        total_de_minimis,
        net_pay,
        breakdown: summary.breakdown.clone(),
    }
}
