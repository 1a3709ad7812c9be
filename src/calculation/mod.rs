//! Calculation logic for the Payroll Computation Engine.
//!
//! This module contains the payroll pipeline: day classification, daily hours
//! resolution, period aggregation, the government deduction formulas (SSS,
//! PhilHealth, Pag-IBIG and BIR withholding tax), payroll assembly and the
//! payroll query that ties them together.

mod daily_hours;
mod day_classification;
mod pagibig_contribution;
mod payroll_assembly;
mod payroll_query;
mod period_aggregation;
mod philhealth_contribution;
mod sss_contribution;
mod withholding_tax;

pub use daily_hours::{ResolvedHours, late_minutes, resolve_daily_record, resolve_hours};
pub use day_classification::{classify_day, is_rest_day, is_weekend};
pub use pagibig_contribution::{
    PAGIBIG_LOW_INCOME_THRESHOLD, PAGIBIG_LOW_RATE, PAGIBIG_MAXIMUM_CONTRIBUTION,
    PAGIBIG_STANDARD_RATE, calculate_pagibig,
};
pub use payroll_assembly::{ENGINE_VERSION, assemble_payroll};
pub use payroll_query::{
    MIN_BENEFIT_DIVISOR, NotFoundReason, PayrollContext, PayrollOutcome, PayrollQuery,
    run_payroll_query,
};
pub use period_aggregation::{PeriodSummaries, aggregate_time_entries, fold_daily_record};
pub use philhealth_contribution::{
    PHILHEALTH_FLAT_CONTRIBUTION, PHILHEALTH_FLAT_THRESHOLD, PHILHEALTH_MAXIMUM_CONTRIBUTION,
    PHILHEALTH_RATE, calculate_philhealth,
};
pub use sss_contribution::{
    SSS_CONTRIBUTION_TABLE, SSS_MAXIMUM_CONTRIBUTION, SSS_MINIMUM_CONTRIBUTION, calculate_sss,
};
pub use withholding_tax::{
    TAX_BRACKETS, TAX_EXEMPT_CEILING, TaxBracket, calculate_withholding_tax,
};
