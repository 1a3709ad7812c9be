//! Core data models for the Payroll Computation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod benefits;
mod employee;
mod holiday;
mod pay_period;
mod payroll_report;
mod period_summary;
mod time_entry;
mod work_record;

pub use benefits::{DeMinimisBenefits, MAX_ALLOWANCE};
pub use employee::{
    ESTIMATED_DAILY_HOURS, ESTIMATED_WORKING_DAYS_PER_MONTH, Employee, EmploymentStatus,
    MAX_BASIC_SALARY, MAX_HOURLY_RATE,
};
pub use holiday::{Holiday, HolidayCalendar, HolidaySchedule, HolidayType, NoHolidays};
pub use pay_period::{PayPeriod, PeriodKey, PeriodMode};
pub use payroll_report::{
    DeductionBreakdown, Earnings, EmployeeDetails, HourTotals, PayrollReport, truncate_to_cents,
};
pub use period_summary::{BreakdownLine, PeriodSummary};
pub use time_entry::TimeEntry;
pub use work_record::{DailyWorkRecord, DayClassification};
