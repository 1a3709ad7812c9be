//! Period aggregation.
//!
//! This module folds resolved daily records into [`PeriodSummary`] values
//! keyed by employee and period (ISO week or calendar month).

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::WorkdayRules;
use crate::models::{
    BreakdownLine, DailyWorkRecord, Employee, HolidayCalendar, PeriodKey, PeriodMode,
    PeriodSummary, TimeEntry,
};

use super::resolve_daily_record;

/// Summaries keyed by employee id and period, in key order.
pub type PeriodSummaries = BTreeMap<(String, PeriodKey), PeriodSummary>;

/// Folds one daily record into a summary and appends its breakdown line.
///
/// Holiday and rest-day premiums are additive: a regular holiday on a rest
/// day earns both.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::fold_daily_record;
/// use payroll_engine::config::WorkdayRules;
/// use payroll_engine::models::{DailyWorkRecord, DayClassification, PeriodKey, PeriodSummary};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = DailyWorkRecord {
///     employee_id: "10001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
///     raw_hours: Decimal::from_str("9.5").unwrap(),
///     billable_hours: Decimal::from_str("8.5").unwrap(),
///     regular_hours: Decimal::from_str("8").unwrap(),
///     overtime_hours: Decimal::from_str("0.5").unwrap(),
///     late_minutes: 0,
///     late_deduction: Decimal::ZERO,
///     classification: DayClassification::RegularWorkday,
///     multiplier: Decimal::ONE,
/// };
///
/// let mut summary = PeriodSummary::new("10001", PeriodKey::Month { year: 2024, month: 6 });
/// fold_daily_record(
///     &mut summary,
///     &record,
///     Decimal::from_str("100").unwrap(),
///     &WorkdayRules::default(),
/// );
///
/// assert_eq!(summary.breakdown[0].overtime_pay, Decimal::from_str("62.50").unwrap());
/// assert_eq!(summary.total_work_hours, Decimal::from_str("8.5").unwrap());
/// ```
pub fn fold_daily_record(
    summary: &mut PeriodSummary,
    record: &DailyWorkRecord,
    hourly_rate: Decimal,
    rules: &WorkdayRules,
) {
    summary.total_work_hours += record.billable_hours;
    summary.total_regular_hours += record.regular_hours;
    summary.total_overtime_hours += record.overtime_hours;
    summary.total_late_hours += record.late_hours();
    summary.total_late_deductions += record.late_deduction;

    if record.classification.is_holiday() {
        summary.total_holiday_worked_hours += record.billable_hours;
        summary.total_holiday_pay +=
            record.billable_hours * hourly_rate * (record.multiplier - Decimal::ONE);
    }

    if record.classification.is_rest_day() {
        summary.total_rest_day_ot_pay += record.billable_hours * hourly_rate * rules.rest_day_rate;
    }

    let overtime_pay = record.overtime_hours * hourly_rate * rules.overtime_rate;
    summary.total_overtime_pay += overtime_pay;

    summary.breakdown.push(BreakdownLine {
        date: record.date,
        classification: record.classification,
        billable_hours: record.billable_hours,
        overtime_hours: record.overtime_hours,
        overtime_rate: rules.overtime_rate,
        overtime_pay,
        late_minutes: record.late_minutes,
        late_deduction: record.late_deduction,
    });

    debug!(
        employee_id = %record.employee_id,
        date = %record.date,
        classification = %record.classification,
        billable_hours = %record.billable_hours,
        "folded daily record"
    );
}

/// Resolves and folds every time entry into per-employee, per-period
/// summaries.
///
/// Summaries are created lazily on the first entry for a key. Entries whose
/// employee id has no master data are dropped. Entries are folded in input
/// order, so each summary's breakdown follows the order of `entries`.
pub fn aggregate_time_entries(
    employees: &HashMap<String, Employee>,
    entries: &[TimeEntry],
    calendar: &dyn HolidayCalendar,
    rules: &WorkdayRules,
    mode: PeriodMode,
) -> PeriodSummaries {
    let mut summaries = PeriodSummaries::new();

    for entry in entries {
        let Some(employee) = employees.get(&entry.employee_id) else {
            debug!(
                employee_id = %entry.employee_id,
                date = %entry.work_date(),
                "dropping time entry for unknown employee"
            );
            continue;
        };

        let record = resolve_daily_record(entry, employee, calendar, rules);
        let key = mode.key_for(record.date);

        let summary = summaries
            .entry((entry.employee_id.clone(), key))
            .or_insert_with(|| PeriodSummary::new(entry.employee_id.clone(), key));

        fold_daily_record(summary, &record, employee.hourly_rate, rules);
    }

    summaries
}
