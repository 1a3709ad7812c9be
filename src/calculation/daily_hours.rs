//! Daily hours resolution.
//!
//! This module converts a raw clock-in/clock-out pair into billable, regular
//! and overtime hours, measures lateness, and produces the
//! [`DailyWorkRecord`] consumed by period aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::WorkdayRules;
use crate::models::{DailyWorkRecord, Employee, HolidayCalendar, TimeEntry};

use super::classify_day;

/// The hour split of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedHours {
    /// Raw clocked hours after the unpaid lunch deduction.
    pub billable_hours: Decimal,
    /// Billable hours up to the regular cap.
    pub regular_hours: Decimal,
    /// Billable hours credited as overtime.
    pub overtime_hours: Decimal,
}

/// Splits raw clocked hours into billable, regular and overtime hours.
///
/// Overtime is only credited once raw hours reach
/// `rules.overtime_trigger_raw_hours`; below that, billable time past the
/// regular cap is not paid as overtime.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_hours;
/// use payroll_engine::config::WorkdayRules;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rules = WorkdayRules::default();
///
/// let hours = resolve_hours(Decimal::from_str("9.5").unwrap(), &rules);
/// assert_eq!(hours.billable_hours, Decimal::from_str("8.5").unwrap());
/// assert_eq!(hours.regular_hours, Decimal::from_str("8").unwrap());
/// assert_eq!(hours.overtime_hours, Decimal::from_str("0.5").unwrap());
///
/// let hours = resolve_hours(Decimal::from_str("8.5").unwrap(), &rules);
/// assert_eq!(hours.billable_hours, Decimal::from_str("7.5").unwrap());
/// assert_eq!(hours.overtime_hours, Decimal::ZERO);
/// ```
pub fn resolve_hours(raw_hours: Decimal, rules: &WorkdayRules) -> ResolvedHours {
    let raw_hours = raw_hours.max(Decimal::ZERO);
    let billable_hours = (raw_hours - rules.unpaid_lunch_hours).max(Decimal::ZERO);
    let regular_hours = billable_hours.min(rules.regular_hours_cap);

    let overtime_hours = if raw_hours >= rules.overtime_trigger_raw_hours {
        (billable_hours - rules.regular_hours_cap).max(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    ResolvedHours {
        billable_hours,
        regular_hours,
        overtime_hours,
    }
}

/// Returns the whole minutes between the official start of day and the
/// clock-in time, floored at zero.
pub fn late_minutes(entry: &TimeEntry, rules: &WorkdayRules) -> i64 {
    (entry.clock_in.time() - rules.official_start)
        .num_minutes()
        .max(0)
}

/// Resolves one time entry into a [`DailyWorkRecord`].
///
/// The record carries the hour split, lateness and its deduction at the
/// employee's hourly rate, and the day classification with its multiplier.
pub fn resolve_daily_record(
    entry: &TimeEntry,
    employee: &Employee,
    calendar: &dyn HolidayCalendar,
    rules: &WorkdayRules,
) -> DailyWorkRecord {
    let raw_hours = entry.raw_hours();
    let hours = resolve_hours(raw_hours, rules);
    let late_minutes = late_minutes(entry, rules);
    let late_deduction = Decimal::from(late_minutes) / Decimal::new(60, 0) * employee.hourly_rate;
    let classification = classify_day(entry.work_date(), entry.has_overtime_flag, calendar, rules);

    DailyWorkRecord {
        employee_id: entry.employee_id.clone(),
        date: entry.work_date(),
        raw_hours,
        billable_hours: hours.billable_hours,
        regular_hours: hours.regular_hours,
        overtime_hours: hours.overtime_hours,
        late_minutes,
        late_deduction,
        classification,
        multiplier: classification.multiplier(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayClassification, EmploymentStatus, NoHolidays};
    use chrono::{NaiveDate, NaiveDateTime};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn create_test_employee(hourly_rate: &str) -> Employee {
        Employee {
            id: "10001".to_string(),
            name: "Manuel Garcia III".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1983, 10, 11).unwrap(),
            hourly_rate: dec(hourly_rate),
            basic_salary: dec("25000"),
            status: EmploymentStatus::Regular,
            position: "Chief Executive Officer".to_string(),
        }
    }

    fn make_entry(date: &str, clock_in: &str, clock_out: &str) -> TimeEntry {
        TimeEntry {
            employee_id: "10001".to_string(),
            clock_in: make_datetime(date, clock_in),
            clock_out: make_datetime(date, clock_out),
            has_overtime_flag: false,
        }
    }

    #[test]
    fn test_exactly_nine_raw_hours_triggers_overtime_check() {
        let hours = resolve_hours(dec("9"), &WorkdayRules::default());
        assert_eq!(hours.billable_hours, dec("8"));
        assert_eq!(hours.regular_hours, dec("8"));
        assert_eq!(hours.overtime_hours, dec("0"));
    }

    #[test]
    fn test_long_day() {
        let hours = resolve_hours(dec("12"), &WorkdayRules::default());
        assert_eq!(hours.billable_hours, dec("11"));
        assert_eq!(hours.regular_hours, dec("8"));
        assert_eq!(hours.overtime_hours, dec("3"));
    }

    #[test]
    fn test_shift_shorter_than_lunch() {
        let hours = resolve_hours(dec("0.5"), &WorkdayRules::default());
        assert_eq!(hours.billable_hours, Decimal::ZERO);
        assert_eq!(hours.regular_hours, Decimal::ZERO);
        assert_eq!(hours.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_negative_raw_hours_floor_at_zero() {
        let hours = resolve_hours(dec("-3"), &WorkdayRules::default());
        assert_eq!(hours.billable_hours, Decimal::ZERO);
    }

    #[test]
    fn test_late_minutes_on_time() {
        let entry = make_entry("2024-06-04", "08:30:00", "17:30:00");
        assert_eq!(late_minutes(&entry, &WorkdayRules::default()), 0);
    }

    #[test]
    fn test_late_minutes_early_arrival_is_zero() {
        let entry = make_entry("2024-06-04", "07:45:00", "17:30:00");
        assert_eq!(late_minutes(&entry, &WorkdayRules::default()), 0);
    }

    #[test]
    fn test_late_minutes_late_arrival() {
        let entry = make_entry("2024-06-04", "09:15:00", "18:00:00");
        assert_eq!(late_minutes(&entry, &WorkdayRules::default()), 45);
    }

    #[test]
    fn test_tuesday_scenario() {
        // 2024-06-04 is a Tuesday
        let entry = make_entry("2024-06-04", "08:30:00", "18:00:00");
        let record = resolve_daily_record(
            &entry,
            &create_test_employee("100"),
            &NoHolidays,
            &WorkdayRules::default(),
        );

        assert_eq!(record.raw_hours, dec("9.5"));
        assert_eq!(record.billable_hours, dec("8.5"));
        assert_eq!(record.regular_hours, dec("8"));
        assert_eq!(record.overtime_hours, dec("0.5"));
        assert_eq!(record.late_minutes, 0);
        assert_eq!(record.late_deduction, Decimal::ZERO);
        assert_eq!(record.classification, DayClassification::RegularWorkday);
        assert_eq!(record.multiplier, dec("1.00"));
    }

    #[test]
    fn test_late_deduction_at_hourly_rate() {
        let entry = make_entry("2024-06-04", "09:15:00", "18:00:00");
        let record = resolve_daily_record(
            &entry,
            &create_test_employee("100"),
            &NoHolidays,
            &WorkdayRules::default(),
        );

        assert_eq!(record.late_minutes, 45);
        assert_eq!(record.late_deduction, dec("75"));
        assert_eq!(record.late_hours(), dec("0.75"));
        // 8.75 raw hours does not reach the overtime trigger
        assert_eq!(record.billable_hours, dec("7.75"));
        assert_eq!(record.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_record_keeps_entry_identity() {
        let entry = make_entry("2024-06-09", "08:30:00", "17:30:00");
        let record = resolve_daily_record(
            &entry,
            &create_test_employee("100"),
            &NoHolidays,
            &WorkdayRules::default(),
        );
        assert_eq!(record.employee_id, "10001");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 6, 9).unwrap());
        assert_eq!(record.classification, DayClassification::RestDay);
        assert_eq!(record.multiplier, dec("1.50"));
    }

    proptest! {
        #[test]
        fn prop_regular_plus_overtime_never_exceeds_billable(minutes in 0i64..(24 * 60)) {
            let raw = Decimal::from(minutes) / Decimal::new(60, 0);
            let hours = resolve_hours(raw, &WorkdayRules::default());

            prop_assert!(hours.billable_hours >= Decimal::ZERO);
            prop_assert!(hours.regular_hours <= dec("8"));
            prop_assert!(hours.overtime_hours >= Decimal::ZERO);
            prop_assert!(hours.regular_hours + hours.overtime_hours <= hours.billable_hours);
        }

        #[test]
        fn prop_no_overtime_below_trigger(minutes in 0i64..(9 * 60)) {
            let raw = Decimal::from(minutes) / Decimal::new(60, 0);
            let hours = resolve_hours(raw, &WorkdayRules::default());
            prop_assert_eq!(hours.overtime_hours, Decimal::ZERO);
        }
    }
}
