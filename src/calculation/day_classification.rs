//! Day classification logic.
//!
//! This module labels a worked date as a regular workday, rest day or one of
//! the holiday kinds, which determines the pay multiplier applied to it.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::WorkdayRules;
use crate::models::{DayClassification, HolidayCalendar};

/// Returns true if the date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Determines whether a worked date counts as a rest day.
///
/// A rest day is a weekend day that is not a special working day. When
/// `rules.rest_day_requires_overtime_flag` is set, the entry must also carry
/// the overtime-intent flag.
pub fn is_rest_day(
    date: NaiveDate,
    has_overtime_flag: bool,
    calendar: &dyn HolidayCalendar,
    rules: &WorkdayRules,
) -> bool {
    if !is_weekend(date) || calendar.is_special_working(date) {
        return false;
    }
    !rules.rest_day_requires_overtime_flag || has_overtime_flag
}

/// Classifies a worked date.
///
/// Special working days are checked first and always yield
/// [`DayClassification::RegularWorkday`]. Otherwise the first match wins:
///
/// 1. rest day and regular holiday: [`DayClassification::HolidayRestDay`]
/// 2. regular holiday: [`DayClassification::RegularHoliday`]
/// 3. special non-working holiday: [`DayClassification::SpecialNonWorkingHoliday`]
/// 4. rest day: [`DayClassification::RestDay`]
/// 5. anything else: [`DayClassification::RegularWorkday`]
///
/// Classification never fails; a calendar without data for the date treats it
/// as an ordinary day.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::classify_day;
/// use payroll_engine::config::WorkdayRules;
/// use payroll_engine::models::{DayClassification, NoHolidays};
///
/// // 2024-06-08 is a Saturday
/// let date = NaiveDate::from_ymd_opt(2024, 6, 8).unwrap();
/// let classification = classify_day(date, false, &NoHolidays, &WorkdayRules::default());
/// assert_eq!(classification, DayClassification::RestDay);
/// ```
pub fn classify_day(
    date: NaiveDate,
    has_overtime_flag: bool,
    calendar: &dyn HolidayCalendar,
    rules: &WorkdayRules,
) -> DayClassification {
    if calendar.is_special_working(date) {
        return DayClassification::RegularWorkday;
    }

    let rest_day = is_rest_day(date, has_overtime_flag, calendar, rules);
    let regular_holiday = calendar.is_regular_holiday(date);

    if rest_day && regular_holiday {
        DayClassification::HolidayRestDay
    } else if regular_holiday {
        DayClassification::RegularHoliday
    } else if calendar.is_special_non_working(date) {
        DayClassification::SpecialNonWorkingHoliday
    } else if rest_day {
        DayClassification::RestDay
    } else {
        DayClassification::RegularWorkday
    }
}
