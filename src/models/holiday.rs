//! Holiday calendar models.
//!
//! The core never reads holiday data directly; it asks a [`HolidayCalendar`]
//! three yes/no questions about a date. [`HolidaySchedule`] is the calendar
//! built from configuration and [`NoHolidays`] is the empty calendar.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Answers holiday questions about a single date.
///
/// Implementations must be pure, in-memory lookups. A date the calendar knows
/// nothing about is not a holiday.
pub trait HolidayCalendar {
    /// Returns true if the date is a regular holiday.
    fn is_regular_holiday(&self, date: NaiveDate) -> bool;

    /// Returns true if the date is a special non-working holiday.
    fn is_special_non_working(&self, date: NaiveDate) -> bool;

    /// Returns true if the date is declared a special working day.
    fn is_special_working(&self, date: NaiveDate) -> bool;
}

/// A calendar with no holidays at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn is_regular_holiday(&self, _date: NaiveDate) -> bool {
        false
    }

    fn is_special_non_working(&self, _date: NaiveDate) -> bool {
        false
    }

    fn is_special_working(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// The kind of a declared holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayType {
    /// Regular holiday (200% pay).
    RegularHoliday,
    /// Special non-working holiday (130% pay).
    SpecialNonWorking,
    /// A weekend or holiday date declared an ordinary working day.
    SpecialWorking,
}

/// A declared holiday.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Holiday, HolidayType};
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
///     name: "Independence Day".to_string(),
///     holiday_type: HolidayType::RegularHoliday,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g. "Labor Day").
    pub name: String,
    /// The kind of holiday.
    #[serde(rename = "type")]
    pub holiday_type: HolidayType,
}

/// A holiday calendar backed by a list of declared holidays.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Holiday, HolidayCalendar, HolidaySchedule, HolidayType};
/// use chrono::NaiveDate;
///
/// let labor_day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let schedule = HolidaySchedule::new(vec![Holiday {
///     date: labor_day,
///     name: "Labor Day".to_string(),
///     holiday_type: HolidayType::RegularHoliday,
/// }]);
///
/// assert!(schedule.is_regular_holiday(labor_day));
/// assert!(!schedule.is_special_non_working(labor_day));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HolidaySchedule {
    holidays: Vec<Holiday>,
    regular: HashSet<NaiveDate>,
    special_non_working: HashSet<NaiveDate>,
    special_working: HashSet<NaiveDate>,
}

impl HolidaySchedule {
    /// Builds a schedule from a list of holidays.
    pub fn new(holidays: Vec<Holiday>) -> Self {
        let mut schedule = Self::default();
        schedule.extend(holidays);
        schedule
    }

    /// Adds more holidays to the schedule.
    pub fn extend(&mut self, holidays: impl IntoIterator<Item = Holiday>) {
        for holiday in holidays {
            let set = match holiday.holiday_type {
                HolidayType::RegularHoliday => &mut self.regular,
                HolidayType::SpecialNonWorking => &mut self.special_non_working,
                HolidayType::SpecialWorking => &mut self.special_working,
            };
            set.insert(holiday.date);
            self.holidays.push(holiday);
        }
        self.holidays.sort_by_key(|h| h.date);
    }

    /// Returns all declared holidays, ordered by date.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }
}

impl HolidayCalendar for HolidaySchedule {
    fn is_regular_holiday(&self, date: NaiveDate) -> bool {
        self.regular.contains(&date)
    }

    fn is_special_non_working(&self, date: NaiveDate) -> bool {
        self.special_non_working.contains(&date)
    }

    fn is_special_working(&self, date: NaiveDate) -> bool {
        self.special_working.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn holiday(date: &str, name: &str, holiday_type: HolidayType) -> Holiday {
        Holiday {
            date: make_date(date),
            name: name.to_string(),
            holiday_type,
        }
    }

    fn create_schedule() -> HolidaySchedule {
        HolidaySchedule::new(vec![
            holiday("2024-12-25", "Christmas Day", HolidayType::RegularHoliday),
            holiday("2024-08-21", "Ninoy Aquino Day", HolidayType::SpecialNonWorking),
            holiday("2024-02-17", "Make-up Workday", HolidayType::SpecialWorking),
        ])
    }

    #[test]
    fn test_no_holidays_answers_false() {
        let date = make_date("2024-12-25");
        assert!(!NoHolidays.is_regular_holiday(date));
        assert!(!NoHolidays.is_special_non_working(date));
        assert!(!NoHolidays.is_special_working(date));
    }

    #[test]
    fn test_schedule_answers_each_predicate() {
        let schedule = create_schedule();
        assert!(schedule.is_regular_holiday(make_date("2024-12-25")));
        assert!(schedule.is_special_non_working(make_date("2024-08-21")));
        assert!(schedule.is_special_working(make_date("2024-02-17")));

        assert!(!schedule.is_regular_holiday(make_date("2024-08-21")));
        assert!(!schedule.is_special_non_working(make_date("2024-12-25")));
        assert!(!schedule.is_special_working(make_date("2024-12-25")));
    }

    #[test]
    fn test_unknown_date_is_not_a_holiday() {
        let schedule = create_schedule();
        let date = make_date("2024-06-04");
        assert!(!schedule.is_regular_holiday(date));
        assert!(!schedule.is_special_non_working(date));
        assert!(!schedule.is_special_working(date));
    }

    #[test]
    fn test_holidays_sorted_by_date() {
        let schedule = create_schedule();
        let dates: Vec<NaiveDate> = schedule.holidays().iter().map(|h| h.date).collect();
        assert_eq!(
            dates,
            vec![
                make_date("2024-02-17"),
                make_date("2024-08-21"),
                make_date("2024-12-25")
            ]
        );
    }

    #[test]
    fn test_deserialize_holiday() {
        let json = r#"{
            "date": "2024-11-01",
            "name": "All Saints' Day",
            "type": "special_non_working"
        }"#;
        let holiday: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.date, make_date("2024-11-01"));
        assert_eq!(holiday.holiday_type, HolidayType::SpecialNonWorking);
    }
}
