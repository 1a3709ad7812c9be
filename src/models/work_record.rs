//! Day classification and derived daily work records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The pay classification of a worked day.
///
/// The five classifications are mutually exclusive; see
/// [`crate::calculation::classify_day`] for the precedence between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClassification {
    /// A regular holiday falling on a rest day (260%).
    HolidayRestDay,
    /// A regular holiday (200%).
    RegularHoliday,
    /// A special non-working holiday (130%).
    SpecialNonWorkingHoliday,
    /// A scheduled rest day (150%).
    RestDay,
    /// An ordinary working day, including special working days (100%).
    RegularWorkday,
}

impl DayClassification {
    /// Returns the pay multiplier for the classification.
    pub fn multiplier(self) -> Decimal {
        match self {
            DayClassification::HolidayRestDay => dec!(2.60),
            DayClassification::RegularHoliday => dec!(2.00),
            DayClassification::SpecialNonWorkingHoliday => dec!(1.30),
            DayClassification::RestDay => dec!(1.50),
            DayClassification::RegularWorkday => dec!(1.00),
        }
    }

    /// Returns the label used in breakdown logs.
    pub fn label(self) -> &'static str {
        match self {
            DayClassification::HolidayRestDay => "Holiday + Rest Day",
            DayClassification::RegularHoliday => "Regular Holiday",
            DayClassification::SpecialNonWorkingHoliday => "Special Non-working Holiday",
            DayClassification::RestDay => "Rest Day",
            DayClassification::RegularWorkday => "Regular Workday",
        }
    }

    /// Returns true for every holiday classification, including
    /// [`DayClassification::HolidayRestDay`].
    pub fn is_holiday(self) -> bool {
        matches!(
            self,
            DayClassification::HolidayRestDay
                | DayClassification::RegularHoliday
                | DayClassification::SpecialNonWorkingHoliday
        )
    }

    /// Returns true for rest-day classifications, including
    /// [`DayClassification::HolidayRestDay`].
    pub fn is_rest_day(self) -> bool {
        matches!(
            self,
            DayClassification::HolidayRestDay | DayClassification::RestDay
        )
    }
}

impl std::fmt::Display for DayClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One resolved attendance record.
///
/// Computed fresh from a time entry, its employee and the holiday calendar;
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWorkRecord {
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The work date (from the clock-in).
    pub date: NaiveDate,
    /// Clocked hours before the lunch deduction.
    pub raw_hours: Decimal,
    /// Clocked hours after the unpaid lunch deduction.
    pub billable_hours: Decimal,
    /// Billable hours up to the regular cap.
    pub regular_hours: Decimal,
    /// Billable hours credited as overtime.
    pub overtime_hours: Decimal,
    /// Minutes late past the official start of day.
    pub late_minutes: i64,
    /// Pay withheld for lateness.
    pub late_deduction: Decimal,
    /// The day classification.
    pub classification: DayClassification,
    /// The pay multiplier of the classification.
    pub multiplier: Decimal,
}

impl DailyWorkRecord {
    /// Returns the late minutes expressed in hours.
    pub fn late_hours(&self) -> Decimal {
        Decimal::from(self.late_minutes) / Decimal::new(60, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DayClassification; 5] = [
        DayClassification::HolidayRestDay,
        DayClassification::RegularHoliday,
        DayClassification::SpecialNonWorkingHoliday,
        DayClassification::RestDay,
        DayClassification::RegularWorkday,
    ];

    #[test]
    fn test_multipliers() {
        let multipliers: Vec<Decimal> = ALL.iter().map(|c| c.multiplier()).collect();
        assert_eq!(
            multipliers,
            vec![dec!(2.60), dec!(2.00), dec!(1.30), dec!(1.50), dec!(1.00)]
        );
    }

    #[test]
    fn test_holiday_and_rest_day_flags() {
        assert!(DayClassification::HolidayRestDay.is_holiday());
        assert!(DayClassification::HolidayRestDay.is_rest_day());
        assert!(DayClassification::RegularHoliday.is_holiday());
        assert!(!DayClassification::RegularHoliday.is_rest_day());
        assert!(DayClassification::SpecialNonWorkingHoliday.is_holiday());
        assert!(!DayClassification::SpecialNonWorkingHoliday.is_rest_day());
        assert!(!DayClassification::RestDay.is_holiday());
        assert!(DayClassification::RestDay.is_rest_day());
        assert!(!DayClassification::RegularWorkday.is_holiday());
        assert!(!DayClassification::RegularWorkday.is_rest_day());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(
            DayClassification::HolidayRestDay.to_string(),
            "Holiday + Rest Day"
        );
        assert_eq!(
            DayClassification::RegularWorkday.to_string(),
            "Regular Workday"
        );
    }

    #[test]
    fn test_classification_serialization() {
        assert_eq!(
            serde_json::to_string(&DayClassification::SpecialNonWorkingHoliday).unwrap(),
            "\"special_non_working_holiday\""
        );
    }

    #[test]
    fn test_late_hours() {
        let record = DailyWorkRecord {
            employee_id: "10001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
            raw_hours: dec!(9),
            billable_hours: dec!(8),
            regular_hours: dec!(8),
            overtime_hours: Decimal::ZERO,
            late_minutes: 45,
            late_deduction: dec!(75),
            classification: DayClassification::RegularWorkday,
            multiplier: dec!(1.00),
        };
        assert_eq!(record.late_hours(), dec!(0.75));
    }
}
