//! Pay period and period key models.
//!
//! This module contains the [`PayPeriod`] date range used by payroll queries
//! and the [`PeriodKey`] / [`PeriodMode`] types that bucket daily records into
//! weekly or monthly summaries.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Represents the inclusive date range of a payroll query.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let pay_period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
/// };
///
/// assert!(pay_period.contains_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
/// assert!(!pay_period.contains_date(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if the end date is not before the start date.
    pub fn is_well_formed(&self) -> bool {
        self.end_date >= self.start_date
    }
}

/// How daily records are bucketed into summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodMode {
    /// One summary per ISO week.
    Weekly,
    /// One summary per calendar month.
    #[default]
    Monthly,
}

impl PeriodMode {
    /// Derives the period key for a work date.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{PeriodKey, PeriodMode};
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
    /// assert_eq!(
    ///     PeriodMode::Weekly.key_for(date),
    ///     PeriodKey::Week { iso_year: 2024, week: 24 }
    /// );
    /// assert_eq!(
    ///     PeriodMode::Monthly.key_for(date),
    ///     PeriodKey::Month { year: 2024, month: 6 }
    /// );
    /// ```
    pub fn key_for(self, date: NaiveDate) -> PeriodKey {
        match self {
            PeriodMode::Weekly => {
                let iso = date.iso_week();
                PeriodKey::Week {
                    iso_year: iso.year(),
                    week: iso.week(),
                }
            }
            PeriodMode::Monthly => PeriodKey::Month {
                year: date.year(),
                month: date.month(),
            },
        }
    }
}

/// Identifies the period a daily record belongs to.
///
/// Weeks carry their ISO week-numbering year so that week 1 of two different
/// years never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PeriodKey {
    /// An ISO week.
    Week {
        /// The ISO week-numbering year.
        iso_year: i32,
        /// The ISO week number (1-53).
        week: u32,
    },
    /// A calendar month.
    Month {
        /// The calendar year.
        year: i32,
        /// The month (1-12).
        month: u32,
    },
}

impl std::fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodKey::Week { iso_year, week } => write!(f, "{}-W{:02}", iso_year, week),
            PeriodKey::Month { year, month } => write!(f, "{}-{:02}", year, month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn june() -> PayPeriod {
        PayPeriod {
            start_date: make_date("2024-06-01"),
            end_date: make_date("2024-06-30"),
        }
    }

    #[test]
    fn test_contains_date_on_boundaries() {
        let period = june();
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
        assert!(!period.contains_date(make_date("2024-05-31")));
        assert!(!period.contains_date(make_date("2024-07-01")));
    }

    #[test]
    fn test_is_well_formed() {
        assert!(june().is_well_formed());
        let single_day = PayPeriod {
            start_date: make_date("2024-06-03"),
            end_date: make_date("2024-06-03"),
        };
        assert!(single_day.is_well_formed());
        let inverted = PayPeriod {
            start_date: make_date("2024-06-30"),
            end_date: make_date("2024-06-01"),
        };
        assert!(!inverted.is_well_formed());
    }

    #[test]
    fn test_weekly_key_uses_iso_year_at_year_boundary() {
        // 2024-12-30 is the Monday of ISO week 1 of 2025
        assert_eq!(
            PeriodMode::Weekly.key_for(make_date("2024-12-30")),
            PeriodKey::Week {
                iso_year: 2025,
                week: 1
            }
        );
        // 2024-01-01 is the Monday of ISO week 1 of 2024
        assert_eq!(
            PeriodMode::Weekly.key_for(make_date("2024-01-01")),
            PeriodKey::Week {
                iso_year: 2024,
                week: 1
            }
        );
    }

    #[test]
    fn test_weekly_key_groups_monday_to_sunday() {
        let monday = PeriodMode::Weekly.key_for(make_date("2024-06-03"));
        let sunday = PeriodMode::Weekly.key_for(make_date("2024-06-09"));
        let next_monday = PeriodMode::Weekly.key_for(make_date("2024-06-10"));
        assert_eq!(monday, sunday);
        assert_ne!(monday, next_monday);
    }

    #[test]
    fn test_monthly_key() {
        assert_eq!(
            PeriodMode::Monthly.key_for(make_date("2024-06-30")),
            PeriodKey::Month {
                year: 2024,
                month: 6
            }
        );
    }

    #[test]
    fn test_period_key_display() {
        assert_eq!(
            PeriodKey::Week {
                iso_year: 2024,
                week: 5
            }
            .to_string(),
            "2024-W05"
        );
        assert_eq!(
            PeriodKey::Month {
                year: 2024,
                month: 6
            }
            .to_string(),
            "2024-06"
        );
    }

    #[test]
    fn test_period_mode_defaults_to_monthly() {
        assert_eq!(PeriodMode::default(), PeriodMode::Monthly);
        let mode: PeriodMode = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(mode, PeriodMode::Weekly);
    }

    #[test]
    fn test_period_key_serialization() {
        let key = PeriodKey::Month {
            year: 2024,
            month: 6,
        };
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#"{"kind":"month","year":2024,"month":6}"#);
    }

    #[test]
    fn test_deserialize_pay_period() {
        let json = r#"{ "start_date": "2024-06-01", "end_date": "2024-06-30" }"#;
        let period: PayPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period, june());
    }
}
