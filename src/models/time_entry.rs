//! Attendance records.
//!
//! This module defines the [`TimeEntry`] struct: one clock-in/clock-out pair
//! for one employee on one date.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single clock-in/clock-out pair as produced by ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// The employee the entry belongs to.
    pub employee_id: String,
    /// When the employee clocked in.
    pub clock_in: NaiveDateTime,
    /// When the employee clocked out (same calendar date as the clock-in).
    pub clock_out: NaiveDateTime,
    /// Whether the source record flagged an intent to work overtime.
    #[serde(default)]
    pub has_overtime_flag: bool,
}

impl TimeEntry {
    /// Returns the raw clocked hours, floored at zero.
    ///
    /// Seconds are ignored; the duration is measured in whole minutes.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::TimeEntry;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let entry = TimeEntry {
    ///     employee_id: "10001".to_string(),
    ///     clock_in: NaiveDateTime::parse_from_str("2024-06-04 08:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     clock_out: NaiveDateTime::parse_from_str("2024-06-04 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     has_overtime_flag: false,
    /// };
    /// assert_eq!(entry.raw_hours(), Decimal::new(95, 1)); // 9.5 hours
    /// ```
    pub fn raw_hours(&self) -> Decimal {
        let minutes = (self.clock_out - self.clock_in).num_minutes().max(0);
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }

    /// Returns the work date, taken from the clock-in.
    pub fn work_date(&self) -> NaiveDate {
        self.clock_in.date()
    }
}
