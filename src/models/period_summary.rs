//! Period summary models.
//!
//! A [`PeriodSummary`] accumulates the daily work of one employee within one
//! period. It is filled by [`crate::calculation::fold_daily_record`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DayClassification, PeriodKey};

/// One line of the per-day overtime and lateness log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// The work date.
    pub date: NaiveDate,
    /// The day classification.
    pub classification: DayClassification,
    /// Billable hours for the day.
    pub billable_hours: Decimal,
    /// Overtime hours for the day.
    pub overtime_hours: Decimal,
    /// The overtime rate applied.
    pub overtime_rate: Decimal,
    /// Overtime pay for the day.
    pub overtime_pay: Decimal,
    /// Minutes late.
    pub late_minutes: i64,
    /// Late deduction for the day.
    pub late_deduction: Decimal,
}

/// Running totals for one (employee, period) key.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PeriodKey, PeriodSummary};
/// use rust_decimal::Decimal;
///
/// let summary = PeriodSummary::new("10001", PeriodKey::Month { year: 2024, month: 6 });
/// assert_eq!(summary.total_work_hours, Decimal::ZERO);
/// assert!(summary.breakdown.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// The employee the summary belongs to.
    pub employee_id: String,
    /// The periods folded into this summary, in order.
    pub period_keys: Vec<PeriodKey>,
    /// Sum of billable hours.
    pub total_work_hours: Decimal,
    /// Sum of regular hours.
    pub total_regular_hours: Decimal,
    /// Sum of overtime hours.
    pub total_overtime_hours: Decimal,
    /// Billable hours worked on holidays.
    pub total_holiday_worked_hours: Decimal,
    /// Sum of late time, in hours.
    pub total_late_hours: Decimal,
    /// Sum of overtime pay.
    pub total_overtime_pay: Decimal,
    /// Sum of holiday premium pay.
    pub total_holiday_pay: Decimal,
    /// Sum of rest-day premium pay.
    pub total_rest_day_ot_pay: Decimal,
    /// Sum of late deductions.
    pub total_late_deductions: Decimal,
    /// Per-day log, in fold order.
    pub breakdown: Vec<BreakdownLine>,
}

impl PeriodSummary {
    /// Creates an empty summary for an employee and period.
    pub fn new(employee_id: impl Into<String>, period_key: PeriodKey) -> Self {
        Self {
            employee_id: employee_id.into(),
            period_keys: vec![period_key],
            total_work_hours: Decimal::ZERO,
            total_regular_hours: Decimal::ZERO,
            total_overtime_hours: Decimal::ZERO,
            total_holiday_worked_hours: Decimal::ZERO,
            total_late_hours: Decimal::ZERO,
            total_overtime_pay: Decimal::ZERO,
            total_holiday_pay: Decimal::ZERO,
            total_rest_day_ot_pay: Decimal::ZERO,
            total_late_deductions: Decimal::ZERO,
            breakdown: Vec::new(),
        }
    }

    /// Adds another summary of the same employee into this one.
    ///
    /// Used when a query range spans several periods. Totals are summed and
    /// the other summary's keys and breakdown lines are appended.
    pub fn merge(&mut self, other: PeriodSummary) {
        self.period_keys.extend(other.period_keys);
        self.total_work_hours += other.total_work_hours;
        self.total_regular_hours += other.total_regular_hours;
        self.total_overtime_hours += other.total_overtime_hours;
        self.total_holiday_worked_hours += other.total_holiday_worked_hours;
        self.total_late_hours += other.total_late_hours;
        self.total_overtime_pay += other.total_overtime_pay;
        self.total_holiday_pay += other.total_holiday_pay;
        self.total_rest_day_ot_pay += other.total_rest_day_ot_pay;
        self.total_late_deductions += other.total_late_deductions;
        self.breakdown.extend(other.breakdown);
    }

    /// Returns the number of days folded into the summary.
    pub fn days_worked(&self) -> usize {
        self.breakdown.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn line(date: &str, billable: &str) -> BreakdownLine {
        BreakdownLine {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            classification: DayClassification::RegularWorkday,
            billable_hours: dec(billable),
            overtime_hours: Decimal::ZERO,
            overtime_rate: dec("1.25"),
            overtime_pay: Decimal::ZERO,
            late_minutes: 0,
            late_deduction: Decimal::ZERO,
        }
    }

    #[test]
    fn test_merge_sums_totals_and_appends_lines() {
        let mut june = PeriodSummary::new("10001", PeriodKey::Month { year: 2024, month: 6 });
        june.total_work_hours = dec("8");
        june.total_overtime_pay = dec("62.50");
        june.breakdown.push(line("2024-06-28", "8"));

        let mut july = PeriodSummary::new("10001", PeriodKey::Month { year: 2024, month: 7 });
        july.total_work_hours = dec("7.5");
        july.total_late_deductions = dec("25");
        july.breakdown.push(line("2024-07-01", "7.5"));

        june.merge(july);

        assert_eq!(june.total_work_hours, dec("15.5"));
        assert_eq!(june.total_overtime_pay, dec("62.50"));
        assert_eq!(june.total_late_deductions, dec("25"));
        assert_eq!(june.days_worked(), 2);
        assert_eq!(
            june.period_keys,
            vec![
                PeriodKey::Month { year: 2024, month: 6 },
                PeriodKey::Month { year: 2024, month: 7 }
            ]
        );
    }

    #[test]
    fn test_summary_serialization() {
        let summary = PeriodSummary::new("10001", PeriodKey::Week { iso_year: 2024, week: 23 });
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"employee_id\":\"10001\""));
        assert!(json.contains("\"total_work_hours\":\"0\""));
        assert!(json.contains("\"breakdown\":[]"));
    }
}
