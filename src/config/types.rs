//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::{Holiday, HolidaySchedule};

/// Company metadata from company.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyMetadata {
    /// The company code (e.g., "MOTORPH").
    pub code: String,
    /// The company's display name.
    pub name: String,
    /// ISO currency code of all amounts.
    pub currency: String,
}

/// Workday rules from rules.yaml.
///
/// Every field has a default, so an empty rules file yields
/// [`WorkdayRules::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkdayRules {
    /// Official start of day; clocking in later counts as late.
    pub official_start: NaiveTime,
    /// Unpaid lunch deducted from every entry, in hours.
    pub unpaid_lunch_hours: Decimal,
    /// Billable hours above which time is overtime.
    pub regular_hours_cap: Decimal,
    /// Raw clocked hours at which overtime starts being credited.
    pub overtime_trigger_raw_hours: Decimal,
    /// Overtime pay rate.
    pub overtime_rate: Decimal,
    /// Rest-day premium rate.
    pub rest_day_rate: Decimal,
    /// When set, a weekend day is a rest day only if the entry carries the
    /// overtime-intent flag.
    pub rest_day_requires_overtime_flag: bool,
}

impl Default for WorkdayRules {
    fn default() -> Self {
        Self {
            official_start: NaiveTime::from_hms_opt(8, 30, 0).unwrap_or(NaiveTime::MIN),
            unpaid_lunch_hours: dec!(1),
            regular_hours_cap: dec!(8),
            overtime_trigger_raw_hours: dec!(9),
            overtime_rate: dec!(1.25),
            rest_day_rate: dec!(1.50),
            rest_day_requires_overtime_flag: false,
        }
    }
}

/// One file in the holidays directory.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The calendar year the file covers. Every holiday date must fall in it.
    pub year: i32,
    /// The dated holidays.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// The complete payroll configuration.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    company: CompanyMetadata,
    rules: WorkdayRules,
    holidays: HolidaySchedule,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig.
    pub fn new(company: CompanyMetadata, rules: WorkdayRules, holidays: HolidaySchedule) -> Self {
        Self {
            company,
            rules,
            holidays,
        }
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.company
    }

    /// Returns the workday rules.
    pub fn rules(&self) -> &WorkdayRules {
        &self.rules
    }

    /// Returns the holiday schedule.
    pub fn holidays(&self) -> &HolidaySchedule {
        &self.holidays
    }
}
