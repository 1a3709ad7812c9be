//! De-minimis benefit entitlements.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest accepted monthly amount for a single allowance, in PHP.
pub const MAX_ALLOWANCE: Decimal = dec!(1000000000);

/// Non-taxable allowances an employee is entitled to.
///
/// Amounts are monthly in master data. Callers running a shorter period
/// pro-rate them with [`DeMinimisBenefits::prorated`] before assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeMinimisBenefits {
    /// Rice subsidy in PHP.
    #[serde(default)]
    pub rice_subsidy: Decimal,
    /// Phone allowance in PHP.
    #[serde(default)]
    pub phone_allowance: Decimal,
    /// Clothing allowance in PHP.
    #[serde(default)]
    pub clothing_allowance: Decimal,
}

impl DeMinimisBenefits {
    /// Returns the sum of all allowances.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::DeMinimisBenefits;
    /// use rust_decimal::Decimal;
    ///
    /// let benefits = DeMinimisBenefits {
    ///     rice_subsidy: Decimal::new(1500, 0),
    ///     phone_allowance: Decimal::new(2000, 0),
    ///     clothing_allowance: Decimal::new(1000, 0),
    /// };
    /// assert_eq!(benefits.total(), Decimal::new(4500, 0));
    /// ```
    pub fn total(&self) -> Decimal {
        self.rice_subsidy + self.phone_allowance + self.clothing_allowance
    }

    /// Divides every allowance by `divisor` (e.g. 4 for a weekly run).
    ///
    /// A divisor of zero or less leaves the amounts unchanged; queries reject
    /// such divisors before they get here.
    pub fn prorated(&self, divisor: Decimal) -> Self {
        if divisor <= Decimal::ZERO {
            return *self;
        }
        Self {
            rice_subsidy: self.rice_subsidy / divisor,
            phone_allowance: self.phone_allowance / divisor,
            clothing_allowance: self.clothing_allowance / divisor,
        }
    }

    /// Checks that every allowance lies in `0..=MAX_ALLOWANCE`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] naming the first offending
    /// allowance.
    pub fn validate(&self, employee_id: &str) -> EngineResult<()> {
        let allowances = [
            ("rice_subsidy", self.rice_subsidy),
            ("phone_allowance", self.phone_allowance),
            ("clothing_allowance", self.clothing_allowance),
        ];
        for (field, value) in allowances {
            if value < Decimal::ZERO || value > MAX_ALLOWANCE {
                return Err(EngineError::InvalidEmployee {
                    employee_id: employee_id.to_string(),
                    field: field.to_string(),
                    message: format!("must be between 0 and {}, got {}", MAX_ALLOWANCE, value),
                });
            }
        }
        Ok(())
    }
}
