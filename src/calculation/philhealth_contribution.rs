//! PhilHealth contribution calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Gross income at or below which the flat contribution applies.
pub const PHILHEALTH_FLAT_THRESHOLD: Decimal = dec!(10000);

/// The flat contribution for low incomes.
pub const PHILHEALTH_FLAT_CONTRIBUTION: Decimal = dec!(300);

/// The contribution rate above the flat threshold.
pub const PHILHEALTH_RATE: Decimal = dec!(0.03);

/// The contribution ceiling.
pub const PHILHEALTH_MAXIMUM_CONTRIBUTION: Decimal = dec!(1800);

/// Computes the monthly PhilHealth contribution on gross income.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_philhealth;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_philhealth(Decimal::new(850, 0)), Decimal::new(300, 0));
/// assert_eq!(calculate_philhealth(Decimal::new(20000, 0)), Decimal::new(600, 0));
/// ```
pub fn calculate_philhealth(gross_income: Decimal) -> Decimal {
    if gross_income <= PHILHEALTH_FLAT_THRESHOLD {
        PHILHEALTH_FLAT_CONTRIBUTION
    } else {
        (PHILHEALTH_RATE * gross_income).min(PHILHEALTH_MAXIMUM_CONTRIBUTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_flat_at_threshold() {
        assert_eq!(calculate_philhealth(dec("10000")), dec("300"));
    }

    #[test]
    fn test_just_above_threshold_is_percentage() {
        assert_eq!(calculate_philhealth(dec("10000.01")), dec("300.0003"));
    }

    #[test]
    fn test_capped() {
        assert_eq!(calculate_philhealth(dec("60000")), dec("1800"));
        assert_eq!(calculate_philhealth(dec("250000")), dec("1800"));
    }

    #[test]
    fn test_zero_and_negative_gross_owe_flat_amount() {
        assert_eq!(calculate_philhealth(Decimal::ZERO), dec("300"));
        assert_eq!(calculate_philhealth(dec("-50")), dec("300"));
    }

    proptest! {
        #[test]
        fn prop_flat_below_threshold(cents in -1_000_000i64..=1_000_000i64) {
            prop_assert_eq!(calculate_philhealth(Decimal::new(cents, 2)), dec("300"));
        }

        #[test]
        fn prop_never_above_cap(cents in 0i64..10_000_000_000i64) {
            prop_assert!(calculate_philhealth(Decimal::new(cents, 2)) <= dec("1800"));
        }
    }
}
