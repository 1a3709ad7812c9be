//! Pag-IBIG (HDMF) contribution calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Gross income at or below which the lower rate applies.
pub const PAGIBIG_LOW_INCOME_THRESHOLD: Decimal = dec!(1500);

/// Contribution rate for low incomes.
pub const PAGIBIG_LOW_RATE: Decimal = dec!(0.01);

/// Contribution rate above the low-income threshold.
pub const PAGIBIG_STANDARD_RATE: Decimal = dec!(0.02);

/// The contribution ceiling.
pub const PAGIBIG_MAXIMUM_CONTRIBUTION: Decimal = dec!(100);

/// Computes the monthly Pag-IBIG contribution on gross income.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_pagibig;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_pagibig(Decimal::new(1000, 0)), Decimal::new(10, 0));
/// assert_eq!(calculate_pagibig(Decimal::new(20000, 0)), Decimal::new(100, 0));
/// ```
pub fn calculate_pagibig(gross_income: Decimal) -> Decimal {
    let rate = if gross_income <= PAGIBIG_LOW_INCOME_THRESHOLD {
        PAGIBIG_LOW_RATE
    } else {
        PAGIBIG_STANDARD_RATE
    };
    (rate * gross_income).min(PAGIBIG_MAXIMUM_CONTRIBUTION)
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
    fn test_low_income_rate() {
        assert_eq!(calculate_pagibig(dec("1500")), dec("15"));
    }

    #[test]
    fn test_standard_rate_above_threshold() {
        assert_eq!(calculate_pagibig(dec("1500.50")), dec("30.01"));
        assert_eq!(calculate_pagibig(dec("4687.46")), dec("93.7492"));
    }

    #[test]
    fn test_capped_at_100() {
        assert_eq!(calculate_pagibig(dec("5000")), dec("100"));
        assert_eq!(calculate_pagibig(dec("90000")), dec("100"));
    }

    proptest! {
        #[test]
        fn prop_never_above_cap(cents in -1_000_000i64..10_000_000_000i64) {
            prop_assert!(calculate_pagibig(Decimal::new(cents, 2)) <= dec("100"));
        }

        #[test]
        fn prop_non_decreasing(a in 0i64..1_000_000i64, b in 0i64..1_000_000i64) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                calculate_pagibig(Decimal::new(low, 2)) <= calculate_pagibig(Decimal::new(high, 2))
            );
        }
    }
}
