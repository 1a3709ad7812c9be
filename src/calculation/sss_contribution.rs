//! SSS contribution lookup.
//!
//! This module implements the Social Security System employee contribution
//! table (January 2024 schedule).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// SSS bracket floors and the contribution owed from each floor upward.
///
/// Floors step by 500 from 3,250 to 20,250, then jump to the 24,750 cap.
pub const SSS_CONTRIBUTION_TABLE: [(Decimal, Decimal); 36] = [
    (dec!(3250), dec!(135.00)),
    (dec!(3750), dec!(157.50)),
    (dec!(4250), dec!(180.00)),
    (dec!(4750), dec!(202.50)),
    (dec!(5250), dec!(225.00)),
    (dec!(5750), dec!(247.50)),
    (dec!(6250), dec!(270.00)),
    (dec!(6750), dec!(292.50)),
    (dec!(7250), dec!(315.00)),
    (dec!(7750), dec!(337.50)),
    (dec!(8250), dec!(360.00)),
    (dec!(8750), dec!(382.50)),
    (dec!(9250), dec!(405.00)),
    (dec!(9750), dec!(427.50)),
    (dec!(10250), dec!(450.00)),
    (dec!(10750), dec!(472.50)),
    (dec!(11250), dec!(495.00)),
    (dec!(11750), dec!(517.50)),
    (dec!(12250), dec!(540.00)),
    (dec!(12750), dec!(562.50)),
    (dec!(13250), dec!(585.00)),
    (dec!(13750), dec!(607.50)),
    (dec!(14250), dec!(630.00)),
    (dec!(14750), dec!(652.50)),
    (dec!(15250), dec!(675.00)),
    (dec!(15750), dec!(697.50)),
    (dec!(16250), dec!(720.00)),
    (dec!(16750), dec!(742.50)),
    (dec!(17250), dec!(765.00)),
    (dec!(17750), dec!(787.50)),
    (dec!(18250), dec!(810.00)),
    (dec!(18750), dec!(832.50)),
    (dec!(19250), dec!(855.00)),
    (dec!(19750), dec!(877.50)),
    (dec!(20250), dec!(900.00)),
    (dec!(24750), dec!(1125.00)),
];

/// The contribution owed for salaries below the first floor.
pub const SSS_MINIMUM_CONTRIBUTION: Decimal = dec!(135.00);

/// The contribution owed at and above the last floor.
pub const SSS_MAXIMUM_CONTRIBUTION: Decimal = dec!(1125.00);

/// Looks up the SSS contribution for a monthly salary basis.
///
/// Uses the bracket with the highest floor not above `salary`. Salaries below
/// the first floor (including zero and negative values) owe the minimum
/// contribution, and salaries at or above the last floor owe the maximum.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_sss;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_sss(Decimal::new(8800, 0)), Decimal::new(38250, 2));
/// assert_eq!(calculate_sss(Decimal::new(90000, 0)), Decimal::new(1125, 0));
/// ```
pub fn calculate_sss(salary: Decimal) -> Decimal {
    SSS_CONTRIBUTION_TABLE
        .iter()
        .rev()
        .find(|(floor, _)| *floor <= salary)
        .map(|(_, contribution)| *contribution)
        .unwrap_or(SSS_MINIMUM_CONTRIBUTION)
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
    fn test_table_steps_evenly_up_to_20250() {
        for (index, (floor, contribution)) in SSS_CONTRIBUTION_TABLE[..35].iter().enumerate() {
            let step = Decimal::from(index as u32);
            assert_eq!(*floor, dec("3250") + dec("500") * step);
            assert_eq!(*contribution, dec("135.00") + dec("22.50") * step);
        }
    }

    #[test]
    fn test_exact_floors() {
        assert_eq!(calculate_sss(dec("3250")), dec("135.00"));
        assert_eq!(calculate_sss(dec("8750")), dec("382.50"));
        assert_eq!(calculate_sss(dec("20250")), dec("900.00"));
        assert_eq!(calculate_sss(dec("24750")), dec("1125.00"));
    }

    #[test]
    fn test_between_floors_uses_lower_bracket() {
        assert_eq!(calculate_sss(dec("8800")), dec("382.50"));
        assert_eq!(calculate_sss(dec("3749.99")), dec("135.00"));
        assert_eq!(calculate_sss(dec("25000")), dec("1125.00"));
    }

    #[test]
    fn test_gap_before_cap_stays_at_900() {
        assert_eq!(calculate_sss(dec("20750")), dec("900.00"));
        assert_eq!(calculate_sss(dec("24749.99")), dec("900.00"));
    }

    #[test]
    fn test_below_table_owes_minimum() {
        assert_eq!(calculate_sss(dec("3249.99")), dec("135.00"));
        assert_eq!(calculate_sss(Decimal::ZERO), dec("135.00"));
        assert_eq!(calculate_sss(dec("-100")), dec("135.00"));
    }

    proptest! {
        #[test]
        fn prop_saturates_at_cap(cents in 2_475_000i64..1_000_000_000i64) {
            let salary = Decimal::new(cents, 2);
            prop_assert_eq!(calculate_sss(salary), SSS_MAXIMUM_CONTRIBUTION);
        }

        #[test]
        fn prop_non_decreasing(a in 0i64..5_000_000i64, b in 0i64..5_000_000i64) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                calculate_sss(Decimal::new(low, 2)) <= calculate_sss(Decimal::new(high, 2))
            );
        }

        #[test]
        fn prop_within_bounds(cents in -1_000_000i64..1_000_000_000i64) {
            let contribution = calculate_sss(Decimal::new(cents, 2));
            prop_assert!(contribution >= SSS_MINIMUM_CONTRIBUTION);
            prop_assert!(contribution <= SSS_MAXIMUM_CONTRIBUTION);
        }
    }
}
