//! BIR withholding tax calculation.
//!
//! Brackets open at the listed floors, while each bracket's excess is measured
//! from one peso above the previous ceiling (e.g. the 20% bracket starts above
//! 20,832 but taxes the excess over 20,833). Taxable incomes strictly between
//! 20,832 and 20,833 therefore yield a small negative tax.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// One withholding tax bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// Incomes below this value fall in the bracket.
    pub upper_bound: Decimal,
    /// Fixed tax owed at the start of the bracket.
    pub base_tax: Decimal,
    /// Marginal rate on the excess.
    pub rate: Decimal,
    /// Amount the excess is measured from.
    pub excess_over: Decimal,
}

/// Taxable income at or below which no tax is withheld.
pub const TAX_EXEMPT_CEILING: Decimal = dec!(20832);

/// Brackets above the exempt ceiling, lowest first. The last bracket is
/// unbounded.
pub const TAX_BRACKETS: [TaxBracket; 5] = [
    TaxBracket {
        upper_bound: dec!(33333),
        base_tax: dec!(0),
        rate: dec!(0.20),
        excess_over: dec!(20833),
    },
    TaxBracket {
        upper_bound: dec!(66667),
        base_tax: dec!(2500),
        rate: dec!(0.25),
        excess_over: dec!(33333),
    },
    TaxBracket {
        upper_bound: dec!(166667),
        base_tax: dec!(10833),
        rate: dec!(0.30),
        excess_over: dec!(66667),
    },
    TaxBracket {
        upper_bound: dec!(666667),
        base_tax: dec!(40833.33),
        rate: dec!(0.32),
        excess_over: dec!(166667),
    },
    TaxBracket {
        upper_bound: Decimal::MAX,
        base_tax: dec!(200833.33),
        rate: dec!(0.35),
        excess_over: dec!(666667),
    },
];

/// Computes the BIR withholding tax on taxable income.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_withholding_tax;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_withholding_tax(Decimal::new(20833, 0)), Decimal::ZERO);
/// assert_eq!(calculate_withholding_tax(Decimal::new(33333, 0)), Decimal::new(2500, 0));
/// ```
pub fn calculate_withholding_tax(taxable_income: Decimal) -> Decimal {
    if taxable_income <= TAX_EXEMPT_CEILING {
        return Decimal::ZERO;
    }

    TAX_BRACKETS
        .iter()
        .find(|bracket| taxable_income < bracket.upper_bound)
        .map(|bracket| bracket.base_tax + bracket.rate * (taxable_income - bracket.excess_over))
        .unwrap_or(Decimal::ZERO)
}
