//! Pricing

use std::num::NonZeroU32;

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors that can occur while calculating subtotals and totals.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// The amount does not fit in the minor-unit range.
    #[error("amount overflows minor units")]
    Overflow,

    /// A line quantity would exceed `u32::MAX`.
    #[error("line quantity overflows")]
    QuantityOverflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Multiplies a unit price by a quantity.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the result does not fit in minor units.
pub fn extended_price<'a>(
    unit_price: &Money<'a, Currency>,
    quantity: NonZeroU32,
) -> Result<Money<'a, Currency>, PricingError> {
    let minor_units = unit_price
        .to_minor_units()
        .checked_mul(i64::from(quantity.get()))
        .ok_or(PricingError::Overflow)?;

    Ok(Money::from_minor(minor_units, unit_price.currency()))
}

/// Sums a sequence of amounts, starting from zero in `currency`.
///
/// # Errors
///
/// Returns [`PricingError::Money`] if an amount is in a different currency.
pub fn total_price<'a>(
    amounts: impl IntoIterator<Item = Money<'a, Currency>>,
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, PricingError> {
    let total = amounts
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, amount| acc.add(amount))?;

    Ok(total)
}
