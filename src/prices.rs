//! Prices

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

/// Formats an amount with its currency symbol prefix and exactly two decimal places.
///
/// No digit grouping is applied, so `1234.5 USD` becomes `$1234.50`.
pub fn format_money(money: &Money<'_, Currency>) -> String {
    let currency = money.currency();
    let amount = Decimal::new(money.to_minor_units(), currency.exponent);
    let sign = if amount.is_sign_negative() { "-" } else { "" };

    format!("{sign}{}{:.2}", currency.symbol, amount.abs())
}
