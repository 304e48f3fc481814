//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    products::{Product, ProductAttributes},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Catalog currency code (e.g., "GBP"). Defaults to the first product's currency,
    /// or USD when there are no products.
    #[serde(default)]
    pub currency: Option<String>,

    /// Products in catalog order
    #[serde(default)]
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Handle used by list fixtures and CLI actions
    pub key: String,

    /// Product name
    pub name: String,

    /// Product price (e.g., "20.00 USD")
    pub price: String,

    /// Size
    #[serde(default)]
    pub size: Option<String>,

    /// Color
    #[serde(default)]
    pub color: Option<String>,

    /// Style
    #[serde(default)]
    pub style: Option<String>,

    /// Height
    #[serde(default)]
    pub height: Option<String>,

    /// Gender
    #[serde(default)]
    pub gender: Option<String>,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Product::with_attributes(
            fixture.name,
            Money::from_minor(minor_units, currency),
            ProductAttributes {
                size: fixture.size,
                color: fixture.color,
                style: fixture.style,
                height: fixture.height,
                gender: fixture.gender,
            },
        ))
    }
}

/// Look up a supported currency by its ISO code
///
/// # Errors
///
/// Returns an error if the code is not GBP, USD or EUR.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}

/// Parse price string (e.g., "20.00 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, is negative or has more decimal
/// places than the currency's minor unit, or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = parse_currency(currency_code)?;

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?
        .normalize();

    if amount.is_sign_negative() || amount.scale() > currency.exponent {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::from(10_i64.pow(currency.exponent)))
        .and_then(|value| value.to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_reads_amount_and_currency() -> TestResult {
        assert_eq!(parse_price("20.00 USD")?, (2000, USD));
        assert_eq!(parse_price("2.99 GBP")?, (299, GBP));
        assert_eq!(parse_price("15 EUR")?, (1500, EUR));
        assert_eq!(parse_price("20.500 USD")?, (2050, USD));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_bad_input() {
        assert!(matches!(parse_price("20.00"), Err(FixtureError::InvalidPrice(_))));
        assert!(matches!(parse_price("abc USD"), Err(FixtureError::InvalidPrice(_))));
        assert!(matches!(parse_price("-1.00 USD"), Err(FixtureError::InvalidPrice(_))));
        assert!(matches!(parse_price("20.005 USD"), Err(FixtureError::InvalidPrice(_))));
        assert!(matches!(
            parse_price("10.00 JPY"),
            Err(FixtureError::UnknownCurrency(code)) if code == "JPY"
        ));
    }

    #[test]
    fn fixture_converts_to_product_with_attributes() -> TestResult {
        let fixture: ProductsFixture = serde_norway::from_str(
            "products:\n  - key: shirt\n    name: Shirt\n    price: 20.00 USD\n    size: M\n",
        )?;

        let product_fixture = fixture.products.into_iter().next().ok_or("no product")?;
        let product = Product::try_from(product_fixture)?;

        assert_eq!(product.name, "Shirt");
        assert_eq!(product.price, Money::from_minor(2000, USD));
        assert_eq!(product.attributes.size.as_deref(), Some("M"));
        assert!(product.attributes.color.is_none());

        Ok(())
    }
}
