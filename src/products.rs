//! Products

use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Optional descriptive attributes of a product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductAttributes {
    /// Size, e.g. "M" or "10.5"
    pub size: Option<String>,

    /// Color
    pub color: Option<String>,

    /// Style
    pub style: Option<String>,

    /// Height
    pub height: Option<String>,

    /// Gender
    pub gender: Option<String>,
}

impl ProductAttributes {
    /// Iterate over the attributes that are present, as `(label, value)` pairs,
    /// in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("Size", self.size.as_deref()),
            ("Color", self.color.as_deref()),
            ("Style", self.style.as_deref()),
            ("Height", self.height.as_deref()),
            ("Gender", self.gender.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|value| (label, value)))
    }

    /// Returns true if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product name
    pub name: String,

    /// Product price
    pub price: Money<'static, Currency>,

    /// Product attributes
    pub attributes: ProductAttributes,
}

impl Product {
    /// Create a product with no attributes.
    pub fn new(name: impl Into<String>, price: Money<'static, Currency>) -> Self {
        Self::with_attributes(name, price, ProductAttributes::default())
    }

    /// Create a product with the given attributes.
    pub fn with_attributes(
        name: impl Into<String>,
        price: Money<'static, Currency>,
        attributes: ProductAttributes,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;

    use super::*;

    #[test]
    fn attributes_iterate_in_display_order_skipping_missing() {
        let attributes = ProductAttributes {
            gender: Some("Unisex".to_string()),
            size: Some("M".to_string()),
            style: Some("Crew".to_string()),
            ..Default::default()
        };

        let pairs: Vec<_> = attributes.iter().collect();

        assert_eq!(
            pairs,
            vec![("Size", "M"), ("Style", "Crew"), ("Gender", "Unisex")]
        );
    }

    #[test]
    fn default_attributes_are_empty() {
        assert!(ProductAttributes::default().is_empty());
    }

    #[test]
    fn new_product_has_no_attributes() {
        let product = Product::new("Shirt", Money::from_minor(2000, USD));

        assert_eq!(product.name, "Shirt");
        assert_eq!(product.price, Money::from_minor(2000, USD));
        assert!(product.attributes.is_empty());
    }
}
