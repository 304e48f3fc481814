//! Items

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};

use crate::{
    catalog::ProductRef,
    prices::format_money,
    pricing::{PricingError, extended_price},
    products::{Product, ProductKey},
};

/// A product held in a cart, with how many of it.
#[derive(Debug, Clone, Copy)]
pub struct LineItem<'a> {
    product: ProductRef<'a>,
    quantity: NonZeroU32,
}

impl<'a> LineItem<'a> {
    /// Creates a new line item with a quantity of one.
    pub fn new(product: ProductRef<'a>) -> Self {
        Self {
            product,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Returns the key of the product on this line
    pub fn key(&self) -> ProductKey {
        self.product.key()
    }

    /// Returns the product on this line
    pub fn product(&self) -> &'a Product {
        self.product.product()
    }

    /// Returns the unit price
    pub fn price(&self) -> &'a Money<'static, Currency> {
        &self.product.product().price
    }

    /// Returns the quantity
    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }

    /// Adds one unit to the line.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::QuantityOverflow`] if the quantity is already `u32::MAX`.
    pub(crate) fn increment(&mut self) -> Result<(), PricingError> {
        self.quantity = self
            .quantity
            .checked_add(1)
            .ok_or(PricingError::QuantityOverflow)?;

        Ok(())
    }

    /// Unit price multiplied by quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the subtotal does not fit in minor units.
    pub fn subtotal(&self) -> Result<Money<'static, Currency>, PricingError> {
        extended_price(self.price(), self.quantity)
    }

    /// The subtotal formatted for display, e.g. `$40.00`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the subtotal does not fit in minor units.
    pub fn formatted_subtotal(&self) -> Result<String, PricingError> {
        self.subtotal().map(|subtotal| format_money(&subtotal))
    }
}
