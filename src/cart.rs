//! Cart
//!
//! A [`Cart`] folds repeated additions of the same product into one [`LineItem`] with a
//! growing quantity. The same type backs both the purchase cart and the wishlist; the
//! [`ListKind`] only decides where it is displayed and what its empty state says.

use rusty_money::{Money, iso::Currency};
use tracing::debug;

use crate::{
    catalog::ProductRef,
    items::LineItem,
    prices::format_money,
    pricing::{PricingError, total_price},
    products::ProductKey,
    surface::Region,
};

/// Which of the two product lists a cart is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Products the user intends to buy now.
    Cart,

    /// Products saved for later.
    Wishlist,
}

impl ListKind {
    /// Display region the list is rendered into.
    pub fn region(self) -> Region {
        match self {
            ListKind::Cart => Region::Cart,
            ListKind::Wishlist => Region::Wishlist,
        }
    }

    /// Message shown when the list has no lines.
    pub fn empty_message(self) -> &'static str {
        match self {
            ListKind::Cart => "Why is your cart empty?",
            ListKind::Wishlist => "Why is your wishlist empty?",
        }
    }

    /// Lowercase name, as used in logs and CLI actions.
    pub fn as_str(self) -> &'static str {
        match self {
            ListKind::Cart => "cart",
            ListKind::Wishlist => "wishlist",
        }
    }
}

/// Ordered collection of line items, at most one per product.
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    kind: ListKind,
    items: Vec<LineItem<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create an empty list.
    pub fn new(kind: ListKind, currency: &'static Currency) -> Self {
        Cart {
            kind,
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of `product`.
    ///
    /// If a line for the product already exists its quantity goes up by one and it keeps
    /// its position, otherwise a new line is appended.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::QuantityOverflow`] if the existing line is already at the
    /// largest quantity a line can hold. The list is left unchanged.
    pub fn add_item(&mut self, product: ProductRef<'a>) -> Result<(), PricingError> {
        let key = product.key();

        if let Some(line) = self.items.iter_mut().find(|line| line.key() == key) {
            line.increment()?;

            debug!(
                list = self.kind.as_str(),
                product = %product.name,
                quantity = line.quantity().get(),
                "incremented line"
            );

            return Ok(());
        }

        self.items.push(LineItem::new(product));

        debug!(
            list = self.kind.as_str(),
            product = %product.name,
            lines = self.items.len(),
            "appended line"
        );

        Ok(())
    }

    /// Add one unit of each product, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first product that cannot be added, see [`Cart::add_item`].
    pub fn add_items(
        &mut self,
        products: impl IntoIterator<Item = ProductRef<'a>>,
    ) -> Result<(), PricingError> {
        products
            .into_iter()
            .try_for_each(|product| self.add_item(product))
    }

    /// Remove the whole line for `product`, whatever its quantity.
    ///
    /// Returns the removed line, or `None` if the product was not in the list.
    pub fn remove_item(&mut self, product: ProductKey) -> Option<LineItem<'a>> {
        let position = self.items.iter().position(|line| line.key() == product)?;
        let removed = self.items.remove(position);

        debug!(
            list = self.kind.as_str(),
            product = %removed.product().name,
            quantity = removed.quantity().get(),
            "removed line"
        );

        Some(removed)
    }

    /// Lines in the order they were first added.
    pub fn items(&self) -> &[LineItem<'a>] {
        &self.items
    }

    /// Get the line for a product.
    pub fn get(&self, product: ProductKey) -> Option<&LineItem<'a>> {
        self.items.iter().find(|line| line.key() == product)
    }

    /// Quantity of a product in the list, zero if absent.
    pub fn quantity_of(&self, product: ProductKey) -> u32 {
        self.get(product).map_or(0, |line| line.quantity().get())
    }

    /// Total number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.items
            .iter()
            .map(|line| u64::from(line.quantity().get()))
            .sum()
    }

    /// Sum of all line subtotals. Recomputed on every call.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a subtotal overflows or a line is priced in another
    /// currency.
    pub fn total(&self) -> Result<Money<'static, Currency>, PricingError> {
        let subtotals = self
            .items
            .iter()
            .map(LineItem::subtotal)
            .collect::<Result<Vec<_>, _>>()?;

        total_price(subtotals, self.currency)
    }

    /// The total formatted for display, e.g. `$55.00`.
    ///
    /// # Errors
    ///
    /// See [`Cart::total`].
    pub fn formatted_total(&self) -> Result<String, PricingError> {
        self.total().map(|total| format_money(&total))
    }

    /// Get the number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Which list this is.
    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Get the currency of the list.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
