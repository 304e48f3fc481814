//! Store page
//!
//! [`StorePage`] owns the cart and the wishlist and keeps three display regions in step
//! with them. Every mutation is followed by an explicit, full re-render of the region it
//! affects; nothing is cached between renders.

use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    cart::{Cart, ListKind},
    catalog::{Catalog, ProductRef},
    components::{self, ControlName, Fragment, card, empty_state, purchase_controls, summary_row},
    prices::format_money,
    pricing::PricingError,
    products::ProductKey,
    surface::{DisplaySurface, Region, SurfaceError},
};

/// Errors raised by store actions.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The action refers to a product that is not in the catalog.
    #[error("unknown product {0:?}")]
    UnknownProduct(ProductKey),

    /// A subtotal or total could not be computed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// The display surface rejected a fragment.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// What a rendered control does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Add one unit of a product to a list.
    Add(ListKind, ProductKey),

    /// Remove a product's whole line from a list.
    Remove(ListKind, ProductKey),
}

/// Controller for the catalog, cart and wishlist regions.
#[derive(Debug)]
pub struct StorePage<'a, S> {
    catalog: &'a Catalog,
    cart: Cart<'a>,
    wishlist: Cart<'a>,
    surface: S,
}

impl<'a, S: DisplaySurface> StorePage<'a, S> {
    /// Create a store page with an empty cart and wishlist.
    pub fn new(catalog: &'a Catalog, surface: S) -> Self {
        let currency = catalog.currency();

        Self::with_lists(
            catalog,
            Cart::new(ListKind::Cart, currency),
            Cart::new(ListKind::Wishlist, currency),
            surface,
        )
    }

    /// Create a store page around existing lists.
    pub fn with_lists(
        catalog: &'a Catalog,
        cart: Cart<'a>,
        wishlist: Cart<'a>,
        surface: S,
    ) -> Self {
        Self {
            catalog,
            cart,
            wishlist,
            surface,
        }
    }

    /// Replace the catalog region with one card per product.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError::Surface`] if the surface rejects the fragment.
    #[instrument(skip_all)]
    pub fn render_catalog(
        &mut self,
        products: impl IntoIterator<Item = ProductRef<'a>>,
    ) -> Result<(), StoreError> {
        let cards: Vec<_> = products
            .into_iter()
            .map(|product| {
                let mut card = card(
                    product.name.as_str(),
                    format_money(&product.price),
                    product.attributes.iter(),
                    purchase_controls(),
                );

                let bindings = [
                    (ControlName::AddToCart, ListKind::Cart),
                    (ControlName::AddToWishlist, ListKind::Wishlist),
                ];

                for (name, list) in bindings {
                    if let Some(control) = card.control_mut(name) {
                        control.bind(Action::Add(list, product.key()));
                    }
                }

                card
            })
            .collect();

        info!(products = cards.len(), "rendering catalog");

        self.surface.replace(Region::Catalog, Fragment::Cards(cards))?;

        Ok(())
    }

    /// Add one unit of `product` to the cart and re-render the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownProduct`] if `product` was not borrowed from this
    /// page's catalog, otherwise see [`StorePage::render_cart`].
    pub fn add_to_cart(&mut self, product: ProductRef<'a>) -> Result<(), StoreError> {
        self.add_to(ListKind::Cart, product)
    }

    /// Add one unit of `product` to the wishlist and re-render the wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownProduct`] if `product` was not borrowed from this
    /// page's catalog, otherwise see [`StorePage::render_wishlist`].
    pub fn add_to_wishlist(&mut self, product: ProductRef<'a>) -> Result<(), StoreError> {
        self.add_to(ListKind::Wishlist, product)
    }

    /// Remove the cart line for `product` and re-render the cart.
    ///
    /// Removing a product that is not in the cart leaves it unchanged.
    ///
    /// # Errors
    ///
    /// See [`StorePage::render_cart`].
    pub fn remove_cart_item(&mut self, product: ProductKey) -> Result<(), StoreError> {
        self.remove_from(ListKind::Cart, product)
    }

    /// Remove the wishlist line for `product` and re-render the wishlist.
    ///
    /// # Errors
    ///
    /// See [`StorePage::render_wishlist`].
    pub fn remove_wishlist_item(&mut self, product: ProductKey) -> Result<(), StoreError> {
        self.remove_from(ListKind::Wishlist, product)
    }

    /// Replace the cart region with the current cart.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if a subtotal cannot be computed or the surface rejects
    /// the fragment.
    pub fn render_cart(&mut self) -> Result<(), StoreError> {
        self.render_list(ListKind::Cart)
    }

    /// Replace the wishlist region with the current wishlist.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if a subtotal cannot be computed or the surface rejects
    /// the fragment.
    pub fn render_wishlist(&mut self) -> Result<(), StoreError> {
        self.render_list(ListKind::Wishlist)
    }

    /// Run the action bound to a rendered control.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownProduct`] if an add action names a product missing
    /// from the catalog, or any error from the re-render.
    pub fn dispatch(&mut self, action: Action) -> Result<(), StoreError> {
        match action {
            Action::Add(list, key) => {
                let catalog = self.catalog;
                let product = catalog.get(key).ok_or(StoreError::UnknownProduct(key))?;

                self.add_to(list, product)
            }
            Action::Remove(list, key) => self.remove_from(list, key),
        }
    }

    /// Render all three regions.
    ///
    /// # Errors
    ///
    /// Returns the first error from any region render.
    pub fn render_all(&mut self) -> Result<(), StoreError> {
        let catalog = self.catalog;

        self.render_catalog(catalog.iter())?;
        self.render_cart()?;
        self.render_wishlist()
    }

    /// The purchase cart.
    pub fn cart(&self) -> &Cart<'a> {
        &self.cart
    }

    /// The wishlist.
    pub fn wishlist(&self) -> &Cart<'a> {
        &self.wishlist
    }

    /// The display surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the page, returning the display surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn list(&self, kind: ListKind) -> &Cart<'a> {
        match kind {
            ListKind::Cart => &self.cart,
            ListKind::Wishlist => &self.wishlist,
        }
    }

    fn list_mut(&mut self, kind: ListKind) -> &mut Cart<'a> {
        match kind {
            ListKind::Cart => &mut self.cart,
            ListKind::Wishlist => &mut self.wishlist,
        }
    }

    #[instrument(skip(self, product), fields(list = kind.as_str(), product = %product.name))]
    fn add_to(&mut self, kind: ListKind, product: ProductRef<'a>) -> Result<(), StoreError> {
        if !self.catalog.contains(product) {
            return Err(StoreError::UnknownProduct(product.key()));
        }

        self.list_mut(kind).add_item(product)?;
        self.render_list(kind)
    }

    #[instrument(skip(self), fields(list = kind.as_str()))]
    fn remove_from(&mut self, kind: ListKind, product: ProductKey) -> Result<(), StoreError> {
        self.list_mut(kind).remove_item(product);
        self.render_list(kind)
    }

    fn render_list(&mut self, kind: ListKind) -> Result<(), StoreError> {
        let list = self.list(kind);

        if list.is_empty() {
            self.surface
                .replace(kind.region(), empty_state(kind.empty_message()))?;

            return Ok(());
        }

        let rows = list
            .items()
            .iter()
            .map(|line| -> Result<_, PricingError> {
                let mut row = summary_row(
                    line.product().name.as_str(),
                    format_money(line.price()),
                    line.quantity().get(),
                    line.formatted_subtotal()?,
                );

                row.remove.bind(Action::Remove(kind, line.key()));

                Ok(row)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let fragment = components::summary(rows, list.formatted_total()?);

        self.surface.replace(kind.region(), fragment)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use crate::{
        components::Summary,
        products::{Product, ProductAttributes},
        surface::{MemorySurface, MockDisplaySurface},
    };

    use super::*;

    fn test_catalog() -> TestResult<Catalog> {
        let mut catalog = Catalog::new(USD);

        catalog.insert(
            "shirt",
            Product::with_attributes(
                "Shirt",
                Money::from_minor(2000, USD),
                ProductAttributes {
                    size: Some("M".to_string()),
                    color: Some("Blue".to_string()),
                    ..Default::default()
                },
            ),
        )?;
        catalog.insert("hat", Product::new("Hat", Money::from_minor(1500, USD)))?;

        Ok(catalog)
    }

    fn summary_in(surface: &MemorySurface, region: Region) -> TestResult<Summary> {
        match surface.get(region) {
            Some(Fragment::Summary(summary)) => Ok(summary.clone()),
            other => Err(format!("expected summary in {region}, got {other:?}").into()),
        }
    }

    #[test]
    fn catalog_cards_show_present_attributes_and_bind_both_lists() -> TestResult {
        let catalog = test_catalog()?;
        let shirt = catalog.find("shirt").ok_or("missing shirt")?;
        let mut page = StorePage::new(&catalog, MemorySurface::new());

        page.render_catalog(catalog.iter())?;

        let Some(Fragment::Cards(cards)) = page.surface().get(Region::Catalog) else {
            return Err("catalog region holds no cards".into());
        };

        let shirt_card = cards.first().ok_or("no cards rendered")?;
        let hat_card = cards.get(1).ok_or("hat card missing")?;

        assert_eq!(cards.len(), 2);
        assert_eq!(shirt_card.title, "Shirt");
        assert_eq!(shirt_card.price, "$20.00");
        assert_eq!(shirt_card.attributes.len(), 2);
        assert!(hat_card.attributes.is_empty());
        assert_eq!(
            shirt_card
                .control(ControlName::AddToCart)
                .and_then(components::Control::action),
            Some(Action::Add(ListKind::Cart, shirt.key()))
        );
        assert_eq!(
            shirt_card
                .control(ControlName::AddToWishlist)
                .and_then(components::Control::action),
            Some(Action::Add(ListKind::Wishlist, shirt.key()))
        );

        Ok(())
    }

    #[test]
    fn render_catalog_twice_is_idempotent() -> TestResult {
        let catalog = test_catalog()?;
        let mut page = StorePage::new(&catalog, MemorySurface::new());

        page.render_catalog(catalog.iter())?;
        let first = page.surface().get(Region::Catalog).cloned();

        page.render_catalog(catalog.iter())?;
        let second = page.surface().get(Region::Catalog).cloned();

        assert_eq!(first, second);
        assert_eq!(page.surface().replacements(Region::Catalog), 2);

        Ok(())
    }

    #[test]
    fn adding_to_cart_replaces_only_the_cart_region() -> TestResult {
        let catalog = test_catalog()?;
        let shirt = catalog.find("shirt").ok_or("missing shirt")?;
        let mut surface = MockDisplaySurface::new();

        surface
            .expect_replace()
            .withf(|region, fragment| {
                *region == Region::Cart && matches!(fragment, Fragment::Summary(_))
            })
            .times(2)
            .returning(|_, _| Ok(()));

        let mut page = StorePage::new(&catalog, surface);

        page.add_to_cart(shirt)?;
        page.add_to_cart(shirt)?;

        assert_eq!(page.cart().quantity_of(shirt.key()), 2);
        assert!(page.wishlist().is_empty());

        Ok(())
    }

    #[test]
    fn adding_to_wishlist_replaces_only_the_wishlist_region() -> TestResult {
        let catalog = test_catalog()?;
        let hat = catalog.find("hat").ok_or("missing hat")?;
        let mut surface = MockDisplaySurface::new();

        surface
            .expect_replace()
            .withf(|region, _| *region == Region::Wishlist)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut page = StorePage::new(&catalog, surface);

        page.add_to_wishlist(hat)?;

        assert_eq!(page.wishlist().len(), 1);
        assert!(page.cart().is_empty());

        Ok(())
    }

    #[test]
    fn cart_summary_shows_lines_and_total() -> TestResult {
        let catalog = test_catalog()?;
        let shirt = catalog.find("shirt").ok_or("missing shirt")?;
        let hat = catalog.find("hat").ok_or("missing hat")?;
        let mut page = StorePage::new(&catalog, MemorySurface::new());

        page.add_to_cart(shirt)?;
        page.add_to_cart(shirt)?;
        page.add_to_cart(hat)?;

        let summary = summary_in(page.surface(), Region::Cart)?;
        let shirt_row = summary.rows.first().ok_or("missing shirt row")?;

        assert_eq!(summary.rows.len(), 2);
        assert_eq!(shirt_row.name, "Shirt");
        assert_eq!(shirt_row.price_breakdown(), "$20.00 × 2");
        assert_eq!(shirt_row.subtotal, "$40.00");
        assert_eq!(
            shirt_row.remove.action(),
            Some(Action::Remove(ListKind::Cart, shirt.key()))
        );
        assert_eq!(summary.total, "$55.00");

        Ok(())
    }

    #[test]
    fn removing_the_last_line_renders_the_empty_state() -> TestResult {
        let catalog = test_catalog()?;
        let shirt = catalog.find("shirt").ok_or("missing shirt")?;
        let mut page = StorePage::new(&catalog, MemorySurface::new());

        page.add_to_cart(shirt)?;
        page.add_to_cart(shirt)?;
        page.remove_cart_item(shirt.key())?;

        assert!(page.cart().is_empty());
        assert_eq!(
            page.surface().get(Region::Cart),
            Some(&Fragment::Message("Why is your cart empty?".to_string()))
        );

        Ok(())
    }

    #[test]
    fn removing_an_absent_line_still_re_renders_unchanged() -> TestResult {
        let catalog = test_catalog()?;
        let shirt = catalog.find("shirt").ok_or("missing shirt")?;
        let hat = catalog.find("hat").ok_or("missing hat")?;
        let mut page = StorePage::new(&catalog, MemorySurface::new());

        page.add_to_wishlist(shirt)?;
        let before = page.surface().get(Region::Wishlist).cloned();

        page.remove_wishlist_item(hat.key())?;

        assert_eq!(page.surface().get(Region::Wishlist).cloned(), before);
        assert_eq!(page.surface().replacements(Region::Wishlist), 2);
        assert_eq!(page.wishlist().len(), 1);

        Ok(())
    }

    #[test]
    fn empty_lists_render_their_own_messages() -> TestResult {
        let catalog = test_catalog()?;
        let mut page = StorePage::new(&catalog, MemorySurface::new());

        page.render_all()?;

        assert_eq!(
            page.surface().get(Region::Cart),
            Some(&Fragment::Message("Why is your cart empty?".to_string()))
        );
        assert_eq!(
            page.surface().get(Region::Wishlist),
            Some(&Fragment::Message("Why is your wishlist empty?".to_string()))
        );
        assert_eq!(page.surface().replacements(Region::Catalog), 1);

        Ok(())
    }

    #[test]
    fn dispatching_bound_actions_drives_the_lists() -> TestResult {
        let catalog = test_catalog()?;
        let mut page = StorePage::new(&catalog, MemorySurface::new());

        page.render_catalog(catalog.iter())?;

        let actions = page
            .surface()
            .get(Region::Catalog)
            .map(Fragment::actions)
            .ok_or("catalog not rendered")?;

        for action in actions {
            page.dispatch(action)?;
        }

        assert_eq!(page.cart().len(), 2);
        assert_eq!(page.wishlist().len(), 2);

        let remove = page
            .surface()
            .get(Region::Cart)
            .and_then(|fragment| fragment.actions().first().copied())
            .ok_or("no remove control in cart")?;

        page.dispatch(remove)?;

        assert_eq!(page.cart().len(), 1);
        assert_eq!(page.wishlist().len(), 2);

        Ok(())
    }

    #[test]
    fn dispatching_an_unknown_product_errors() -> TestResult {
        let catalog = test_catalog()?;
        let mut page = StorePage::new(&catalog, MemorySurface::new());

        let result = page.dispatch(Action::Add(ListKind::Cart, ProductKey::default()));

        assert!(matches!(result, Err(StoreError::UnknownProduct(_))));
        assert!(page.cart().is_empty());
        assert_eq!(page.surface().replacements(Region::Cart), 0);

        Ok(())
    }

    #[test]
    fn rendering_an_empty_catalog_shows_no_cards() -> TestResult {
        let catalog = Catalog::new(USD);
        let mut page = StorePage::new(&catalog, MemorySurface::new());

        page.render_catalog(std::iter::empty())?;

        assert_eq!(page.surface().get(Region::Catalog), Some(&Fragment::Cards(vec![])));

        page.render_all()?;

        assert_eq!(page.surface().get(Region::Catalog), Some(&Fragment::Cards(vec![])));
        assert_eq!(page.surface().replacements(Region::Catalog), 2);

        Ok(())
    }

    #[test]
    fn products_from_another_catalog_are_rejected() -> TestResult {
        let catalog = test_catalog()?;
        let shirt = catalog.find("shirt").ok_or("missing shirt")?;

        let mut outlet = Catalog::new(USD);
        outlet.insert("boots", Product::new("Boots", Money::from_minor(9000, USD)))?;
        let boots = outlet.find("boots").ok_or("missing boots")?;

        let mut page = StorePage::new(&catalog, MemorySurface::new());

        page.add_to_cart(shirt)?;
        let result = page.add_to_cart(boots);

        assert!(matches!(result, Err(StoreError::UnknownProduct(key)) if key == boots.key()));
        assert_eq!(page.cart().len(), 1);
        assert_eq!(page.cart().quantity_of(shirt.key()), 1);
        assert_eq!(page.cart().formatted_total()?, "$20.00");
        assert_eq!(page.surface().replacements(Region::Cart), 1);

        Ok(())
    }

    #[test]
    fn surface_errors_propagate() -> TestResult {
        let catalog = test_catalog()?;
        let hat = catalog.find("hat").ok_or("missing hat")?;
        let mut surface = MockDisplaySurface::new();

        surface
            .expect_replace()
            .returning(|region, _| Err(SurfaceError::Io(region, io::Error::other("closed"))));

        let mut page = StorePage::new(&catalog, surface);

        let result = page.add_to_cart(hat);

        assert!(matches!(result, Err(StoreError::Surface(_))));
        assert_eq!(page.cart().len(), 1);

        Ok(())
    }

    #[test]
    fn supplied_lists_are_rendered_as_is() -> TestResult {
        let catalog = test_catalog()?;
        let shirt = catalog.find("shirt").ok_or("missing shirt")?;
        let mut cart = Cart::new(ListKind::Cart, USD);

        cart.add_items([shirt, shirt, shirt])?;

        let mut page = StorePage::with_lists(
            &catalog,
            cart,
            Cart::new(ListKind::Wishlist, USD),
            MemorySurface::new(),
        );

        page.render_cart()?;

        let summary = summary_in(page.surface(), Region::Cart)?;

        assert_eq!(summary.total, "$60.00");

        Ok(())
    }
}
