//! Catalog

use std::{ops::Deref, ptr};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use slotmap::SlotMap;
use thiserror::Error;

use crate::products::{Product, ProductKey};

/// Errors raised while building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A product's currency differs from the catalog currency
    /// (handle, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// A product with this handle has already been inserted.
    #[error("Duplicate product handle: {0}")]
    DuplicateHandle(String),
}

/// A product borrowed from a catalog together with its key.
#[derive(Debug, Clone, Copy)]
pub struct ProductRef<'a> {
    key: ProductKey,
    product: &'a Product,
}

impl<'a> ProductRef<'a> {
    /// Returns the product key.
    pub fn key(&self) -> ProductKey {
        self.key
    }

    /// Returns the borrowed product.
    pub fn product(&self) -> &'a Product {
        self.product
    }
}

impl Deref for ProductRef<'_> {
    type Target = Product;

    fn deref(&self) -> &Self::Target {
        self.product
    }
}

/// Ordered product catalog.
///
/// Products are stored in a [`SlotMap`] so every product gets a stable [`ProductKey`],
/// which is what carts use to tell products apart. Insertion order is kept for display.
#[derive(Debug)]
pub struct Catalog {
    products: SlotMap<ProductKey, Product>,
    order: Vec<ProductKey>,
    handles: FxHashMap<String, ProductKey>,
    currency: &'static Currency,
}

impl Catalog {
    /// Create an empty catalog priced in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            products: SlotMap::with_key(),
            order: Vec::new(),
            handles: FxHashMap::default(),
            currency,
        }
    }

    /// Insert a product under a unique handle.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::CurrencyMismatch`]: the product is priced in another currency.
    /// - [`CatalogError::DuplicateHandle`]: the handle is already taken.
    pub fn insert(
        &mut self,
        handle: impl Into<String>,
        product: Product,
    ) -> Result<ProductKey, CatalogError> {
        let handle = handle.into();
        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CatalogError::CurrencyMismatch(
                handle,
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if self.handles.contains_key(&handle) {
            return Err(CatalogError::DuplicateHandle(handle));
        }

        let key = self.products.insert(product);

        self.order.push(key);
        self.handles.insert(handle, key);

        Ok(key)
    }

    /// Look up a product by key.
    pub fn get(&self, key: ProductKey) -> Option<ProductRef<'_>> {
        self.products
            .get(key)
            .map(|product| ProductRef { key, product })
    }

    /// Look up a product by its handle.
    pub fn find(&self, handle: &str) -> Option<ProductRef<'_>> {
        self.handles.get(handle).and_then(|key| self.get(*key))
    }

    /// Check that `product` was borrowed from this catalog.
    ///
    /// Keys handed out by different catalogs can be equal, so the product itself is
    /// compared as well as the key.
    pub fn contains(&self, product: ProductRef<'_>) -> bool {
        self.products
            .get(product.key())
            .is_some_and(|owned| ptr::eq(owned, product.product()))
    }

    /// Iterate over products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ProductRef<'_>> {
        self.order.iter().filter_map(|key| self.get(*key))
    }

    /// Get the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Get the currency of the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
