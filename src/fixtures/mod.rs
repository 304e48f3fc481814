//! Fixtures
//!
//! YAML catalog sets. `products/<name>.yml` lists the catalog in display order and the
//! optional `lists/<name>.yml` seeds the cart and wishlist with product keys.

use std::{fs, path::PathBuf};

use rusty_money::iso::USD;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::{Cart, ListKind},
    catalog::{Catalog, CatalogError, ProductRef},
    pricing::PricingError,
    products::Product,
};

pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// No products file loaded yet
    #[error("No products loaded yet")]
    NoProducts,

    /// Catalog construction error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// List seeding error
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Wrapper for list seeds in YAML
#[derive(Debug, Default, Deserialize)]
pub struct ListsFixture {
    /// Product keys to add to the cart, one unit per entry
    #[serde(default)]
    pub cart: Vec<String>,

    /// Product keys to add to the wishlist, one unit per entry
    #[serde(default)]
    pub wishlist: Vec<String>,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Catalog built from the products file
    catalog: Option<Catalog>,

    /// Seeds for the cart and wishlist
    lists: ListsFixture,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: None,
            lists: ListsFixture::default(),
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// The catalog currency is the file's `currency`, else the first product's, else USD.
    /// An empty product list yields an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, a price or currency is
    /// invalid, or products disagree on currency or reuse a key.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: products::ProductsFixture = serde_norway::from_str(&contents)?;

        let declared = fixture
            .currency
            .as_deref()
            .map(products::parse_currency)
            .transpose()?;

        let products = fixture
            .products
            .into_iter()
            .map(|product_fixture| -> Result<_, FixtureError> {
                let key = product_fixture.key.clone();

                Ok((key, Product::try_from(product_fixture)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let currency = declared
            .or_else(|| products.first().map(|(_, product)| product.price.currency()))
            .unwrap_or(USD);

        let catalog = self.catalog.get_or_insert_with(|| Catalog::new(currency));

        for (key, product) in products {
            catalog.insert(key, product)?;
        }

        debug!(
            path = %file_path.display(),
            products = catalog.len(),
            currency = catalog.currency().iso_alpha_code,
            "loaded products"
        );

        Ok(self)
    }

    /// Load cart and wishlist seeds from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a seed names a
    /// product that has not been loaded.
    pub fn load_lists(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("lists").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let lists: ListsFixture = serde_norway::from_str(&contents)?;

        let catalog = self.catalog()?;

        if let Some(missing) = lists
            .cart
            .iter()
            .chain(&lists.wishlist)
            .find(|key| catalog.find(key).is_none())
        {
            return Err(FixtureError::ProductNotFound(missing.clone()));
        }

        self.lists = lists;

        Ok(self)
    }

    /// Load a fixture set: products, plus list seeds when a lists file of the same name exists
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture.load_products(name)?;

        if fixture
            .base_path
            .join("lists")
            .join(format!("{name}.yml"))
            .is_file()
        {
            fixture.load_lists(name)?;
        }

        Ok(fixture)
    }

    /// Get the loaded catalog
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn catalog(&self) -> Result<&Catalog, FixtureError> {
        self.catalog.as_ref().ok_or(FixtureError::NoProducts)
    }

    /// Get a product by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, key: &str) -> Result<ProductRef<'_>, FixtureError> {
        self.catalog()?
            .find(key)
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Build a list holding the seeded products for `kind`
    ///
    /// # Errors
    ///
    /// Returns an error if no products are loaded or a seed is not in the catalog.
    pub fn list(&self, kind: ListKind) -> Result<Cart<'_>, FixtureError> {
        let catalog = self.catalog()?;

        let seeds = match kind {
            ListKind::Cart => &self.lists.cart,
            ListKind::Wishlist => &self.lists.wishlist,
        };

        let products = seeds
            .iter()
            .map(|key| self.product(key))
            .collect::<Result<Vec<_>, _>>()?;

        let mut list = Cart::new(kind, catalog.currency());
        list.add_items(products)?;

        Ok(list)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
