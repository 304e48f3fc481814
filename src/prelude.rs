//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, ListKind},
    catalog::{Catalog, CatalogError, ProductRef},
    components::{Card, Control, ControlName, Fragment, Summary, SummaryRow},
    fixtures::{Fixture, FixtureError},
    items::LineItem,
    prices::format_money,
    pricing::PricingError,
    products::{Product, ProductAttributes, ProductKey},
    store::{Action, StoreError, StorePage},
    surface::{DisplaySurface, MemorySurface, Region, SurfaceError, TerminalSurface},
};
