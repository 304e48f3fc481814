//! Storefront
//!
//! Storefront keeps a product catalog, a purchase cart and a wishlist on screen. Adding a
//! product that is already in a list bumps its quantity instead of adding a second line,
//! and every change re-renders the affected region from scratch through an injected
//! [`DisplaySurface`](surface::DisplaySurface).

pub mod cart;
pub mod catalog;
pub mod components;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod store;
pub mod surface;
pub mod utils;
