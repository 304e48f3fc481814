//! Utils
//!
//! Command line arguments for the `storefront` binary.

use std::{path::PathBuf, str::FromStr};

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::{cart::ListKind, catalog::Catalog, store::Action};

/// Errors parsing or resolving a scripted action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    /// The action is not `<verb>:<product>`.
    #[error("expected <verb>:<product>, got {0:?}")]
    Malformed(String),

    /// The verb is not one of the known verbs.
    #[error("unknown verb {0:?}; expected buy, save, remove-cart or remove-wishlist")]
    UnknownVerb(String),

    /// The product key is not in the catalog.
    #[error("unknown product {0:?}")]
    UnknownProduct(String),
}

/// Arguments for the storefront binary
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Render a catalog, cart and wishlist")]
pub struct StorefrontArgs {
    /// Directory containing `products/` and `lists/` fixture folders
    #[clap(long, env = "STOREFRONT_FIXTURES", default_value = "./fixtures")]
    pub fixtures: PathBuf,

    /// Fixture set to load
    #[clap(short, long, default_value = "apparel")]
    pub set: String,

    /// Log output format
    #[clap(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Actions to replay in order, e.g. `buy:shirt save:hat remove-cart:shirt`
    pub actions: Vec<ScriptedAction>,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human readable, one line per event
    Compact,

    /// One JSON object per event
    Json,
}

/// What a scripted action does to a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Add one unit.
    Add(ListKind),

    /// Remove the whole line.
    Remove(ListKind),
}

/// An action given on the command line, naming its product by fixture key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedAction {
    /// What to do
    pub verb: Verb,

    /// Product fixture key
    pub product: String,
}

impl ScriptedAction {
    /// Resolve the product key against `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::UnknownProduct`] if the catalog has no such product.
    pub fn resolve(&self, catalog: &Catalog) -> Result<Action, ScriptError> {
        let key = catalog
            .find(&self.product)
            .map(|product| product.key())
            .ok_or_else(|| ScriptError::UnknownProduct(self.product.clone()))?;

        Ok(match self.verb {
            Verb::Add(list) => Action::Add(list, key),
            Verb::Remove(list) => Action::Remove(list, key),
        })
    }
}

impl FromStr for ScriptedAction {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, product) = s
            .split_once(':')
            .filter(|(_, product)| !product.is_empty())
            .ok_or_else(|| ScriptError::Malformed(s.to_string()))?;

        let verb = match verb {
            "buy" => Verb::Add(ListKind::Cart),
            "save" => Verb::Add(ListKind::Wishlist),
            "remove-cart" => Verb::Remove(ListKind::Cart),
            "remove-wishlist" => Verb::Remove(ListKind::Wishlist),
            other => return Err(ScriptError::UnknownVerb(other.to_string())),
        };

        Ok(Self {
            verb,
            product: product.to_string(),
        })
    }
}
