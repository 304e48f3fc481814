//! Display surfaces
//!
//! The store never reaches into a global document. It is handed a [`DisplaySurface`] and
//! replaces whole [`Region`]s on it.

use std::{fmt, io};

#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::components::Fragment;

mod memory;
mod terminal;

pub use memory::MemorySurface;
pub use terminal::TerminalSurface;

/// Errors raised by a display surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// Writing the rendered region failed.
    #[error("failed to write region {0}: {1}")]
    Io(Region, #[source] io::Error),
}

/// Addressable areas of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Product cards.
    Catalog,

    /// Purchase cart summary.
    Cart,

    /// Wishlist summary.
    Wishlist,
}

impl Region {
    /// Stable selector for the region.
    pub fn selector(self) -> &'static str {
        match self {
            Region::Catalog => "#products",
            Region::Cart => "#cart",
            Region::Wishlist => "#wishlist",
        }
    }

    /// Heading shown above the region.
    pub fn title(self) -> &'static str {
        match self {
            Region::Catalog => "Products",
            Region::Cart => "Cart",
            Region::Wishlist => "Wishlist",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Somewhere fragments can be shown.
#[cfg_attr(test, automock)]
pub trait DisplaySurface {
    /// Replace everything in `region` with `fragment`.
    ///
    /// # Errors
    ///
    /// Returns a [`SurfaceError`] if the fragment could not be displayed.
    fn replace(&mut self, region: Region, fragment: Fragment) -> Result<(), SurfaceError>;
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for &mut S {
    fn replace(&mut self, region: Region, fragment: Fragment) -> Result<(), SurfaceError> {
        (**self).replace(region, fragment)
    }
}
