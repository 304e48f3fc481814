use rustc_hash::FxHashMap;
use tracing::trace;

use crate::components::Fragment;

use super::{DisplaySurface, Region, SurfaceError};

/// Headless surface that keeps the latest fragment for each region.
#[derive(Debug, Default)]
pub struct MemorySurface {
    regions: FxHashMap<Region, Fragment>,
    replacements: FxHashMap<Region, usize>,
}

impl MemorySurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fragment currently shown in `region`.
    pub fn get(&self, region: Region) -> Option<&Fragment> {
        self.regions.get(&region)
    }

    /// How many times `region` has been replaced.
    pub fn replacements(&self, region: Region) -> usize {
        self.replacements.get(&region).copied().unwrap_or_default()
    }
}

impl DisplaySurface for MemorySurface {
    fn replace(&mut self, region: Region, fragment: Fragment) -> Result<(), SurfaceError> {
        trace!(region = %region, "replacing region");

        self.regions.insert(region, fragment);
        *self.replacements.entry(region).or_default() += 1;

        Ok(())
    }
}
