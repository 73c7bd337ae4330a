//! A composite source that delegates to multiple [`DimensionSource`] implementations.

use std::path::Path;

use mediacatalog_common::Dimensions;

use crate::error::{ProbeError, Result};
use crate::source::DimensionSource;

/// Tries each registered [`DimensionSource`] in order and returns the first
/// successful result.
///
/// This is how the optional decoder is layered in front of the built-in
/// header sniffers.
pub struct CompositeSource {
    sources: Vec<Box<dyn DimensionSource>>,
}

impl CompositeSource {
    /// Create a new `CompositeSource` from an ordered list of sources.
    pub fn new(sources: Vec<Box<dyn DimensionSource>>) -> Self {
        Self { sources }
    }

    /// Names of the registered sources, in the order they are tried.
    pub fn names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }
}

impl DimensionSource for CompositeSource {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn supports(&self, path: &Path) -> bool {
        self.sources.iter().any(|s| s.supports(path))
    }

    fn dimensions(&self, path: &Path) -> Result<Dimensions> {
        let mut last_err = None;

        for source in &self.sources {
            if !source.supports(path) {
                continue;
            }

            match source.dimensions(path) {
                Ok(dims) => return Ok(dims),
                Err(e) => {
                    tracing::debug!(
                        source = source.name(),
                        path = %path.display(),
                        error = %e,
                        "dimension source failed, trying next"
                    );
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| {
            ProbeError::UnsupportedFormat(format!(
                "no dimension source supports file: {}",
                path.display()
            ))
        }))
    }
}
