//! [`DimensionSource`] backed by the `image` crate.
//!
//! Only the header is decoded (`image::image_dimensions`), never the pixels.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use mediacatalog_common::paths::is_image_file;
use mediacatalog_common::Dimensions;

use crate::error::{ProbeError, Result};
use crate::source::DimensionSource;

/// Asks the general-purpose decoder for image dimensions.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageDecoder;

impl ImageDecoder {
    /// Create a new `ImageDecoder`.
    pub fn new() -> Self {
        Self
    }
}

impl DimensionSource for ImageDecoder {
    fn name(&self) -> &'static str {
        "image-decoder"
    }

    fn supports(&self, path: &Path) -> bool {
        is_image_file(path)
    }

    fn dimensions(&self, path: &Path) -> Result<Dimensions> {
        // A panicking decoder must not take the whole scan down with it.
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| image::image_dimensions(path)))
            .map_err(|_| ProbeError::backend(self.name(), "decoder panicked"))?;

        let (width, height) = outcome.map_err(|e| ProbeError::backend(self.name(), e))?;
        Dimensions::new(width, height).ok_or_else(|| ProbeError::undetermined("image"))
    }
}
