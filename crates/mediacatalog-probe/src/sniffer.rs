//! [`DimensionSource`] backed by the built-in header sniffers.

use std::path::Path;

use mediacatalog_common::Dimensions;

use crate::error::Result;
use crate::sniff::{self, ImageFormat};
use crate::source::DimensionSource;

/// Reads PNG, GIF, BMP and JPEG headers directly. Always available.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderSniffer;

impl HeaderSniffer {
    /// Create a new `HeaderSniffer`.
    pub fn new() -> Self {
        Self
    }
}

impl DimensionSource for HeaderSniffer {
    fn name(&self) -> &'static str {
        "sniffer"
    }

    fn supports(&self, path: &Path) -> bool {
        ImageFormat::from_path(path).is_some()
    }

    fn dimensions(&self, path: &Path) -> Result<Dimensions> {
        sniff::sniff_file(path)
    }
}
