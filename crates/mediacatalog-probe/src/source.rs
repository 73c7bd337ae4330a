//! The [`DimensionSource`] trait defining the interface for dimension probing.

use std::path::Path;

use mediacatalog_common::Dimensions;

use crate::error::Result;

/// Something that can report the pixel dimensions of a media file.
///
/// Implementations must be safe to share across threads (`Send + Sync`).
pub trait DimensionSource: Send + Sync {
    /// Human-readable name identifying this source.
    fn name(&self) -> &'static str;

    /// Check whether this source should be asked about the given file.
    ///
    /// Typically checks the file extension. A return value of `true` does not
    /// guarantee that [`DimensionSource::dimensions`] will succeed.
    fn supports(&self, path: &Path) -> bool;

    /// Report the width and height of the file at `path`.
    fn dimensions(&self, path: &Path) -> Result<Dimensions>;
}
