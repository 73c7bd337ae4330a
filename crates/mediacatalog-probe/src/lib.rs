//! # mediacatalog-probe
//!
//! Header-only image dimension probing.
//!
//! This crate extracts the pixel width and height of image files without
//! decoding them:
//!
//! - Built-in sniffers for PNG, GIF, BMP and JPEG (always available)
//! - An optional `image`-crate backed source (`image-decoder` feature)
//! - A [`DimensionSource`] trait so callers can layer sources, plus
//!   [`CompositeSource`] which tries them in order
//!
//! ## Example
//!
//! ```no_run
//! use mediacatalog_probe::{default_image_source, DimensionSource};
//! use std::path::Path;
//!
//! let source = default_image_source(true);
//! match source.dimensions(Path::new("holiday.jpg")) {
//!     Ok(dims) => println!("{}x{}", dims.width, dims.height),
//!     Err(e) => println!("unknown: {e}"),
//! }
//! ```

pub mod composite;
#[cfg(feature = "image-decoder")]
pub mod decoder;
pub mod error;
pub mod sniff;
pub mod sniffer;
pub mod source;

pub use composite::CompositeSource;
#[cfg(feature = "image-decoder")]
pub use decoder::ImageDecoder;
pub use error::{ProbeError, Result};
pub use sniff::{sniff_file, ImageFormat};
pub use sniffer::HeaderSniffer;
pub use source::DimensionSource;

/// Build the image source chain used by the catalog.
///
/// With `use_decoder` set and the `image-decoder` feature compiled in, the
/// `image` crate is asked first; the header sniffers are always last.
pub fn default_image_source(use_decoder: bool) -> CompositeSource {
    let mut sources: Vec<Box<dyn DimensionSource>> = Vec::new();

    #[cfg(feature = "image-decoder")]
    {
        if use_decoder {
            sources.push(Box::new(ImageDecoder::new()));
        }
    }

    #[cfg(not(feature = "image-decoder"))]
    {
        if use_decoder {
            tracing::debug!("image-decoder feature not compiled in, using header sniffers only");
        }
    }

    sources.push(Box::new(HeaderSniffer::new()));
    CompositeSource::new(sources)
}
