//! Header sniffers for the image formats we can size without a decoder.
//!
//! Each submodule inspects the first bytes of a file and returns the stored
//! width and height, or `None` when the header is missing, truncated or
//! otherwise unusable. Sniffers never fail loudly; [`sniff_file`] is the only
//! place that turns a `None` into an error value.

pub mod bmp;
pub mod gif;
pub mod jpeg;
pub mod png;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use mediacatalog_common::paths::lower_extension;
use mediacatalog_common::Dimensions;

use crate::error::{ProbeError, Result};

/// Image formats with a built-in header sniffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// Graphics Interchange Format (87a and 89a)
    Gif,
    /// Windows / OS/2 bitmap
    Bmp,
    /// JPEG / JFIF / EXIF
    Jpeg,
}

impl ImageFormat {
    /// Pick a sniffer from a lower-case extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            "bmp" => Some(Self::Bmp),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Pick a sniffer from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        lower_extension(path).and_then(|ext| Self::from_extension(&ext))
    }

    /// Short name used in logs and errors
    pub fn name(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::Bmp => "BMP",
            Self::Jpeg => "JPEG",
        }
    }

    /// Run this format's sniffer over a reader positioned at the start of the file
    pub fn sniff<R: Read>(self, reader: &mut R) -> Option<Dimensions> {
        match self {
            Self::Png => png::dimensions(&read_header(reader, png::HEADER_LEN)?),
            Self::Gif => gif::dimensions(&read_header(reader, gif::HEADER_LEN)?),
            Self::Bmp => bmp::dimensions(&read_header(reader, bmp::HEADER_LEN)?),
            Self::Jpeg => jpeg::dimensions(reader),
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sniff the dimensions of an image file, choosing the sniffer by extension.
///
/// The file handle is dropped before returning on every path.
pub fn sniff_file(path: &Path) -> Result<Dimensions> {
    let format = ImageFormat::from_path(path).ok_or_else(|| {
        ProbeError::UnsupportedFormat(
            lower_extension(path).unwrap_or_else(|| "<none>".to_string()),
        )
    })?;

    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProbeError::FileNotFound(path.to_path_buf())
        } else {
            ProbeError::Io(e)
        }
    })?;

    let mut reader = BufReader::new(file);
    format
        .sniff(&mut reader)
        .ok_or_else(|| ProbeError::undetermined(format.name()))
}

/// Read up to `len` bytes; short files yield a short buffer, read errors yield `None`
fn read_header<R: Read>(reader: &mut R, len: usize) -> Option<Vec<u8>> {
    let mut buf = Vec::with_capacity(len);
    reader.take(len as u64).read_to_end(&mut buf).ok()?;
    Some(buf)
}

pub(crate) fn be_u16(data: &[u8], offset: usize) -> Option<u16> {
    let bytes = data.get(offset..offset + 2)?;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

pub(crate) fn le_u16(data: &[u8], offset: usize) -> Option<u16> {
    let bytes = data.get(offset..offset + 2)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

pub(crate) fn be_u32(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset + 4)?;
    Some(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

pub(crate) fn le_u32(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset + 4)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

pub(crate) fn le_i32(data: &[u8], offset: usize) -> Option<i32> {
    let bytes = data.get(offset..offset + 4)?;
    Some(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
