//! BMP header sniffer.
//!
//! A 14-byte file header (`BM` ...) is followed by a DIB header whose first
//! field is its own size. `BITMAPINFOHEADER` and later store width and
//! height as little-endian `i32`, with a negative height meaning rows are
//! stored top-down. The OS/2 `BITMAPCOREHEADER` (12 bytes) uses `u16`s.

use mediacatalog_common::Dimensions;

use super::{le_i32, le_u16, le_u32};

/// Bytes needed to reach the end of the `BITMAPINFOHEADER` height field
pub const HEADER_LEN: usize = 26;

const DIB_SIZE_OFFSET: usize = 14;
const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
const CORE_HEADER_SIZE: u32 = 12;

/// Extract BMP dimensions from the first bytes of a file
pub fn dimensions(data: &[u8]) -> Option<Dimensions> {
    if data.get(..2)? != b"BM" {
        return None;
    }

    if le_u32(data, DIB_SIZE_OFFSET)? == CORE_HEADER_SIZE {
        let width = le_u16(data, WIDTH_OFFSET)?;
        let height = le_u16(data, WIDTH_OFFSET + 2)?;
        return Dimensions::new(u32::from(width), u32::from(height));
    }

    let width = le_i32(data, WIDTH_OFFSET)?;
    let height = le_i32(data, HEIGHT_OFFSET)?;
    if width <= 0 {
        return None;
    }
    // Top-down bitmaps store a negative height; orientation ignores the sign.
    Dimensions::new(width.unsigned_abs(), height.unsigned_abs())
}
