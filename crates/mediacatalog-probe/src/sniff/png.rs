//! PNG header sniffer.
//!
//! Layout: 8-byte signature, then the IHDR chunk (length, `IHDR`, width,
//! height) with both dimensions as big-endian `u32`.

use mediacatalog_common::Dimensions;

use super::be_u32;

/// PNG file signature
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Bytes needed to reach the end of the IHDR height field
pub const HEADER_LEN: usize = 24;

const IHDR: &[u8; 4] = b"IHDR";
const WIDTH_OFFSET: usize = 16;
const HEIGHT_OFFSET: usize = 20;

/// Extract PNG dimensions from the first bytes of a file
pub fn dimensions(data: &[u8]) -> Option<Dimensions> {
    if data.get(..SIGNATURE.len())? != SIGNATURE {
        return None;
    }
    if data.get(12..16)? != IHDR {
        return None;
    }

    let width = be_u32(data, WIDTH_OFFSET)?;
    let height = be_u32(data, HEIGHT_OFFSET)?;
    Dimensions::new(width, height)
}
