//! GIF header sniffer.
//!
//! The logical screen descriptor follows the 6-byte version string and
//! stores width then height as little-endian `u16`.

use mediacatalog_common::Dimensions;

use super::le_u16;

/// Bytes needed to reach the end of the logical screen height
pub const HEADER_LEN: usize = 10;

const SIGNATURES: [&[u8; 6]; 2] = [b"GIF87a", b"GIF89a"];

/// Extract GIF dimensions from the first bytes of a file
pub fn dimensions(data: &[u8]) -> Option<Dimensions> {
    let signature = data.get(..6)?;
    if !SIGNATURES.iter().any(|sig| sig.as_slice() == signature) {
        return None;
    }

    let width = le_u16(data, 6)?;
    let height = le_u16(data, 8)?;
    Dimensions::new(u32::from(width), u32::from(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(version: &[u8; 6], width: u16, height: u16) -> Vec<u8> {
        let mut data = version.to_vec();
        data.extend_from_slice(&width.to_le_bytes());
        data.extend_from_slice(&height.to_le_bytes());
        data.extend_from_slice(&[0xF7, 0x00, 0x00]);
        data
    }

    #[test]
    fn test_gif_both_versions() {
        let dims = dimensions(&header(b"GIF89a", 320, 200)).unwrap();
        assert_eq!((dims.width, dims.height), (320, 200));

        let dims = dimensions(&header(b"GIF87a", 16, 600)).unwrap();
        assert_eq!((dims.width, dims.height), (16, 600));
    }

    #[test]
    fn test_gif_unknown_version() {
        assert!(dimensions(&header(b"GIF90a", 10, 10)).is_none());
        assert!(dimensions(b"PNG89a\x0a\x00\x0a\x00").is_none());
    }

    #[test]
    fn test_gif_truncated() {
        let data = header(b"GIF89a", 10, 10);
        assert!(dimensions(&data[..9]).is_none());
        assert!(dimensions(&data[..3]).is_none());
        assert!(dimensions(&[]).is_none());
    }
}
