//! JPEG marker scanner.
//!
//! Walks the marker segments after SOI until a start-of-frame segment is
//! found, then reads `precision, height, width`. Only the bytes up to that
//! segment are consumed, so large files are never read in full.

use std::io::{self, Read};

use mediacatalog_common::Dimensions;

use super::be_u16;

const MARKER_PREFIX: u8 = 0xFF;
const SOI: u8 = 0xD8;
const EOI: u8 = 0xD9;
const SOS: u8 = 0xDA;
const TEM: u8 = 0x01;

/// Start-of-frame markers carry the frame dimensions. `C4` (DHT), `C8`
/// (JPG extension) and `CC` (DAC) share the range but are not frames.
fn is_start_of_frame(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC)
}

/// Markers that stand alone without a length field
fn is_standalone(marker: u8) -> bool {
    matches!(marker, SOI | TEM | 0xD0..=0xD7)
}

/// Extract JPEG dimensions, reading from the start of the file
pub fn dimensions<R: Read>(reader: &mut R) -> Option<Dimensions> {
    let mut soi = [0u8; 2];
    reader.read_exact(&mut soi).ok()?;
    if soi != [MARKER_PREFIX, SOI] {
        return None;
    }

    loop {
        let marker = next_marker(reader)?;

        if is_standalone(marker) {
            continue;
        }
        if marker == SOS || marker == EOI {
            // Entropy-coded data (or the end) before any frame header.
            return None;
        }

        let mut len = [0u8; 2];
        reader.read_exact(&mut len).ok()?;
        let length = u16::from_be_bytes(len);
        if length < 2 {
            return None;
        }
        let body_len = u64::from(length - 2);

        if is_start_of_frame(marker) {
            // precision (1), height (2), width (2)
            let mut frame = [0u8; 5];
            if body_len < frame.len() as u64 {
                return None;
            }
            reader.read_exact(&mut frame).ok()?;
            let height = be_u16(&frame, 1)?;
            let width = be_u16(&frame, 3)?;
            return Dimensions::new(u32::from(width), u32::from(height));
        }

        skip(reader, body_len)?;
    }
}

/// Advance to the next marker byte, tolerating fill bytes and stray data
/// between segments.
fn next_marker<R: Read>(reader: &mut R) -> Option<u8> {
    let mut byte = read_u8(reader)?;
    loop {
        while byte != MARKER_PREFIX {
            byte = read_u8(reader)?;
        }
        while byte == MARKER_PREFIX {
            byte = read_u8(reader)?;
        }
        // FF 00 is a stuffed data byte, not a marker.
        if byte != 0x00 {
            return Some(byte);
        }
        byte = read_u8(reader)?;
    }
}

fn read_u8<R: Read>(reader: &mut R) -> Option<u8> {
    let mut buf = [0u8; 1];
    reader.read_exact(&mut buf).ok()?;
    Some(buf[0])
}

fn skip<R: Read>(reader: &mut R, count: u64) -> Option<()> {
    let copied = io::copy(&mut reader.take(count), &mut io::sink()).ok()?;
    (copied == count).then_some(())
}
