//! Shared fixtures for integration tests.
//!
//! Writers for the smallest byte sequences each header sniffer accepts, plus
//! a [`builder`] that never shells out to a real ffprobe.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use mediacatalog::scanner::{DimensionResolver, OrientationClassifier};
use mediacatalog::{CatalogBuilder, ScanOptions};
use mediacatalog_av::FfprobeSource;
use mediacatalog_common::SquarePolicy;
use mediacatalog_probe::HeaderSniffer;

/// ffprobe location that never exists.
pub const MISSING_FFPROBE: &str = "/nonexistent/mediacatalog-test/ffprobe";

pub fn png(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[8, 2, 0, 0, 0, 0, 0, 0, 0]);
    data
}

pub fn gif(width: u16, height: u16) -> Vec<u8> {
    let mut data = b"GIF89a".to_vec();
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&[0, 0, 0]);
    data
}

pub fn bmp(width: i32, height: i32) -> Vec<u8> {
    let mut data = b"BM".to_vec();
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(&40u32.to_le_bytes());
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&[1, 0, 24, 0]);
    data
}

pub fn jpeg(width: u16, height: u16) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];
    // APP0
    data.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x10]);
    data.extend_from_slice(b"JFIF\0\x01\x01\0\0\x01\0\x01\0\0");
    // SOF0: precision, height, width, one component
    data.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x0B, 8]);
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&[1, 1, 0x11, 0]);
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}

/// Write `bytes` to `root/rel`, creating parent directories.
pub fn write(root: &Path, rel: &str, bytes: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Catalog builder using only the header sniffers and an absent ffprobe.
pub fn builder(follow_symlinks: bool) -> CatalogBuilder {
    let resolver = DimensionResolver::new(
        Box::new(HeaderSniffer::new()),
        Box::new(FfprobeSource::new(
            PathBuf::from(MISSING_FFPROBE),
            Duration::from_secs(1),
        )),
    );
    CatalogBuilder::new(
        ScanOptions::with_defaults(follow_symlinks),
        resolver,
        OrientationClassifier::new(SquarePolicy::Portrait),
    )
}
