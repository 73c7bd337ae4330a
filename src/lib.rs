//! mediacatalog - orientation manifest builder for media folders
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod error;
pub mod manifest;
pub mod scanner;

pub use error::CatalogError;
pub use manifest::{write_manifest, MANIFEST_NAME};
pub use scanner::{resolve_root, Catalog, CatalogBuilder, ScanOptions};
