//! Mediacatalog-Common: Shared types, constants, and utilities.
//!
//! This crate provides common functionality used across mediacatalog:
//!
//! - **Core Types**: media kinds, pixel dimensions, orientation labels and
//!   the records written to the manifest
//! - **Path Utilities**: Functions to detect media kinds by extension
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use mediacatalog_common::{Dimensions, MediaKind};
//! use mediacatalog_common::paths::media_kind;
//! use std::path::Path;
//!
//! assert_eq!(media_kind(Path::new("holiday.JPG")), Some(MediaKind::Image));
//! assert_eq!(media_kind(Path::new("notes.txt")), None);
//!
//! // Zero-sized dimensions are never constructed.
//! assert!(Dimensions::new(1920, 1080).is_some());
//! assert!(Dimensions::new(0, 1080).is_none());
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
