//! Core type definitions for media files, their dimensions and orientation.
//!
//! Enums that reach the manifest are serialized in lowercase, matching what
//! existing `list.json` consumers expect.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of media file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image (png, jpeg, gif, ...).
    Image,
    /// Video container (mp4, mkv, webm, ...).
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// Pixel dimensions of an image or of the first video stream.
///
/// Width and height are either both known or the whole value is absent:
/// callers carry `Option<Dimensions>` and `None` means "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Build dimensions, rejecting a zero width or height.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Orientation label written to the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Wider than tall.
    Landscape,
    /// Taller than wide (and, under the default policy, square).
    Portrait,
    /// Equal sides. Only emitted when [`SquarePolicy::Square`] is selected.
    Square,
    /// Dimensions could not be determined.
    Unknown,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Landscape => write!(f, "landscape"),
            Self::Portrait => write!(f, "portrait"),
            Self::Square => write!(f, "square"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// How files with equal width and height are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SquarePolicy {
    /// Square files are reported as portrait.
    #[default]
    Portrait,
    /// Square files are reported as landscape.
    Landscape,
    /// Square files keep their own label.
    Square,
}

impl SquarePolicy {
    /// The orientation a square file receives under this policy.
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Portrait => Orientation::Portrait,
            Self::Landscape => Orientation::Landscape,
            Self::Square => Orientation::Square,
        }
    }
}

impl FromStr for SquarePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            "square" => Ok(Self::Square),
            other => Err(Error::invalid_input(format!(
                "unknown square policy '{other}' (expected portrait, landscape or square)"
            ))),
        }
    }
}

/// One manifest entry.
///
/// `filename` is relative to the scan root and always uses `/` separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub filename: String,
    pub orientation: Orientation,
}

impl MediaRecord {
    pub fn new(filename: impl Into<String>, orientation: Orientation) -> Self {
        Self {
            filename: filename.into(),
            orientation,
        }
    }
}
