//! Common error types used throughout mediacatalog.
//!
//! Library crates wrap their own failures; this type covers the cases shared
//! between them.

use std::path::PathBuf;

/// Common error type for mediacatalog.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A path was expected to live under the scan root but does not.
    #[error("{} is not under {}", path.display(), root.display())]
    NotUnderRoot {
        /// The offending path.
        path: PathBuf,
        /// The root it was compared against.
        root: PathBuf,
    },

    /// A path component is not valid UTF-8 and cannot be written as a filename.
    #[error("file name is not valid UTF-8: {}", .0.display())]
    NonUtf8Name(PathBuf),
}

impl Error {
    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new NotUnderRoot error.
    pub fn not_under_root(path: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self::NotUnderRoot {
            path: path.into(),
            root: root.into(),
        }
    }

    /// Create a new NonUtf8Name error.
    pub fn non_utf8_name(path: impl Into<PathBuf>) -> Self {
        Self::NonUtf8Name(path.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
