//! Error types for mediacatalog-probe

use std::path::PathBuf;

/// Errors that can occur while probing a file for its dimensions
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No sniffer exists for this file type
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The header was read but did not yield usable dimensions
    #[error("Could not determine {format} dimensions")]
    Undetermined {
        /// Format whose header was inspected
        format: &'static str,
    },

    /// A pluggable dimension source failed
    #[error("{name} failed: {source}")]
    Backend {
        /// Name of the source that failed
        name: &'static str,
        /// The underlying failure
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ProbeError {
    /// Create an Undetermined error.
    pub fn undetermined(format: &'static str) -> Self {
        Self::Undetermined { format }
    }

    /// Wrap a failure raised by a pluggable source.
    pub fn backend(
        name: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Backend {
            name,
            source: source.into(),
        }
    }
}

/// Result alias for probing operations
pub type Result<T> = std::result::Result<T, ProbeError>;
