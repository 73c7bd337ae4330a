//! Fatal errors for a catalog run.
//!
//! Anything recoverable per file is absorbed by the scanner; only these reach
//! the binary, which maps them to process exit codes.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("root directory does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("specified path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to write manifest {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CatalogError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::RootNotFound(_) => 2,
            Self::NotADirectory(_) => 3,
            Self::Write { .. } | Self::Serialize(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
