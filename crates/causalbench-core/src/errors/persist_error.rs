//! Snapshot persistence errors.

use std::path::PathBuf;

use super::error_code::{self, BenchErrorCode};

/// Errors from writing or reading result snapshots.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Snapshot not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Snapshot already exists and overwriting is disabled: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("Snapshot serialization failed for {path}: {message}")]
    Serialization { path: PathBuf, message: String },
}

impl BenchErrorCode for PersistError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyExists { .. } => error_code::SNAPSHOT_EXISTS,
            _ => error_code::PERSIST_ERROR,
        }
    }
}
