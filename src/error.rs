//! Error types for the collection pipeline
//!
//! Only the failures that stop a run before any copy is attempted are
//! represented here. Per-entry walk errors and per-file copy errors are
//! reported where they happen and never surface as a `CollectorError`.

use std::path::PathBuf;

use crate::constants::{ERROR_CREATE_DESTINATION, ERROR_NOT_A_DIRECTORY, ERROR_PATHS_REQUIRED};

/// Fatal errors raised while preparing a collection run
#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    #[error("{}", ERROR_PATHS_REQUIRED)]
    MissingPaths,

    #[error("{}: {}", ERROR_NOT_A_DIRECTORY, .0.display())]
    NotADirectory(PathBuf),

    #[error("{}: {}: {cause}", ERROR_CREATE_DESTINATION, .path.display())]
    CreateDestination { path: PathBuf, cause: anyhow::Error },
}

/// Result type for collection operations
pub type Result<T> = std::result::Result<T, CollectorError>;
