//! Error types for planning, execution and backup operations.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for decimation operations.
///
/// Only whole-operation failures surface here: a missing target, an
/// unreadable directory listing, a failed read or write of a document.
/// Per-file trash failures during a folder execution are tallied into
/// [`FolderStats::failed`](crate::FolderStats) instead and never abort
/// the batch.
#[derive(Debug, Error)]
pub enum DecimateError {
    /// Target path does not exist.
    #[error("Target not found: {0}")]
    NotFound(PathBuf),

    /// A folder operation was pointed at something that is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An I/O error occurred while reading or writing the target.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
