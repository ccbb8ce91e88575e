//! Scan error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when starting a scan
///
/// Only startup validation fails the scan as a whole; read failures on
/// individual directories during the walk are reported to the error sink
/// and recovered locally.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist
    #[error("Directory not found: {0}")]
    RootNotFound(PathBuf),

    /// The scan root exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// IO error while validating the scan root
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;
