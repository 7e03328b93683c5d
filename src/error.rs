//! Error types for k2list.

use thiserror::Error;

/// Error type for k2list operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Download error
    #[error("download error: {0}")]
    Download(String),
}

/// Result type alias for k2list operations.
pub type Result<T> = std::result::Result<T, Error>;
