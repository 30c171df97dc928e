//! Error types for latview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for latview operations.
pub type Result<T> = std::result::Result<T, LatviewError>;

/// Errors that can occur in latview.
#[derive(Debug, Error)]
pub enum LatviewError {
    /// Remove was requested on an empty sample series.
    #[error("no samples to remove")]
    NoSamples,

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
