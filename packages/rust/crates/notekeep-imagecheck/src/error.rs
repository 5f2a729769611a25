//! Error types for image reconciliation.

use thiserror::Error;

/// Error types for image reconciliation
#[derive(Error, Debug)]
pub enum ImageCheckError {
    /// Images directory is empty or not a single folder name
    #[error("images directory must be a single folder name, got {0:?}")]
    ImagesDir(String),
    /// Images directory name produced an unusable link pattern
    #[error("invalid image link pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// Report could not be written
    #[error("failed to write report {path}: {source}")]
    Report {
        /// Report path
        path: String,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },
}
