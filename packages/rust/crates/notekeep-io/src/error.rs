//! Error types for note I/O.

use thiserror::Error;

/// Failure modes when reading, writing or listing notes.
#[derive(Error, Debug)]
pub enum IoError {
    /// Path does not exist (or its metadata cannot be read).
    #[error("not found: {0}")]
    NotFound(String),

    /// File exceeds the read limit.
    #[error("file too large: {0} bytes (limit: {1})")]
    TooLarge(u64, u64),

    /// File contains NULL bytes in its first block.
    #[error("binary file detected")]
    BinaryFile,

    /// Content is not valid UTF-8 and the caller asked for a strict read.
    #[error("invalid UTF-8 in {0}")]
    Encoding(String),

    /// Path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Low-level I/O error from std::io.
    #[error("IO error: {0}")]
    System(#[from] std::io::Error),
}
