//! Error types for frontmatter injection.

use thiserror::Error;

use notekeep_io::IoError;

/// Error types for frontmatter injection
#[derive(Error, Debug)]
pub enum FrontmatterError {
    /// Target folder does not exist
    #[error("folder does not exist: {0}")]
    FolderNotFound(String),
    /// Target path exists but is not a folder
    #[error("not a directory: {0}")]
    NotADirectory(String),
    /// Reading or writing a note failed
    #[error("{path}: {source}")]
    Io {
        /// Note that failed
        path: String,
        /// Underlying I/O failure
        #[source]
        source: IoError,
    },
}

impl FrontmatterError {
    pub(crate) fn io(path: &std::path::Path, source: IoError) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
