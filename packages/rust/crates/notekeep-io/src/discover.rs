//! Flat note discovery.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IoError;

/// Whether `path` has one of `extensions` (case-insensitive, leading dot optional).
#[must_use]
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

/// List regular files directly inside `dir` whose extension matches.
///
/// Not recursive. Entries that cannot be read are skipped with a warning.
/// The result is sorted by path.
///
/// # Errors
///
/// `IoError::NotFound` if `dir` does not exist, `IoError::NotADirectory` if it
/// is a file, `IoError::System` if the listing itself fails.
pub fn list_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, IoError> {
    if !dir.exists() {
        return Err(IoError::NotFound(dir.display().to_string()));
    }
    if !dir.is_dir() {
        return Err(IoError::NotADirectory(dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && has_extension(&path, extensions) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
