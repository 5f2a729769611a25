//! Folder-level frontmatter injection.

use std::path::{Path, PathBuf};

use serde::Serialize;

use notekeep_io::{DEFAULT_MAX_BYTES, IoError, list_files, read_text_strict, write_text};

use crate::block::{FrontmatterBlock, has_frontmatter};
use crate::error::FrontmatterError;

/// Fields and file selection for one injection run.
#[derive(Debug, Clone)]
pub struct InjectOptions {
    /// Category written into `categories: [...]`.
    pub category: String,
    /// Layout name.
    pub layout: String,
    /// Author name.
    pub author: String,
    /// Tags written into `tags: [...]` (empty by default).
    pub tags: Vec<String>,
    /// Note extensions to process (case-insensitive).
    pub extensions: Vec<String>,
    /// Per-file read limit.
    pub max_bytes: u64,
}

impl Default for InjectOptions {
    fn default() -> Self {
        Self {
            category: "personal".to_string(),
            layout: "general".to_string(),
            author: "Michael Magistro".to_string(),
            tags: Vec::new(),
            extensions: vec!["txt".to_string()],
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl InjectOptions {
    /// Block for a note with the given file name.
    #[must_use]
    pub fn block_for(&self, file_name: &str) -> FrontmatterBlock {
        FrontmatterBlock {
            layout: self.layout.clone(),
            title: file_name.to_string(),
            categories: vec![self.category.clone()],
            tags: self.tags.clone(),
            author: self.author.clone(),
        }
    }
}

/// What happened to a single note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InjectOutcome {
    /// Block was prepended and the file rewritten.
    Injected,
    /// File already started with the delimiter; left untouched.
    AlreadyPresent,
}

/// A note that could not be read or written.
#[derive(Debug, Clone, Serialize)]
pub struct InjectFailure {
    /// Note path.
    pub path: PathBuf,
    /// Rendered error.
    pub error: String,
}

/// Counts for one folder run. Failures are also counted as skipped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InjectReport {
    /// Folder that was processed.
    pub folder: PathBuf,
    /// Notes found with a matching extension.
    pub total: usize,
    /// Notes that received a block.
    pub processed: usize,
    /// Notes left untouched (already annotated or failed).
    pub skipped: usize,
    /// Notes that failed to read or write.
    pub failures: Vec<InjectFailure>,
}

/// Add frontmatter to a single note unless it already has some.
///
/// The title is the note's full file name, extension included.
///
/// # Errors
///
/// `FrontmatterError::Io` if the note cannot be read as UTF-8 text or cannot
/// be written back.
pub fn inject_file(
    path: &Path,
    options: &InjectOptions,
) -> Result<InjectOutcome, FrontmatterError> {
    let content =
        read_text_strict(path, options.max_bytes).map_err(|err| FrontmatterError::io(path, err))?;

    if has_frontmatter(&content) {
        return Ok(InjectOutcome::AlreadyPresent);
    }

    let title = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let updated = options.block_for(&title).prepend_to(&content);
    write_text(path, &updated).map_err(|err| FrontmatterError::io(path, err))?;
    Ok(InjectOutcome::Injected)
}

/// Add frontmatter to every matching note directly inside `folder`.
///
/// A failure on one note is logged and counted as a skip; the remaining notes
/// are still processed.
///
/// # Errors
///
/// Only folder-level problems are errors: the folder is missing, is not a
/// directory, or cannot be listed.
pub fn inject_folder(
    folder: &Path,
    options: &InjectOptions,
) -> Result<InjectReport, FrontmatterError> {
    let notes = list_files(folder, &options.extensions).map_err(|err| match err {
        IoError::NotFound(path) => FrontmatterError::FolderNotFound(path),
        IoError::NotADirectory(path) => FrontmatterError::NotADirectory(path),
        other => FrontmatterError::io(folder, other),
    })?;

    let mut report = InjectReport {
        folder: folder.to_path_buf(),
        total: notes.len(),
        ..InjectReport::default()
    };

    if notes.is_empty() {
        tracing::info!(
            folder = %folder.display(),
            extensions = ?options.extensions,
            "no matching notes found"
        );
        return Ok(report);
    }
    tracing::info!(
        folder = %folder.display(),
        category = %options.category,
        notes = notes.len(),
        "adding frontmatter"
    );

    for note in &notes {
        match inject_file(note, options) {
            Ok(InjectOutcome::Injected) => {
                tracing::info!(note = %note.display(), "added frontmatter");
                report.processed += 1;
            }
            Ok(InjectOutcome::AlreadyPresent) => {
                tracing::info!(note = %note.display(), "skipping, frontmatter already exists");
                report.skipped += 1;
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping note");
                report.skipped += 1;
                report.failures.push(InjectFailure {
                    path: note.clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    tracing::info!(
        processed = report.processed,
        skipped = report.skipped,
        "frontmatter pass complete"
    );
    Ok(report)
}
