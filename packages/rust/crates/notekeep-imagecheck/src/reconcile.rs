//! Folder walk, existence checks and orphan detection.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use notekeep_io::{
    DEFAULT_MAX_BYTES, folder_label, has_extension, list_files, read_text, relative_slash_path,
};

use crate::error::ImageCheckError;
use crate::refs::{DEFAULT_IMAGES_DIR, ImageRefPattern};
use crate::types::{AssetRecord, AssetStatus, Reconciliation, ReferenceRecord, ReferenceStatus};

/// What to scan and which files count as notes and images.
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// Images subfolder name, both on disk and in links.
    pub images_dir: String,
    /// Extensions of notes to scan for links.
    pub note_extensions: Vec<String>,
    /// Extensions of files listed as image assets.
    pub image_extensions: Vec<String>,
    /// Per-note read limit.
    pub max_bytes: u64,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            images_dir: DEFAULT_IMAGES_DIR.to_string(),
            note_extensions: vec!["txt".to_string()],
            image_extensions: ["png", "jpg", "jpeg", "gif", "bmp", "webp", "svg"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

/// True when `name` is exactly one plain path component.
fn is_single_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn is_images_dir(entry: &DirEntry, images_dir: &str) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == images_dir
}

/// Collect the notes under `folder`, skipping every images subfolder.
fn collect_notes(folder: &Path, images_dir: &str, note_extensions: &[String]) -> Vec<PathBuf> {
    WalkDir::new(folder)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_images_dir(entry, images_dir))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(
                    folder = %folder.display(),
                    error = %err,
                    "skipping unreadable entry"
                );
                None
            }
        })
        .filter(|entry| {
            entry.file_type().is_file() && has_extension(entry.path(), note_extensions)
        })
        .map(DirEntry::into_path)
        .collect()
}

/// Check every image link in the notes under `folder`.
///
/// Returns one record per link occurrence. If `folder` does not exist the
/// result is exactly one `FolderNotFound` sentinel. Unreadable notes are
/// logged and contribute no records.
#[must_use]
pub fn scan_folder(
    folder: &Path,
    pattern: &ImageRefPattern,
    options: &ReconcileOptions,
) -> Vec<ReferenceRecord> {
    let label = folder_label(folder);
    if !folder.is_dir() {
        tracing::warn!(folder = %folder.display(), "folder does not exist");
        return vec![ReferenceRecord::folder_not_found(label)];
    }

    tracing::info!(folder = %folder.display(), "scanning notes for image links");
    let images = folder.join(pattern.images_dir());
    let mut records = Vec::new();

    for note in collect_notes(folder, pattern.images_dir(), &options.note_extensions) {
        let content = match read_text(&note, options.max_bytes) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(note = %note.display(), error = %err, "failed to read note");
                continue;
            }
        };
        let file = relative_slash_path(&note, folder);

        for image in pattern.extract(&content) {
            let status = if is_single_name(&image) && images.join(&image).is_file() {
                ReferenceStatus::Found
            } else {
                ReferenceStatus::Missing
            };
            tracing::debug!("{file}: {image} -> {status}");
            records.push(ReferenceRecord {
                folder: label.clone(),
                file: file.clone(),
                image,
                status,
            });
        }
    }

    records
}

/// List the image files in `folder`'s images subfolder and mark each one
/// referenced or orphaned against `referenced` names.
///
/// A missing images subfolder yields no records.
#[must_use]
pub fn list_assets(
    folder: &Path,
    options: &ReconcileOptions,
    referenced: &HashSet<String>,
) -> Vec<AssetRecord> {
    let images = folder.join(&options.images_dir);
    let files = match list_files(&images, &options.image_extensions) {
        Ok(files) => files,
        Err(err) => {
            tracing::warn!(
                images = %images.display(),
                error = %err,
                "no images folder to check"
            );
            return Vec::new();
        }
    };

    files
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let status = if referenced.contains(&name) {
                AssetStatus::Referenced
            } else {
                AssetStatus::Orphaned
            };
            AssetRecord {
                path: path.display().to_string(),
                status,
            }
        })
        .collect()
}

/// Drop folders that resolve to one already listed, keeping the first.
fn unique_folders(folders: &[PathBuf]) -> Vec<&PathBuf> {
    let mut seen = HashSet::new();
    folders
        .iter()
        .filter(|folder| {
            let key = std::fs::canonicalize(folder).unwrap_or_else(|_| (*folder).clone());
            let fresh = seen.insert(key);
            if !fresh {
                tracing::debug!(folder = %folder.display(), "skipping repeated folder");
            }
            fresh
        })
        .collect()
}

/// Run both passes over `folders`.
///
/// Links are checked per folder first; orphan detection then matches every
/// image file against the names linked from any folder. A folder listed more
/// than once is scanned once.
///
/// # Errors
///
/// An images directory that is empty, spans several path components, or
/// cannot form a link pattern; folder and file problems become records or log
/// lines.
pub fn reconcile(
    folders: &[PathBuf],
    options: &ReconcileOptions,
) -> Result<Reconciliation, ImageCheckError> {
    if !is_single_name(&options.images_dir) {
        return Err(ImageCheckError::ImagesDir(options.images_dir.clone()));
    }
    let pattern = ImageRefPattern::new(&options.images_dir)?;
    let folders = unique_folders(folders);

    let mut result = Reconciliation::default();
    for folder in &folders {
        result.references.extend(scan_folder(folder, &pattern, options));
    }

    let referenced: HashSet<String> = result
        .references
        .iter()
        .filter(|record| !record.is_sentinel())
        .map(|record| record.image.clone())
        .collect();

    for folder in folders.iter().filter(|folder| folder.is_dir()) {
        result.assets.extend(list_assets(folder, options, &referenced));
    }

    let summary = result.summary();
    tracing::info!(
        found = summary.found,
        missing = summary.missing,
        missing_folders = summary.missing_folders,
        assets = summary.total_assets,
        orphaned = summary.orphaned,
        "reconciliation complete"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_name_accepts_plain_names() {
        assert!(is_single_name("a.png"));
        assert!(is_single_name("Screen Shot 2021.png"));
        assert!(is_single_name("imagepaste"));
    }

    #[test]
    fn test_single_name_rejects_paths() {
        assert!(!is_single_name(""));
        assert!(!is_single_name(".."));
        assert!(!is_single_name("../note.txt"));
        assert!(!is_single_name("assets/img"));
        assert!(!is_single_name("/etc/passwd"));
        assert!(!is_single_name("./a.png"));
    }
}
