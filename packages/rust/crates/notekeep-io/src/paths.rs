use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` to the current user's home directory.
///
/// Paths without `~`, and `~user` forms, are returned unchanged. If the home
/// directory cannot be resolved the path is also returned unchanged.
#[must_use]
pub fn expand_home(raw: &str) -> PathBuf {
    let Some(stripped) = raw.strip_prefix('~') else {
        return PathBuf::from(raw);
    };
    if !(stripped.is_empty() || stripped.starts_with('/') || stripped.starts_with('\\')) {
        return PathBuf::from(raw);
    }
    match dirs::home_dir() {
        Some(home) => home.join(stripped.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(raw),
    }
}

/// Label used for a configured folder in reports: its last path component.
#[must_use]
pub fn folder_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Path of `path` relative to `root`, joined with `/` on every platform.
///
/// Falls back to the full path when `path` is not under `root`.
#[must_use]
pub fn relative_slash_path(path: &Path, root: &Path) -> String {
    let Ok(rel) = path.strip_prefix(root) else {
        return path.display().to_string();
    };
    rel.components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
