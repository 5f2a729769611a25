//! Layered YAML settings.
//!
//! Order (later wins):
//! 1) Built-in defaults ([`Settings::default`])
//! 2) User file: `--conf FILE`, else `$NOTEKEEP_CONFIG`, else
//!    `<config dir>/notekeep/notekeep.yaml` when it exists
//! 3) CLI flags (applied by the binary)
//!
//! The user file is deep-merged as YAML, so a file that only sets
//! `imagecheck.report` keeps every other default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use thiserror::Error;

use notekeep_frontmatter::InjectOptions;
use notekeep_imagecheck::{DEFAULT_IMAGES_DIR, ReconcileOptions};
use notekeep_io::{DEFAULT_MAX_BYTES, expand_home};

/// Environment variable naming the user settings file.
pub const CONFIG_ENV: &str = "NOTEKEEP_CONFIG";

/// Settings loading failures.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// An explicitly requested settings file does not exist.
    #[error("settings file not found: {0}")]
    NotFound(String),
    /// Settings file could not be read.
    #[error("failed to read settings {path}: {source}")]
    Read {
        /// Settings file
        path: String,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },
    /// Settings file is not valid YAML or has wrongly typed keys.
    #[error("invalid settings {path}: {source}")]
    Parse {
        /// Settings file
        path: String,
        /// Underlying failure
        #[source]
        source: serde_yaml::Error,
    },
}

/// `frontmatter:` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontmatterSettings {
    /// Folder whose notes get a header. `~` is expanded.
    pub folder: String,
    /// Category written into `categories: [...]`.
    pub category: String,
    /// Layout name.
    pub layout: String,
    /// Author name.
    pub author: String,
    /// Tags written into `tags: [...]`.
    pub tags: Vec<String>,
    /// Note extensions to process.
    pub extensions: Vec<String>,
}

impl Default for FrontmatterSettings {
    fn default() -> Self {
        let options = InjectOptions::default();
        Self {
            folder: "~/Dropbox/notes_personal".to_string(),
            category: options.category,
            layout: options.layout,
            author: options.author,
            tags: options.tags,
            extensions: options.extensions,
        }
    }
}

impl FrontmatterSettings {
    /// Target folder with `~` expanded.
    #[must_use]
    pub fn folder_path(&self) -> PathBuf {
        expand_home(&self.folder)
    }

    /// Injection options for these settings.
    #[must_use]
    pub fn inject_options(&self, max_bytes: u64) -> InjectOptions {
        InjectOptions {
            category: self.category.clone(),
            layout: self.layout.clone(),
            author: self.author.clone(),
            tags: self.tags.clone(),
            extensions: self.extensions.clone(),
            max_bytes,
        }
    }
}

/// `imagecheck:` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageCheckSettings {
    /// Folders to reconcile, in report order. `~` is expanded.
    pub folders: Vec<String>,
    /// Images subfolder name.
    pub images_dir: String,
    /// Note extensions scanned for links.
    pub note_extensions: Vec<String>,
    /// Extensions listed as image assets.
    pub image_extensions: Vec<String>,
    /// Report file. Relative paths resolve against the working directory.
    pub report: String,
}

impl Default for ImageCheckSettings {
    fn default() -> Self {
        let options = ReconcileOptions::default();
        Self {
            folders: vec![
                "~/dropbox/notes_personal".to_string(),
                "~/dropbox/notes_work".to_string(),
                "~/dropbox/notes_crypto".to_string(),
            ],
            images_dir: DEFAULT_IMAGES_DIR.to_string(),
            note_extensions: options.note_extensions,
            image_extensions: options.image_extensions,
            report: "outputs/brokenimagelinks.txt".to_string(),
        }
    }
}

impl ImageCheckSettings {
    /// Configured folders with `~` expanded.
    #[must_use]
    pub fn folder_paths(&self) -> Vec<PathBuf> {
        self.folders.iter().map(|folder| expand_home(folder)).collect()
    }

    /// Report path with `~` expanded.
    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        expand_home(&self.report)
    }

    /// Reconciliation options for these settings.
    #[must_use]
    pub fn reconcile_options(&self, max_bytes: u64) -> ReconcileOptions {
        ReconcileOptions {
            images_dir: self.images_dir.clone(),
            note_extensions: self.note_extensions.clone(),
            image_extensions: self.image_extensions.clone(),
            max_bytes,
        }
    }
}

/// Full settings tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Largest note either tool will read, in bytes.
    pub max_file_bytes: u64,
    /// Frontmatter injector settings.
    pub frontmatter: FrontmatterSettings,
    /// Image reconciler settings.
    pub imagecheck: ImageCheckSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_BYTES,
            frontmatter: FrontmatterSettings::default(),
            imagecheck: ImageCheckSettings::default(),
        }
    }
}

/// `<config dir>/notekeep/notekeep.yaml`, if the platform has a config dir.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("notekeep").join("notekeep.yaml"))
}

fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                if let Some(existing) = base_map.get_mut(&key) {
                    deep_merge(existing, value);
                } else {
                    base_map.insert(key, value);
                }
            }
        }
        (base_value, overlay_value) => {
            *base_value = overlay_value;
        }
    }
}

impl Settings {
    /// Defaults overlaid with the YAML document `yaml`.
    ///
    /// `source` only labels errors.
    ///
    /// # Errors
    ///
    /// `SettingsError::Parse` if `yaml` is malformed or a key has the wrong type.
    pub fn from_yaml_str(yaml: &str, source: &str) -> Result<Self, SettingsError> {
        let parse_err = |source_err: serde_yaml::Error| SettingsError::Parse {
            path: source.to_string(),
            source: source_err,
        };

        let overlay: Value = serde_yaml::from_str(yaml).map_err(parse_err)?;
        let mut merged = serde_yaml::to_value(Self::default()).map_err(parse_err)?;
        deep_merge(&mut merged, overlay);
        serde_yaml::from_value(merged).map_err(parse_err)
    }

    /// Defaults overlaid with the settings file at `path`.
    ///
    /// # Errors
    ///
    /// `SettingsError::NotFound`, `Read` or `Parse`.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let label = path.display().to_string();
        if !path.exists() {
            return Err(SettingsError::NotFound(label));
        }
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: label.clone(),
            source,
        })?;
        Self::from_yaml_str(&content, &label)
    }

    /// Resolve and load settings.
    ///
    /// `explicit` (from `--conf`) and `$NOTEKEEP_CONFIG` must point at an
    /// existing file. The default per-user file is optional.
    ///
    /// # Errors
    ///
    /// Any [`SettingsError`] from a file that must exist or that exists but is
    /// unreadable or malformed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(raw) = std::env::var(CONFIG_ENV) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                return Self::from_file(&expand_home(trimmed));
            }
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                tracing::debug!("no user settings file, using defaults");
                Ok(Self::default())
            }
        }
    }
}
