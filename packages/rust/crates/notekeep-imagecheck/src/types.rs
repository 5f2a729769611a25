//! Reconciliation records and summary counts.

use std::fmt;

use serde::Serialize;

/// Placeholder for the file and image columns of a sentinel record.
pub const NO_VALUE: &str = "-";

/// Outcome of checking one image link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReferenceStatus {
    /// Linked image exists in the folder's images subfolder.
    Found,
    /// Linked image does not exist.
    Missing,
    /// Sentinel: the configured folder itself does not exist.
    FolderNotFound,
}

impl ReferenceStatus {
    /// Label written to the report.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Found => "Found",
            Self::Missing => "Missing",
            Self::FolderNotFound => "FolderNotFound",
        }
    }
}

impl fmt::Display for ReferenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an image file on disk is linked from any note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    /// Some note in some scanned folder links to this file name.
    Referenced,
    /// No note links to it.
    Orphaned,
}

impl AssetStatus {
    /// Label written to the report.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Referenced => "referenced",
            Self::Orphaned => "orphaned",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One image link found in a note (or a missing-folder sentinel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceRecord {
    /// Last path component of the configured folder.
    pub folder: String,
    /// Note path relative to the folder, `/`-separated.
    pub file: String,
    /// Referenced image file name.
    pub image: String,
    /// Check result.
    pub status: ReferenceStatus,
}

impl ReferenceRecord {
    /// The single record emitted for a configured folder that does not exist.
    #[must_use]
    pub fn folder_not_found(folder: String) -> Self {
        Self {
            folder,
            file: NO_VALUE.to_string(),
            image: NO_VALUE.to_string(),
            status: ReferenceStatus::FolderNotFound,
        }
    }

    /// Whether this is a missing-folder sentinel rather than a real link.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.status == ReferenceStatus::FolderNotFound
    }
}

/// One image file found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRecord {
    /// Full path of the image file.
    pub path: String,
    /// Link status.
    pub status: AssetStatus,
}

/// Aggregate counts printed after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileSummary {
    /// Image links checked (sentinels excluded).
    pub total_references: usize,
    /// Links whose image exists.
    pub found: usize,
    /// Links whose image does not exist.
    pub missing: usize,
    /// Configured folders that do not exist.
    pub missing_folders: usize,
    /// Image files on disk.
    pub total_assets: usize,
    /// Image files linked from some note.
    pub referenced: usize,
    /// Image files no note links to.
    pub orphaned: usize,
}

/// Both record sets of a run. They are only combined positionally in the report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Reconciliation {
    /// Per-link records, in folder order then walk order.
    pub references: Vec<ReferenceRecord>,
    /// Per-file records, in folder order then name order.
    pub assets: Vec<AssetRecord>,
}

impl Reconciliation {
    /// Count statuses across both record sets.
    #[must_use]
    pub fn summary(&self) -> ReconcileSummary {
        let mut summary = ReconcileSummary::default();
        for record in &self.references {
            match record.status {
                ReferenceStatus::Found => summary.found += 1,
                ReferenceStatus::Missing => summary.missing += 1,
                ReferenceStatus::FolderNotFound => summary.missing_folders += 1,
            }
        }
        summary.total_references = summary.found + summary.missing;

        for asset in &self.assets {
            match asset.status {
                AssetStatus::Referenced => summary.referenced += 1,
                AssetStatus::Orphaned => summary.orphaned += 1,
            }
        }
        summary.total_assets = self.assets.len();
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(status: ReferenceStatus) -> ReferenceRecord {
        ReferenceRecord {
            folder: "notes".to_string(),
            file: "a.txt".to_string(),
            image: "a.png".to_string(),
            status,
        }
    }

    #[test]
    fn test_summary_counts() {
        let result = Reconciliation {
            references: vec![
                reference(ReferenceStatus::Found),
                reference(ReferenceStatus::Missing),
                reference(ReferenceStatus::Missing),
                ReferenceRecord::folder_not_found("gone".to_string()),
            ],
            assets: vec![
                AssetRecord {
                    path: "notes/imagepaste/a.png".to_string(),
                    status: AssetStatus::Referenced,
                },
                AssetRecord {
                    path: "notes/imagepaste/b.png".to_string(),
                    status: AssetStatus::Orphaned,
                },
            ],
        };

        assert_eq!(
            result.summary(),
            ReconcileSummary {
                total_references: 3,
                found: 1,
                missing: 2,
                missing_folders: 1,
                total_assets: 2,
                referenced: 1,
                orphaned: 1,
            }
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ReferenceStatus::Found.to_string(), "Found");
        assert_eq!(ReferenceStatus::FolderNotFound.to_string(), "FolderNotFound");
        assert_eq!(AssetStatus::Orphaned.to_string(), "orphaned");
    }

    #[test]
    fn test_sentinel_shape() {
        let sentinel = ReferenceRecord::folder_not_found("notes_work".to_string());
        assert!(sentinel.is_sentinel());
        assert_eq!(sentinel.file, NO_VALUE);
        assert_eq!(sentinel.image, NO_VALUE);
    }
}
