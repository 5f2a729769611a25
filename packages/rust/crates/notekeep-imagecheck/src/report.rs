//! Tab-separated report.
//!
//! ```text
//! Folder  File  Image  Status
//! <one row per reference>
//!
//! Image Path  Status
//! <one row per asset>
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::ImageCheckError;
use crate::types::Reconciliation;

const REFERENCE_HEADER: [&str; 4] = ["Folder", "File", "Image", "Status"];
const ASSET_HEADER: [&str; 2] = ["Image Path", "Status"];

/// Tabs and line breaks inside a field would shift columns or rows.
fn clean_field(field: &str) -> String {
    field.replace(['\t', '\r', '\n'], " ")
}

fn push_row(out: &mut String, fields: &[&str]) {
    let row: Vec<String> = fields.iter().map(|field| clean_field(field)).collect();
    let _ = writeln!(out, "{}", row.join("\t"));
}

/// Render both tables, separated by one empty row.
#[must_use]
pub fn render_report(result: &Reconciliation) -> String {
    let mut out = String::new();

    push_row(&mut out, &REFERENCE_HEADER);
    for record in &result.references {
        push_row(
            &mut out,
            &[
                record.folder.as_str(),
                record.file.as_str(),
                record.image.as_str(),
                record.status.as_str(),
            ],
        );
    }

    out.push('\n');

    push_row(&mut out, &ASSET_HEADER);
    for asset in &result.assets {
        push_row(&mut out, &[asset.path.as_str(), asset.status.as_str()]);
    }

    out
}

/// Write the report to `path`, creating its parent directory if needed.
///
/// # Errors
///
/// `ImageCheckError::Report` if the directory or file cannot be written.
pub fn write_report(path: &Path, result: &Reconciliation) -> Result<(), ImageCheckError> {
    let report_err = |source: std::io::Error| ImageCheckError::Report {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(report_err)?;
    }
    fs::write(path, render_report(result)).map_err(report_err)?;

    tracing::info!(
        report = %path.display(),
        references = result.references.len(),
        assets = result.assets.len(),
        "report written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AssetRecord, AssetStatus, ReferenceRecord, ReferenceStatus};

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render_report(&Reconciliation::default()),
            "Folder\tFile\tImage\tStatus\n\nImage Path\tStatus\n"
        );
    }

    #[test]
    fn test_render_rows() {
        let result = Reconciliation {
            references: vec![
                ReferenceRecord {
                    folder: "notes".to_string(),
                    file: "sub/note.txt".to_string(),
                    image: "a.png".to_string(),
                    status: ReferenceStatus::Found,
                },
                ReferenceRecord::folder_not_found("gone".to_string()),
            ],
            assets: vec![AssetRecord {
                path: "/n/imagepaste/b.png".to_string(),
                status: AssetStatus::Orphaned,
            }],
        };

        assert_eq!(
            render_report(&result),
            "Folder\tFile\tImage\tStatus\n\
             notes\tsub/note.txt\ta.png\tFound\n\
             gone\t-\t-\tFolderNotFound\n\
             \n\
             Image Path\tStatus\n\
             /n/imagepaste/b.png\torphaned\n"
        );
    }

    #[test]
    fn test_clean_field() {
        assert_eq!(clean_field("a\tb\nc"), "a b c");
    }
}
