//! notekeep-imagecheck - Pasted-image reconciliation for note folders.
//!
//! Each configured folder holds notes and an images subfolder (`imagepaste/`
//! by default). Notes embed images as `![alt](imagepaste/name.png)`.
//!
//! A run produces two independent record sets:
//!
//! - **references**: one row per image link found in a note, `Found` when the
//!   file exists in that folder's images subfolder, `Missing` otherwise. A
//!   configured folder that does not exist yields one `FolderNotFound` row.
//! - **assets**: one row per image file on disk, `referenced` when any note in
//!   any folder links to its file name, `orphaned` otherwise.
//!
//! Both are written to one tab-separated report.
//!
//! # Architecture
//!
//! ```text
//! notekeep-imagecheck/src/
//! ├── lib.rs        # Re-exports (this file)
//! ├── error.rs      # ImageCheckError
//! ├── refs.rs       # ImageRefPattern (regex extraction)
//! ├── types.rs      # records, statuses, summary
//! ├── reconcile.rs  # folder walk, existence checks, orphan detection
//! └── report.rs     # TSV rendering and writing
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use notekeep_imagecheck::{ReconcileOptions, reconcile, write_report};
//!
//! let result = reconcile(&folders, &ReconcileOptions::default())?;
//! write_report(Path::new("outputs/brokenimagelinks.txt"), &result)?;
//! println!("{:?}", result.summary());
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
mod reconcile;
mod refs;
mod report;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::ImageCheckError;
pub use reconcile::{ReconcileOptions, list_assets, reconcile, scan_folder};
pub use refs::{DEFAULT_IMAGES_DIR, ImageRefPattern};
pub use report::{render_report, write_report};
pub use types::{
    AssetRecord, AssetStatus, NO_VALUE, ReconcileSummary, Reconciliation, ReferenceRecord,
    ReferenceStatus,
};
