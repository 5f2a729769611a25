#![allow(clippy::doc_markdown)]

//! notekeep-io - Text note I/O for the notekeep tools
//!
//! Everything the injector and the reconciler need to touch the filesystem.
//!
//! # Features
//!
//! - **Bounded reads**: size limit and NULL-byte binary detection
//! - **Lossy decoding**: invalid UTF-8 never fails a read
//! - **Discovery**: flat, sorted, extension-filtered file listings
//! - **Paths**: `~` expansion and `/`-separated relative paths for reports
//!
//! # Architecture
//!
//! ```text
//! notekeep-io/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # IoError enum
//! ├── text.rs     # read_text(_strict) / write_text / decode_text
//! ├── discover.rs # list_files, has_extension
//! └── paths.rs    # expand_home, relative_slash_path, folder_label
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use notekeep_io::{list_files, read_text, DEFAULT_MAX_BYTES};
//!
//! for note in list_files(folder, &["txt".to_string()])? {
//!     let content = read_text(&note, DEFAULT_MAX_BYTES)?;
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod discover;
mod error;
mod paths;
mod text;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use discover::{has_extension, list_files};
pub use error::IoError;
pub use paths::{expand_home, folder_label, relative_slash_path};
pub use text::{
    DEFAULT_MAX_BYTES, decode_text, looks_binary, read_text, read_text_strict, write_text,
};
