//! notekeep-frontmatter - YAML frontmatter for plain-text notes.
//!
//! Prepends a fixed-shape metadata block to every note in a folder that does
//! not already start with one:
//!
//! ```yaml
//! ---
//! layout: general
//! title: groceries.txt
//! categories: [personal]
//! tags: []
//! author: Michael Magistro
//! ---
//! ```
//!
//! A note that already starts with `---` is never touched again, so running
//! the injector repeatedly is safe.
//!
//! # Architecture
//!
//! ```text
//! notekeep-frontmatter/src/
//! ├── lib.rs     # Re-exports (this file)
//! ├── error.rs   # FrontmatterError
//! ├── block.rs   # FrontmatterBlock render/parse, delimiter detection
//! └── inject.rs  # inject_file / inject_folder, InjectReport
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod block;
mod error;
mod inject;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use block::{DELIMITER, FrontmatterBlock, extract_frontmatter, has_frontmatter};
pub use error::FrontmatterError;
pub use inject::{
    InjectFailure, InjectOptions, InjectOutcome, InjectReport, inject_file, inject_folder,
};
