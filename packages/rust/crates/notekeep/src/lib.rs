//! notekeep - maintenance commands for plain-text note folders.
//!
//! The binary wires two independent tools to one layered configuration:
//!
//! - `notekeep frontmatter` ([`notekeep_frontmatter`]) prepends a YAML header
//!   to every note in a folder that does not have one yet.
//! - `notekeep imagecheck` ([`notekeep_imagecheck`]) checks pasted-image links
//!   against the images on disk and writes a tab-separated report.
//!
//! Settings come from built-in defaults, then a YAML file, then CLI flags. See
//! [`Settings::load`].

mod settings;

pub use settings::{
    CONFIG_ENV, FrontmatterSettings, ImageCheckSettings, Settings, SettingsError,
    default_config_path,
};
