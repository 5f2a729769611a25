//! Image link extraction.
//!
//! Pattern: `![alt](<images_dir>/<name>)`. The alt text may be empty and must
//! not contain `]`; the name runs up to the first `)`.

use regex::Regex;

/// Name of the images subfolder when none is configured.
pub const DEFAULT_IMAGES_DIR: &str = "imagepaste";

/// Compiled image-link matcher for one images directory name.
#[derive(Debug, Clone)]
pub struct ImageRefPattern {
    images_dir: String,
    regex: Regex,
}

impl ImageRefPattern {
    /// Build the matcher for links into `images_dir`.
    ///
    /// # Errors
    ///
    /// Returns the regex error if the escaped pattern still fails to compile.
    pub fn new(images_dir: &str) -> Result<Self, regex::Error> {
        let pattern = format!(r"!\[[^\]]*\]\({}/([^)]+)\)", regex::escape(images_dir));
        Ok(Self {
            images_dir: images_dir.to_string(),
            regex: Regex::new(&pattern)?,
        })
    }

    /// Images directory this matcher targets.
    #[must_use]
    pub fn images_dir(&self) -> &str {
        &self.images_dir
    }

    /// Every referenced image name in `content`, in order of appearance.
    ///
    /// Repeated links are kept; each occurrence becomes its own record.
    #[must_use]
    pub fn extract(&self, content: &str) -> Vec<String> {
        self.regex
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|name| name.as_str().to_string())
            .collect()
    }
}
