//! Frontmatter block rendering and parsing.

use serde::{Deserialize, Serialize};

/// Opening and closing line of a frontmatter block.
pub const DELIMITER: &str = "---";

/// Whether `content` already carries frontmatter.
///
/// Only the very first bytes are checked, with no whitespace trimming: a note
/// whose first three characters are `---` is treated as already annotated.
#[must_use]
pub fn has_frontmatter(content: &str) -> bool {
    content.starts_with(DELIMITER)
}

/// Extract the YAML between the opening and closing delimiters.
///
/// Returns `None` when the content does not start with a delimiter line or the
/// block is never closed.
///
/// # Examples
///
/// ```ignore
/// let yaml = extract_frontmatter("---\ntitle: a.txt\n---\n\nbody").unwrap();
/// assert_eq!(yaml, "title: a.txt\n");
/// ```
#[must_use]
pub fn extract_frontmatter(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(DELIMITER)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

/// Metadata header prepended to a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontmatterBlock {
    /// Site layout name.
    pub layout: String,
    /// Note title; the injector uses the full filename.
    pub title: String,
    /// Category list, rendered inline.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Tag list, rendered inline.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Author name.
    pub author: String,
}

fn inline_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

impl FrontmatterBlock {
    /// Render the block, including both delimiters and one trailing blank line.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{DELIMITER}\nlayout: {}\ntitle: {}\ncategories: {}\ntags: {}\nauthor: {}\n{DELIMITER}\n\n",
            self.layout,
            self.title,
            inline_list(&self.categories),
            inline_list(&self.tags),
            self.author,
        )
    }

    /// Prepend the rendered block to `content`.
    #[must_use]
    pub fn prepend_to(&self, content: &str) -> String {
        let mut out = self.render();
        out.push_str(content);
        out
    }

    /// Parse the frontmatter of `content` back into a block.
    ///
    /// Returns `None` if there is no block or it does not have the expected
    /// fields.
    #[must_use]
    pub fn parse(content: &str) -> Option<Self> {
        serde_yaml::from_str(extract_frontmatter(content)?).ok()
    }
}
