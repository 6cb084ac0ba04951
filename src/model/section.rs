//! Section-level types.

use serde::{Deserialize, Serialize};

/// A top-level labeled division of a narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Text before the first colon of the section (may be empty)
    pub title: String,

    /// Everything after the first colon, trimmed
    pub raw_body: String,
}

impl Section {
    /// Create a new section.
    pub fn new(title: impl Into<String>, raw_body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            raw_body: raw_body.into(),
        }
    }

    /// Create a section with no title, carrying the whole text as its body.
    pub fn untitled(raw_body: impl Into<String>) -> Self {
        Self::new(String::new(), raw_body)
    }

    /// Check if the section has a title.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Body lines that survive trimming, in source order.
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.raw_body
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}
