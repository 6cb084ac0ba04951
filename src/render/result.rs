//! Rendering result with statistics.

use crate::model::{ClassifiedLine, Outline, OutlineNode};
use serde::{Deserialize, Serialize};

/// Result of rendering an outline, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (Markdown, text, etc.)
    pub content: String,

    /// Outline statistics
    pub stats: OutlineStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: OutlineStats) -> Self {
        Self { content, stats }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            stats: OutlineStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics about an outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineStats {
    /// Number of sections
    pub section_count: u32,

    /// Number of numbered items
    pub numbered_count: u32,

    /// Number of bullet items
    pub bullet_count: u32,

    /// Number of plain text lines
    pub paragraph_count: u32,

    /// Sections that fell back to the default category
    pub uncategorized_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl OutlineStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect structural statistics for a whole outline.
    pub fn from_outline(outline: &Outline) -> Self {
        let mut stats = Self::new();
        for node in outline {
            stats.add_node(node);
        }
        stats
    }

    /// Count one section and its items.
    pub fn add_node(&mut self, node: &OutlineNode) {
        self.section_count += 1;
        if node.category.is_default() {
            self.uncategorized_count += 1;
        }
        for item in &node.items {
            self.add_item(item);
        }
    }

    /// Count one item.
    pub fn add_item(&mut self, item: &ClassifiedLine) {
        match item {
            ClassifiedLine::Numbered { .. } => self.numbered_count += 1,
            ClassifiedLine::Bullet { .. } => self.bullet_count += 1,
            ClassifiedLine::Plain { .. } => self.paragraph_count += 1,
        }
    }

    /// Total number of items.
    pub fn item_count(&self) -> u32 {
        self.numbered_count + self.bullet_count + self.paragraph_count
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &OutlineStats) {
        self.section_count += other.section_count;
        self.numbered_count += other.numbered_count;
        self.bullet_count += other.bullet_count;
        self.paragraph_count += other.paragraph_count;
        self.uncategorized_count += other.uncategorized_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn test_outline_stats_count_text() {
        let mut stats = OutlineStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_from_outline() {
        let mut outline = Outline::new();
        let mut node = OutlineNode::new("Recommendations", Category::Recommendations);
        node.add_item(ClassifiedLine::numbered("1", "a"));
        node.add_item(ClassifiedLine::bullet("b"));
        node.add_item(ClassifiedLine::bullet("c"));
        outline.add_node(node);
        outline.add_node(OutlineNode::new("Other", Category::Default));

        let stats = OutlineStats::from_outline(&outline);
        assert_eq!(stats.section_count, 2);
        assert_eq!(stats.numbered_count, 1);
        assert_eq!(stats.bullet_count, 2);
        assert_eq!(stats.uncategorized_count, 1);
        assert_eq!(stats.item_count(), 3);
    }

    #[test]
    fn test_outline_stats_merge() {
        let mut stats1 = OutlineStats::new();
        stats1.section_count = 5;
        stats1.bullet_count = 2;

        let stats2 = OutlineStats {
            section_count: 3,
            bullet_count: 1,
            paragraph_count: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.section_count, 8);
        assert_eq!(stats1.bullet_count, 3);
        assert_eq!(stats1.paragraph_count, 4);
    }

    #[test]
    fn test_render_result_content_only() {
        let result = RenderResult::content_only("## Hello".to_string());
        assert_eq!(result.content_len(), 8);
        assert_eq!(result.stats.section_count, 0);
    }
}
