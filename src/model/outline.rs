//! Outline-level types.

use super::{Category, ClassifiedLine};
use serde::{Deserialize, Serialize};

/// A structured narrative: one node per section, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    /// Sections in document order
    pub nodes: Vec<OutlineNode>,
}

impl Outline {
    /// Create a new empty outline.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a node to the outline.
    pub fn add_node(&mut self, node: OutlineNode) {
        self.nodes.push(node);
    }

    /// Get the number of sections.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the outline has no sections.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the sections.
    pub fn iter(&self) -> std::slice::Iter<'_, OutlineNode> {
        self.nodes.iter()
    }

    /// Get the first section with the given title.
    pub fn get(&self, title: &str) -> Option<&OutlineNode> {
        self.nodes.iter().find(|node| node.title == title)
    }

    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.nodes.iter().map(|node| node.items.len()).sum()
    }

    /// Get plain text content of the entire outline, markers stripped.
    pub fn plain_text(&self) -> String {
        self.nodes
            .iter()
            .map(|node| node.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a OutlineNode;
    type IntoIter = std::slice::Iter<'a, OutlineNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// A single section of the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    /// Section title, verbatim from the splitter
    pub title: String,

    /// Display category resolved from the title
    pub category: Category,

    /// Classified body lines, in source order
    pub items: Vec<ClassifiedLine>,
}

impl OutlineNode {
    /// Create a new node with no items.
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            category,
            items: Vec::new(),
        }
    }

    /// Add an item to the node.
    pub fn add_item(&mut self, item: ClassifiedLine) {
        self.items.push(item);
    }

    /// Check if the node has neither title nor items.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.items.is_empty()
    }

    /// Get plain text content of the node.
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.items.len() + 1);
        if !self.title.is_empty() {
            lines.push(self.title.as_str());
        }
        lines.extend(self.items.iter().map(ClassifiedLine::text));
        lines.join("\n")
    }
}
