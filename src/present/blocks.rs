//! Renderable display blocks.

use crate::model::{Category, ClassifiedLine, Outline, OutlineNode};
use serde::Serialize;

/// One renderable UI block per outline section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayBlock {
    /// Section title
    pub title: String,

    /// Resolved category
    pub category: Category,

    /// Category label for display
    pub label: &'static str,

    /// Icon identifier
    pub icon: &'static str,

    /// Accent color name
    pub accent: &'static str,

    /// One row per outline item
    pub rows: Vec<DisplayRow>,
}

impl DisplayBlock {
    /// Map an outline node to a display block.
    pub fn from_node(node: &OutlineNode) -> Self {
        Self {
            title: node.title.clone(),
            category: node.category,
            label: node.category.label(),
            icon: node.category.icon(),
            accent: node.category.accent(),
            rows: node.items.iter().map(DisplayRow::from).collect(),
        }
    }
}

/// A single UI row inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayRow {
    /// Enumerated row with its ordinal badge
    Enumerated {
        /// Ordinal as written in the narrative
        ordinal: String,
        /// Row text
        text: String,
    },

    /// Bulleted row
    Bulleted {
        /// Row text
        text: String,
    },

    /// Paragraph row
    Paragraph {
        /// Row text
        text: String,
    },
}

impl From<&ClassifiedLine> for DisplayRow {
    fn from(line: &ClassifiedLine) -> Self {
        match line {
            ClassifiedLine::Numbered { ordinal, text } => DisplayRow::Enumerated {
                ordinal: ordinal.clone(),
                text: text.clone(),
            },
            ClassifiedLine::Bullet { text } => DisplayRow::Bulleted { text: text.clone() },
            ClassifiedLine::Plain { text } => DisplayRow::Paragraph { text: text.clone() },
        }
    }
}

/// Map an outline to display blocks, one per section, in order.
pub fn present(outline: &Outline) -> Vec<DisplayBlock> {
    outline.iter().map(DisplayBlock::from_node).collect()
}
