//! Outline assembly from split sections.

use crate::model::{Outline, OutlineNode, Section};
use crate::present::CategoryMap;
use log::debug;

use super::classify;

/// Build a typed outline from sections.
///
/// One node per section, in order. Each node's items are the section's
/// non-blank body lines, classified top to bottom, so `items.len()` always
/// equals the number of non-blank body lines.
pub fn build_outline(sections: &[Section], categories: &CategoryMap) -> Outline {
    let mut outline = Outline::new();
    for section in sections {
        outline.add_node(build_node(section, categories));
    }

    debug!(
        "built outline with {} sections and {} items",
        outline.len(),
        outline.item_count()
    );
    outline
}

/// Build a single outline node from a section.
pub fn build_node(section: &Section, categories: &CategoryMap) -> OutlineNode {
    let mut node = OutlineNode::new(section.title.clone(), categories.resolve(&section.title));
    for line in section.body_lines() {
        node.add_item(classify(line));
    }
    node
}
