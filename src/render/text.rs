//! Plain text rendering for outlines.

use crate::error::Result;
use crate::model::{ClassifiedLine, Outline};

use super::RenderOptions;

/// Convert an outline to plain text.
///
/// Titles on their own line, numbered items as `N. text`, bullets with a `•`
/// marker, sections separated by a blank line.
pub fn to_text(outline: &Outline, options: &RenderOptions) -> Result<String> {
    let mut sections = Vec::with_capacity(outline.len());

    for node in outline {
        let mut lines = Vec::with_capacity(node.items.len() + 2);
        if !node.title.is_empty() {
            lines.push(node.title.clone());
        }
        if options.include_category {
            lines.push(format!("[{}]", node.category.label()));
        }
        for item in &node.items {
            lines.push(match item {
                ClassifiedLine::Numbered { ordinal, text } => format!("{}. {}", ordinal, text),
                ClassifiedLine::Bullet { text } => format!("• {}", text),
                ClassifiedLine::Plain { text } => text.clone(),
            });
        }
        if !lines.is_empty() {
            sections.push(lines.join("\n"));
        }
    }

    Ok(sections.join("\n\n").trim().to_string())
}
