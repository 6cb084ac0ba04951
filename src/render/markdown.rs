//! Markdown rendering for outlines.

use crate::error::Result;
use crate::model::{ClassifiedLine, Outline, OutlineNode};

use super::{OutlineStats, RenderOptions, RenderResult};

/// Convert an outline to Markdown.
pub fn to_markdown(outline: &Outline, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(outline)
}

/// Convert an outline to Markdown with statistics.
pub fn to_markdown_with_stats(outline: &Outline, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render_with_stats(outline)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: OutlineStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: OutlineStats::new(),
        }
    }

    /// Render an outline to Markdown.
    pub fn render(mut self, outline: &Outline) -> Result<String> {
        self.render_internal(outline)
    }

    /// Render an outline to Markdown with statistics.
    pub fn render_with_stats(mut self, outline: &Outline) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(outline)?;

        // Words and characters of the item text, not of the markup
        self.stats.count_text(&outline.plain_text());

        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&mut self, outline: &Outline) -> Result<String> {
        let mut output = String::new();

        for node in outline {
            self.render_node(&mut output, node);
        }

        Ok(output.trim().to_string())
    }

    fn render_node(&mut self, output: &mut String, node: &OutlineNode) {
        if self.options.collect_stats {
            self.stats.add_node(node);
        }

        if !node.title.is_empty() {
            let prefix = "#".repeat(self.options.heading_level as usize);
            output.push_str(&prefix);
            output.push(' ');
            output.push_str(&self.escape(&fold_lines(&node.title)));
            output.push_str("\n\n");
        }

        if self.options.include_category {
            output.push_str(&format!("*{}*\n\n", node.category.label()));
        }

        let mut in_list = false;
        for item in &node.items {
            match item {
                ClassifiedLine::Numbered { ordinal, text } => {
                    output.push_str(&format!("{}. {}\n", ordinal, self.escape(text)));
                    in_list = true;
                }
                ClassifiedLine::Bullet { text } => {
                    output.push_str(&format!("{} {}\n", self.options.list_marker, self.escape(text)));
                    in_list = true;
                }
                ClassifiedLine::Plain { text } => {
                    if in_list {
                        output.push('\n');
                        in_list = false;
                    }
                    output.push_str(&self.escape(text));
                    output.push_str("\n\n");
                }
            }
        }

        if in_list {
            output.push('\n');
        }
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_block_start(&escape_markdown(text))
        } else {
            text.to_string()
        }
    }
}

/// Join a multi-line title into one line; an ATX heading cannot span lines.
fn fold_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape a leading block marker so the text stays a paragraph.
///
/// Covers ATX headings (`#`), blockquotes (`>`), `+`/`-` list markers, setext
/// underlines (`=`) and ordered list markers (`1.` or `1)` followed by
/// whitespace). Decimals such as `3.5` are left alone.
fn escape_block_start(text: &str) -> String {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        let rest = &text[digits..];
        let mut chars = rest.chars();
        let marker = chars.next();
        let after = chars.next();
        if matches!(marker, Some('.') | Some(')')) && after.map_or(true, char::is_whitespace) {
            return format!("{}\\{}", &text[..digits], rest);
        }
        return text.to_string();
    }

    match text.chars().next() {
        Some('#' | '>' | '+' | '-' | '=') => format!("\\{}", text),
        _ => text.to_string(),
    }
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as Markdown syntax.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn sample() -> Outline {
        let mut outline = Outline::new();
        let mut node = OutlineNode::new("Recommendations", Category::Recommendations);
        node.add_item(ClassifiedLine::plain("Start here."));
        node.add_item(ClassifiedLine::numbered("1", "Expand screening"));
        node.add_item(ClassifiedLine::bullet("Fund *clinics*"));
        node.add_item(ClassifiedLine::plain("Closing note"));
        outline.add_node(node);
        outline
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("Hello *world*"), "Hello \\*world\\*");
        assert_eq!(escape_markdown("[link]"), "\\[link\\]");
    }

    #[test]
    fn test_escape_block_start() {
        assert_eq!(escape_block_start("### Key Findings"), "\\### Key Findings");
        assert_eq!(escape_block_start("> quoted"), "\\> quoted");
        assert_eq!(escape_block_start("+ plus"), "\\+ plus");
        assert_eq!(escape_block_start("=== rule"), "\\=== rule");
        assert_eq!(escape_block_start("12) step"), "12\\) step");
        assert_eq!(escape_block_start("4."), "4\\.");
        assert_eq!(escape_block_start("3.5 years"), "3.5 years");
        assert_eq!(escape_block_start("Costs rose #2"), "Costs rose #2");
    }

    #[test]
    fn test_fold_lines() {
        assert_eq!(
            fold_lines("Summary for Denver\n  More prose here\n"),
            "Summary for Denver More prose here"
        );
        assert_eq!(fold_lines("Recommendations"), "Recommendations");
    }

    #[test]
    fn test_render_plain_block_markers_as_paragraphs() {
        let mut outline = Outline::new();
        let mut node = OutlineNode::new("Notes", Category::Default);
        node.add_item(ClassifiedLine::plain("# Not a heading"));
        node.add_item(ClassifiedLine::bullet("> not a quote"));
        outline.add_node(node);

        let result = to_markdown(&outline, &RenderOptions::new()).unwrap();
        assert_eq!(result, "## Notes\n\n\\# Not a heading\n\n- \\> not a quote");

        let raw = to_markdown(&outline, &RenderOptions::new().with_escaping(false)).unwrap();
        assert!(raw.contains("\n# Not a heading\n"));
    }

    #[test]
    fn test_render_outline() {
        let result = to_markdown(&sample(), &RenderOptions::new()).unwrap();
        assert_eq!(
            result,
            "## Recommendations\n\nStart here.\n\n1. Expand screening\n- Fund \\*clinics\\*\n\nClosing note"
        );
    }

    #[test]
    fn test_render_untitled_section() {
        let mut outline = Outline::new();
        let mut node = OutlineNode::new("", Category::Default);
        node.add_item(ClassifiedLine::plain("Just prose"));
        outline.add_node(node);

        let result = to_markdown(&outline, &RenderOptions::new()).unwrap();
        assert_eq!(result, "Just prose");
    }

    #[test]
    fn test_render_with_category() {
        let options = RenderOptions::new()
            .with_category(true)
            .with_heading_level(3)
            .with_escaping(false);
        let result = to_markdown(&sample(), &options).unwrap();
        assert!(result.starts_with("### Recommendations\n\n*Recommendations*\n\n"));
        assert!(result.contains("- Fund *clinics*"));
    }

    #[test]
    fn test_render_with_stats() {
        let result = to_markdown_with_stats(&sample(), &RenderOptions::new()).unwrap();
        assert_eq!(result.stats.section_count, 1);
        assert_eq!(result.stats.paragraph_count, 2);
        assert_eq!(result.stats.numbered_count, 1);
        assert_eq!(result.stats.bullet_count, 1);
        assert!(result.stats.word_count > 0);
    }
}
