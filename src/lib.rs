//! # narrative-outline
//!
//! Deterministic outline extraction for AI-generated healthcare narratives.
//!
//! A regional health analysis arrives as free-form text from a language
//! model. This library splits it into titled sections, classifies each body
//! line as a numbered step, bullet, or plain text, assigns every section a
//! display category, and renders the result as Markdown, plain text, JSON,
//! or UI-ready display blocks.
//!
//! ## Quick Start
//!
//! ```
//! use narrative_outline::{parse, render, Category};
//!
//! fn main() -> narrative_outline::Result<()> {
//!     let raw = "1. Key Health Challenges:\n- Diabetes is rising\n\n2. Recommendations:\n- Expand screening";
//!     let outline = parse(raw);
//!
//!     assert_eq!(outline.nodes[0].category, Category::Challenges);
//!
//!     let markdown = render::to_markdown(&outline, &render::RenderOptions::default())?;
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Total parsing**: every input string yields an outline, never an error
//! - **Order preserving**: sections and items keep document order
//! - **Injectable categories**: title → category table via [`CategoryMap`]
//! - **Drift cleanup**: optional normalization of bullets, emphasis, and Unicode
//! - **Response input**: narrative lookup in backend JSON bodies
//! - **Batch parsing**: many narratives in parallel with Rayon

pub mod error;
pub mod input;
pub mod model;
pub mod parser;
pub mod present;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use input::{narrative_from_json, narrative_from_value, NarrativeField};
pub use model::{Category, ClassifiedLine, Outline, OutlineNode, Section};
pub use parser::{
    build_outline, classify, split, CleanupOptions, CleanupPreset, NarrativeParser, ParseOptions,
};
pub use present::{present, CategoryMap, DisplayBlock, DisplayRow};
pub use render::{JsonFormat, OutlineStats, RenderOptions, RenderResult};

/// Parse a narrative with default options and the default category table.
///
/// # Example
///
/// ```
/// use narrative_outline::parse;
///
/// let outline = parse("1. Recommendations: Expand screening.");
/// assert_eq!(outline.nodes[0].title, "Recommendations");
/// ```
pub fn parse(raw: &str) -> Outline {
    NarrativeParser::new().parse(raw)
}

/// Parse a narrative with custom options and category table.
///
/// # Example
///
/// ```
/// use narrative_outline::{parse_with_options, Category, CategoryMap, CleanupPreset, ParseOptions};
///
/// let options = ParseOptions::new().with_cleanup_preset(CleanupPreset::Standard);
/// let categories = CategoryMap::new().with("Workforce", Category::Access);
/// let outline = parse_with_options("1. **Workforce:** • Shortages", options, categories);
/// assert_eq!(outline.nodes[0].category, Category::Access);
/// ```
pub fn parse_with_options(raw: &str, options: ParseOptions, categories: CategoryMap) -> Outline {
    NarrativeParser::with_options(options)
        .with_categories(categories)
        .parse(raw)
}

/// Parse the narrative embedded in a backend response body.
///
/// Returns `Ok(None)` when the body carries no narrative; fails only when the
/// body is not JSON.
pub fn parse_response(body: &str) -> Result<Option<Outline>> {
    Ok(narrative_from_json(body)?.map(|raw| parse(&raw)))
}

/// Parse many narratives in parallel. Output order matches input order.
pub fn parse_batch<S>(narratives: &[S]) -> Vec<Outline>
where
    S: AsRef<str> + Sync,
{
    NarrativeParser::new().parse_batch(narratives)
}

/// Convert a narrative to Markdown.
pub fn to_markdown(raw: &str) -> Result<String> {
    render::to_markdown(&parse(raw), &RenderOptions::default())
}

/// Convert a narrative to plain text.
pub fn to_text(raw: &str, options: &RenderOptions) -> Result<String> {
    render::to_text(&parse(raw), options)
}

/// Convert a narrative to JSON.
pub fn to_json(raw: &str, format: JsonFormat) -> Result<String> {
    render::to_json(&parse(raw), format)
}

/// Builder for parsing and rendering narratives.
///
/// # Example
///
/// ```
/// use narrative_outline::{Category, CleanupPreset, Outliner};
///
/// let markdown = Outliner::new()
///     .with_cleanup(CleanupPreset::Standard)
///     .with_category("Workforce", Category::Access)
///     .with_heading_level(3)
///     .parse("1. Workforce: - Nurse shortages")
///     .to_markdown()?;
/// assert!(markdown.starts_with("### Workforce"));
/// # Ok::<(), narrative_outline::Error>(())
/// ```
pub struct Outliner {
    parse_options: ParseOptions,
    render_options: RenderOptions,
    categories: CategoryMap,
}

impl Outliner {
    /// Create a new Outliner builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
            categories: CategoryMap::default(),
        }
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.parse_options = self.parse_options.with_cleanup_preset(preset);
        self
    }

    /// Disable parallel batch parsing.
    pub fn sequential(mut self) -> Self {
        self.parse_options = self.parse_options.sequential();
        self
    }

    /// Replace the category table.
    pub fn with_categories(mut self, categories: CategoryMap) -> Self {
        self.categories = categories;
        self
    }

    /// Add one title → category entry.
    pub fn with_category(mut self, title: impl Into<String>, category: Category) -> Self {
        self.categories.insert(title, category);
        self
    }

    /// Set the Markdown heading level for section titles.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.render_options = self.render_options.with_heading_level(level);
        self
    }

    /// Include the resolved category under each section title.
    pub fn with_category_labels(mut self) -> Self {
        self.render_options = self.render_options.with_category(true);
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    fn parser(&self) -> NarrativeParser {
        NarrativeParser::with_options(self.parse_options.clone())
            .with_categories(self.categories.clone())
    }

    /// Parse a narrative and return a result wrapper.
    pub fn parse(self, raw: &str) -> OutlinerResult {
        let outline = self.parser().parse(raw);
        OutlinerResult {
            outline,
            render_options: self.render_options,
        }
    }

    /// Parse the narrative embedded in a response body.
    pub fn parse_response(self, body: &str) -> Result<Option<OutlinerResult>> {
        Ok(narrative_from_json(body)?.map(|raw| self.parse(&raw)))
    }

    /// Parse many narratives, sharing this builder's configuration.
    pub fn parse_batch<S>(self, narratives: &[S]) -> Vec<OutlinerResult>
    where
        S: AsRef<str> + Sync,
    {
        let outlines = self.parser().parse_batch(narratives);
        outlines
            .into_iter()
            .map(|outline| OutlinerResult {
                outline,
                render_options: self.render_options.clone(),
            })
            .collect()
    }
}

impl Default for Outliner {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a narrative.
pub struct OutlinerResult {
    /// The parsed outline
    pub outline: Outline,
    /// Render options to use
    render_options: RenderOptions,
}

impl OutlinerResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.outline, &self.render_options)
    }

    /// Convert to Markdown with statistics.
    pub fn to_markdown_with_stats(&self) -> Result<RenderResult> {
        render::to_markdown_with_stats(&self.outline, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.outline, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.outline, format)
    }

    /// Map to display blocks.
    pub fn blocks(&self) -> Vec<DisplayBlock> {
        present(&self.outline)
    }

    /// Structural statistics.
    pub fn stats(&self) -> OutlineStats {
        OutlineStats::from_outline(&self.outline)
    }

    /// Get the outline.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outliner_builder() {
        let outliner = Outliner::new()
            .with_cleanup(CleanupPreset::Standard)
            .with_category_labels()
            .sequential();

        assert!(outliner.parse_options.cleanup.is_some());
        assert!(!outliner.parse_options.parallel);
        assert!(outliner.render_options.include_category);
    }

    #[test]
    fn test_outliner_default() {
        let outliner = Outliner::default();
        assert!(outliner.parse_options.cleanup.is_none());
        assert_eq!(outliner.categories, CategoryMap::new());
    }

    #[test]
    fn test_outliner_with_categories() {
        let outliner = Outliner::new()
            .with_categories(CategoryMap::empty())
            .with_category("Workforce", Category::Access);
        assert_eq!(outliner.categories.len(), 1);
    }

    #[test]
    fn test_parse_response_without_narrative() {
        assert!(parse_response(r#"{"msa_name": "Denver"}"#).unwrap().is_none());
        assert!(parse_response("<html>").is_err());
    }

    #[test]
    fn test_parse_response_with_narrative() {
        let body = r#"{"llm_analysis": {"analysis": "1. Priority Areas:\n- Screening"}}"#;
        let outline = parse_response(body).unwrap().unwrap();
        assert_eq!(outline.nodes[0].category, Category::Priorities);
        assert_eq!(outline.nodes[0].items, vec![ClassifiedLine::bullet("Screening")]);
    }

    #[test]
    fn test_outliner_result_outputs() {
        let result = Outliner::new().parse("1. Recommendations:\n- Act\n2. Other: words");
        assert_eq!(result.outline().len(), 2);
        assert_eq!(result.blocks()[0].icon, "lightbulb");
        assert_eq!(result.stats().uncategorized_count, 1);
        assert!(result.to_text().unwrap().contains("• Act"));
        assert!(result.to_json(JsonFormat::Compact).is_ok());
    }

    #[test]
    fn test_to_markdown_convenience() {
        let markdown = to_markdown("1. Recommendations: Expand screening.").unwrap();
        assert_eq!(markdown, "## Recommendations\n\nExpand screening.");
    }
}
