//! Rendering module for converting outlines to various output formats.

mod json;
mod markdown;
mod options;
mod result;
mod text;

pub use json::{blocks_to_json, to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::RenderOptions;
pub use result::{OutlineStats, RenderResult};
pub use text::to_text;
