//! Narrative parsing module.

mod builder;
mod classifier;
mod cleanup;
mod narrative;
mod options;
mod splitter;

pub use builder::{build_node, build_outline};
pub use classifier::classify;
pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use narrative::NarrativeParser;
pub use options::ParseOptions;
pub use splitter::split;
