//! Narrative parser: cleanup, split, classify, build.

use crate::model::Outline;
use crate::present::CategoryMap;
use log::debug;
use rayon::prelude::*;

use super::{build_outline, split, CleanupPipeline, ParseOptions};

/// Narrative parser.
///
/// Holds the parse options and the category table; parsing itself is a pure
/// function of the input, so one parser can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct NarrativeParser {
    options: ParseOptions,
    categories: CategoryMap,
}

impl NarrativeParser {
    /// Create a parser with default options and the default category table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            categories: CategoryMap::default(),
        }
    }

    /// Replace the category table.
    pub fn with_categories(mut self, categories: CategoryMap) -> Self {
        self.categories = categories;
        self
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Get the category table.
    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    /// Parse a narrative into an outline.
    pub fn parse(&self, raw: &str) -> Outline {
        match self.options.cleanup {
            Some(ref cleanup) => {
                let cleaned = CleanupPipeline::new(cleanup.clone()).process(raw);
                self.parse_literal(&cleaned)
            }
            None => self.parse_literal(raw),
        }
    }

    /// Parse many narratives. Output order matches input order.
    pub fn parse_batch<S>(&self, narratives: &[S]) -> Vec<Outline>
    where
        S: AsRef<str> + Sync,
    {
        debug!(
            "parsing batch of {} narratives (parallel: {})",
            narratives.len(),
            self.options.parallel
        );

        if self.options.parallel {
            narratives.par_iter().map(|n| self.parse(n.as_ref())).collect()
        } else {
            narratives.iter().map(|n| self.parse(n.as_ref())).collect()
        }
    }

    fn parse_literal(&self, raw: &str) -> Outline {
        let sections = split(raw);
        build_outline(&sections, &self.categories)
    }
}
