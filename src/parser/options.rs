//! Parsing options and configuration.

use super::{CleanupOptions, CleanupPreset};

/// Options for parsing narratives.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Pre-pass cleanup applied before splitting (None = literal input)
    pub cleanup: Option<CleanupOptions>,

    /// Whether batch parsing may use parallel processing
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup_preset(mut self, preset: CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            cleanup: None,
            parallel: true,
        }
    }
}
