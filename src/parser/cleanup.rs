//! Opt-in cleanup pass for generated narrative text.
//!
//! Language models drift between formatting conventions from one response to
//! the next: Windows line endings, decomposed Unicode, `•` or `*` bullets
//! instead of `-`, Markdown emphasis around section titles. The pipeline folds
//! those variants back onto the plain conventions the splitter and classifier
//! expect. It never drops words, only markup.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Minimal cleanup: Unicode NFC and line endings only
    Minimal,
    /// Standard cleanup: minimal plus bullet and emphasis normalization
    #[default]
    Standard,
}

/// Options for narrative cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Convert `\r\n` and lone `\r` to `\n`
    pub normalize_line_endings: bool,

    /// Rewrite alternative bullet glyphs (•, *, ·, –, —) at line start as `-`
    pub standardize_bullets: bool,

    /// Remove Markdown emphasis markers (`**`, `__`)
    pub strip_emphasis: bool,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            normalize_line_endings: true,
            standardize_bullets: false,
            strip_emphasis: false,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            normalize_line_endings: true,
            standardize_bullets: true,
            strip_emphasis: true,
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Narrative cleanup pipeline.
#[derive(Debug, Clone)]
pub struct CleanupPipeline {
    options: CleanupOptions,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self { options }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Process text through the cleanup pipeline.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.normalize_line_endings {
            result = result.replace("\r\n", "\n").replace('\r', "\n");
        }

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        // Emphasis first so "* **Access**" still reads as a bullet afterwards
        if self.options.strip_emphasis {
            result = emphasis_marker().replace_all(&result, "").into_owned();
        }

        if self.options.standardize_bullets {
            result = bullet_glyph().replace_all(&result, "${1}- ").into_owned();
        }

        result
    }
}

fn emphasis_marker() -> &'static Regex {
    static EMPHASIS_RE: OnceLock<Regex> = OnceLock::new();
    EMPHASIS_RE.get_or_init(|| Regex::new(r"\*\*|__").unwrap())
}

fn bullet_glyph() -> &'static Regex {
    static BULLET_RE: OnceLock<Regex> = OnceLock::new();
    BULLET_RE.get_or_init(|| Regex::new(r"(?m)^([ \t]*)[•*·–—▪►][ \t]+").unwrap())
}
