//! Rendering options and configuration.

/// Options for rendering outlines.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Markdown heading level for section titles (1-6)
    pub heading_level: u8,

    /// Character to use for bullet markers
    pub list_marker: char,

    /// Emit the resolved category under each section title
    pub include_category: bool,

    /// Escape special Markdown characters
    pub escape_special_chars: bool,

    /// Collect outline statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading level for section titles.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level.clamp(1, 6);
        self
    }

    /// Set the bullet marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable the category line under each title.
    pub fn with_category(mut self, include: bool) -> Self {
        self.include_category = include;
        self
    }

    /// Enable or disable Markdown escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading_level: 2,
            list_marker: '-',
            include_category: false,
            escape_special_chars: true,
            collect_stats: false,
        }
    }
}
