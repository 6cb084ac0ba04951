//! Line-level types.

use serde::{Deserialize, Serialize};

/// One body line after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifiedLine {
    /// A line that started with `<digits>. `
    Numbered {
        /// The leading digits, as written
        ordinal: String,
        /// Text after the ordinal marker
        text: String,
    },

    /// A line that started with `-`
    Bullet {
        /// Text after the bullet marker
        text: String,
    },

    /// Anything else
    Plain {
        /// The trimmed line
        text: String,
    },
}

impl ClassifiedLine {
    /// Create a numbered item.
    pub fn numbered(ordinal: impl Into<String>, text: impl Into<String>) -> Self {
        ClassifiedLine::Numbered {
            ordinal: ordinal.into(),
            text: text.into(),
        }
    }

    /// Create a bullet item.
    pub fn bullet(text: impl Into<String>) -> Self {
        ClassifiedLine::Bullet { text: text.into() }
    }

    /// Create a plain text line.
    pub fn plain(text: impl Into<String>) -> Self {
        ClassifiedLine::Plain { text: text.into() }
    }

    /// Get the text content, without any marker.
    pub fn text(&self) -> &str {
        match self {
            ClassifiedLine::Numbered { text, .. }
            | ClassifiedLine::Bullet { text }
            | ClassifiedLine::Plain { text } => text,
        }
    }

    /// Get the ordinal of a numbered item.
    pub fn ordinal(&self) -> Option<&str> {
        match self {
            ClassifiedLine::Numbered { ordinal, .. } => Some(ordinal),
            _ => None,
        }
    }

    /// Parse the ordinal of a numbered item, if it fits in a `u32`.
    pub fn ordinal_number(&self) -> Option<u32> {
        self.ordinal().and_then(|o| o.parse().ok())
    }

    /// Check if this is a numbered item.
    pub fn is_numbered(&self) -> bool {
        matches!(self, ClassifiedLine::Numbered { .. })
    }

    /// Check if this is a bullet item.
    pub fn is_bullet(&self) -> bool {
        matches!(self, ClassifiedLine::Bullet { .. })
    }

    /// Check if this is plain text.
    pub fn is_plain(&self) -> bool {
        matches!(self, ClassifiedLine::Plain { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_accessor() {
        assert_eq!(ClassifiedLine::numbered("2", "Expand").text(), "Expand");
        assert_eq!(ClassifiedLine::bullet("Improve").text(), "Improve");
        assert_eq!(ClassifiedLine::plain("Summary").text(), "Summary");
    }

    #[test]
    fn test_ordinal_number() {
        assert_eq!(ClassifiedLine::numbered("12", "x").ordinal_number(), Some(12));
        assert_eq!(
            ClassifiedLine::numbered("99999999999999999999", "x").ordinal_number(),
            None
        );
        assert_eq!(ClassifiedLine::bullet("x").ordinal_number(), None);
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&ClassifiedLine::bullet("Improve access")).unwrap();
        assert_eq!(json, r#"{"kind":"bullet","text":"Improve access"}"#);

        let back: ClassifiedLine =
            serde_json::from_str(r#"{"kind":"numbered","ordinal":"3","text":"Act"}"#).unwrap();
        assert_eq!(back, ClassifiedLine::numbered("3", "Act"));
    }
}
