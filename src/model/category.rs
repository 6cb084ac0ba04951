//! Display categories for outline sections.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual/topic classification assigned to a section for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Pressing health issues and concerning trends
    Challenges,
    /// Cost barriers and access disparities
    Access,
    /// Suggested interventions
    Recommendations,
    /// Immediate action items
    Priorities,
    /// Relative standing against other regions
    Performance,
    /// Practices worth adopting from other regions
    BestPractices,
    /// Areas with room for improvement
    Opportunities,
    /// Anything not in the category table
    #[default]
    Default,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 8] = [
        Category::Challenges,
        Category::Access,
        Category::Recommendations,
        Category::Priorities,
        Category::Performance,
        Category::BestPractices,
        Category::Opportunities,
        Category::Default,
    ];

    /// Machine name, as used in serialized output and category map files.
    pub fn name(self) -> &'static str {
        match self {
            Category::Challenges => "challenges",
            Category::Access => "access",
            Category::Recommendations => "recommendations",
            Category::Priorities => "priorities",
            Category::Performance => "performance",
            Category::BestPractices => "best_practices",
            Category::Opportunities => "opportunities",
            Category::Default => "default",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Challenges => "Challenges",
            Category::Access => "Access",
            Category::Recommendations => "Recommendations",
            Category::Priorities => "Priorities",
            Category::Performance => "Performance",
            Category::BestPractices => "Best Practices",
            Category::Opportunities => "Opportunities",
            Category::Default => "General",
        }
    }

    /// Icon identifier for the rendering layer.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Challenges => "alert-triangle",
            Category::Access => "activity",
            Category::Recommendations => "lightbulb",
            Category::Priorities => "target",
            Category::Performance => "bar-chart",
            Category::BestPractices => "award",
            Category::Opportunities => "trending-up",
            Category::Default => "file-text",
        }
    }

    /// Accent color name for the rendering layer.
    pub fn accent(self) -> &'static str {
        match self {
            Category::Challenges => "red",
            Category::Access => "blue",
            Category::Recommendations => "green",
            Category::Priorities => "amber",
            Category::Performance => "indigo",
            Category::BestPractices => "teal",
            Category::Opportunities => "purple",
            Category::Default => "gray",
        }
    }

    /// Check if this is the fallback category.
    pub fn is_default(self) -> bool {
        self == Category::Default
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}
