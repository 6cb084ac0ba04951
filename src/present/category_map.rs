//! Injectable section-title → category table.

use crate::error::{Error, Result};
use crate::model::Category;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Section titles the analysis prompts ask the model to produce.
const DEFAULT_TITLES: [(&str, Category); 8] = [
    ("Key Health Challenges", Category::Challenges),
    ("Healthcare Access Analysis", Category::Access),
    ("Recommendations", Category::Recommendations),
    ("Priority Areas", Category::Priorities),
    ("Relative Performance", Category::Performance),
    ("Unique Challenges", Category::Challenges),
    ("Best Practices to Consider", Category::BestPractices),
    ("Opportunities for Improvement", Category::Opportunities),
];

/// Exact-match table from section title to display category.
///
/// Matching is case-sensitive. Titles not in the table resolve to
/// [`Category::Default`]; the table enriches display, it never rejects a
/// section.
///
/// # Example
///
/// ```
/// use narrative_outline::{Category, CategoryMap};
///
/// let categories = CategoryMap::new().with("Workforce", Category::Access);
/// assert_eq!(categories.resolve("Workforce"), Category::Access);
/// assert_eq!(categories.resolve("Recommendations"), Category::Recommendations);
/// assert_eq!(categories.resolve("Unexpected Topic"), Category::Default);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap {
    entries: BTreeMap<String, Category>,
}

impl CategoryMap {
    /// Create the default table.
    pub fn new() -> Self {
        Self {
            entries: DEFAULT_TITLES
                .iter()
                .map(|(title, category)| (title.to_string(), *category))
                .collect(),
        }
    }

    /// Create a table with no entries; every title resolves to the default.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace an entry, returning the previous category for the title.
    pub fn insert(&mut self, title: impl Into<String>, category: Category) -> Option<Category> {
        self.entries.insert(title.into(), category)
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, title: impl Into<String>, category: Category) -> Self {
        self.insert(title, category);
        self
    }

    /// Add every entry of `other`, overriding existing titles.
    pub fn extend(&mut self, other: CategoryMap) {
        self.entries.extend(other.entries);
    }

    /// Look up a title without falling back.
    pub fn get(&self, title: &str) -> Option<Category> {
        self.entries.get(title).copied()
    }

    /// Resolve a section title to its display category.
    pub fn resolve(&self, title: &str) -> Category {
        match self.get(title) {
            Some(category) => category,
            None => {
                debug!("no category for section title {:?}; using default", title);
                Category::Default
            }
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in title order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Category)> {
        self.entries.iter().map(|(title, category)| (title.as_str(), *category))
    }

    /// Parse a table from a JSON object of `"title": "category_name"` pairs.
    ///
    /// Category names are matched case-insensitively against
    /// [`Category::name`].
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = value.as_object().ok_or_else(|| {
            Error::InvalidCategoryMap("expected a JSON object of title to category".to_string())
        })?;

        let mut map = Self::empty();
        for (title, name) in object {
            let name = name.as_str().ok_or_else(|| {
                Error::InvalidCategoryMap(format!("category for {:?} is not a string", title))
            })?;
            map.insert(title.clone(), name.parse()?);
        }
        Ok(map)
    }

    /// Load a table from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the table as a pretty-printed JSON object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let map = CategoryMap::new();
        assert_eq!(map.len(), 8);
        assert_eq!(map.resolve("Key Health Challenges"), Category::Challenges);
        assert_eq!(map.resolve("Healthcare Access Analysis"), Category::Access);
        assert_eq!(map.resolve("Recommendations"), Category::Recommendations);
        assert_eq!(map.resolve("Priority Areas"), Category::Priorities);
        assert_eq!(map.resolve("Opportunities for Improvement"), Category::Opportunities);
    }

    #[test]
    fn test_fallback_and_case_sensitivity() {
        let map = CategoryMap::new();
        assert_eq!(map.resolve("Unexpected Topic"), Category::Default);
        assert_eq!(map.resolve("recommendations"), Category::Default);
        assert_eq!(map.resolve(""), Category::Default);
    }

    #[test]
    fn test_resolve_is_stable() {
        let map = CategoryMap::new();
        let first = map.resolve("Priority Areas");
        for _ in 0..10 {
            assert_eq!(map.resolve("Priority Areas"), first);
        }
    }

    #[test]
    fn test_insert_and_extend() {
        let mut map = CategoryMap::empty();
        assert!(map.is_empty());
        assert_eq!(map.insert("Workforce", Category::Access), None);
        assert_eq!(
            map.insert("Workforce", Category::Priorities),
            Some(Category::Access)
        );

        let mut defaults = CategoryMap::new();
        defaults.extend(map);
        assert_eq!(defaults.len(), 9);
        assert_eq!(defaults.resolve("Workforce"), Category::Priorities);
    }

    #[test]
    fn test_from_json() {
        let map = CategoryMap::from_json(
            r#"{"Workforce": "access", "Funding": "Best_Practices"}"#,
        )
        .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.resolve("Funding"), Category::BestPractices);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            CategoryMap::from_json("[1, 2]"),
            Err(Error::InvalidCategoryMap(_))
        ));
        assert!(matches!(
            CategoryMap::from_json(r#"{"A": 3}"#),
            Err(Error::InvalidCategoryMap(_))
        ));
        assert!(matches!(
            CategoryMap::from_json(r#"{"A": "weather"}"#),
            Err(Error::UnknownCategory(_))
        ));
        assert!(matches!(CategoryMap::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_to_json_round_trip() {
        let map = CategoryMap::new();
        let json = map.to_json().unwrap();
        assert!(json.contains("\"Priority Areas\": \"priorities\""));
        assert_eq!(CategoryMap::from_json(&json).unwrap(), map);
    }
}
