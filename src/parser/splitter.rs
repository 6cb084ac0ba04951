//! Section splitting.
//!
//! A narrative is partitioned on `<digits>. ` delimiters. Each fragment
//! becomes one section, titled by the text before its first colon.

use crate::model::Section;
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

fn section_delimiter() -> &'static Regex {
    static DELIMITER_RE: OnceLock<Regex> = OnceLock::new();
    DELIMITER_RE.get_or_init(|| Regex::new(r"[0-9]+\.\s+").unwrap())
}

/// Split a raw narrative into ordered sections.
///
/// Never fails. Input without any delimiter (including the empty string)
/// comes back as a single untitled section holding the whole text, so no
/// content is dropped. Fragments that are blank after splitting carry no
/// content and are discarded.
///
/// # Example
///
/// ```
/// use narrative_outline::parser::split;
///
/// let sections = split("1. Recommendations: Expand screening.");
/// assert_eq!(sections[0].title, "Recommendations");
/// assert_eq!(sections[0].raw_body, "Expand screening.");
/// ```
pub fn split(raw: &str) -> Vec<Section> {
    let delimiter = section_delimiter();

    if !delimiter.is_match(raw) {
        debug!(
            "no section delimiters in {} bytes of narrative; keeping it as one untitled section",
            raw.len()
        );
        return vec![Section::untitled(raw)];
    }

    delimiter
        .split(raw)
        .filter(|fragment| !fragment.trim().is_empty())
        .map(section_from_fragment)
        .collect()
}

fn section_from_fragment(fragment: &str) -> Section {
    match fragment.split_once(':') {
        Some((title, body)) => Section::new(title.trim(), body.trim()),
        None => Section::new(fragment.trim(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_sections() {
        let raw = "1. Key Health Challenges: Diabetes is rising.\n\n2. Recommendations: Expand screening.";
        let sections = split(raw);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Key Health Challenges");
        assert_eq!(sections[0].raw_body, "Diabetes is rising.");
        assert_eq!(sections[1].title, "Recommendations");
        assert_eq!(sections[1].raw_body, "Expand screening.");
    }

    #[test]
    fn test_split_empty_input() {
        let sections = split("");
        assert_eq!(sections, vec![Section::untitled("")]);
    }

    #[test]
    fn test_split_without_delimiters() {
        let raw = "Overall the region is doing well: costs are stable.";
        let sections = split(raw);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "");
        assert_eq!(sections[0].raw_body, raw);
    }

    #[test]
    fn test_split_fragment_without_colon() {
        let sections = split("1. Relative Performance\n2. Unique Challenges: Rural gaps");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Relative Performance");
        assert_eq!(sections[0].raw_body, "");
        assert_eq!(sections[1].title, "Unique Challenges");
    }

    #[test]
    fn test_split_only_first_colon_is_title() {
        let sections = split("1. Priority Areas: Ratio: 3 to 1");
        assert_eq!(sections[0].title, "Priority Areas");
        assert_eq!(sections[0].raw_body, "Ratio: 3 to 1");
    }

    #[test]
    fn test_split_keeps_preamble() {
        let sections = split("Summary for Denver\n\n1. Recommendations: Act");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Summary for Denver");
        assert_eq!(sections[1].title, "Recommendations");
    }

    #[test]
    fn test_split_delimiter_only() {
        assert!(split("1. ").is_empty());
        assert!(split(" 1.  2.\n").is_empty());
    }

    #[test]
    fn test_decimal_is_not_a_delimiter() {
        let sections = split("1. Relative Performance: Cost is 3.5 times higher");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].raw_body, "Cost is 3.5 times higher");
    }

    #[test]
    fn test_titles_are_not_deduplicated() {
        let sections = split("1. Notes: a\n2. Notes: b");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, sections[1].title);
    }
}
