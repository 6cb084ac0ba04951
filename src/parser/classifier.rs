//! Line classification.

use crate::model::ClassifiedLine;
use log::trace;
use regex::Regex;
use std::sync::OnceLock;

fn numbered_prefix() -> &'static Regex {
    static NUMBERED_RE: OnceLock<Regex> = OnceLock::new();
    NUMBERED_RE.get_or_init(|| Regex::new(r"^([0-9]+)\.\s").unwrap())
}

/// Classify a single body line.
///
/// Rules, first match wins:
/// 1. `<digits>. text` is a numbered item. Only the matched `<digits>.`
///    prefix is removed, so periods inside the text are kept as written.
/// 2. A leading `-` is a bullet item.
/// 3. Anything else is plain text.
///
/// The line is trimmed first; the result text is trimmed again after the
/// marker is removed.
pub fn classify(line: &str) -> ClassifiedLine {
    let line = line.trim();

    let classified = if let Some(caps) = numbered_prefix().captures(line) {
        let ordinal = &caps[1];
        // `<digits>.` is ASCII, so ordinal.len() + 1 is a char boundary
        let rest = &line[ordinal.len() + 1..];
        ClassifiedLine::numbered(ordinal, rest.trim())
    } else if let Some(rest) = line.strip_prefix('-') {
        ClassifiedLine::bullet(rest.trim())
    } else {
        ClassifiedLine::plain(line)
    };

    trace!("classified {:?} as {:?}", line, classified);
    classified
}
