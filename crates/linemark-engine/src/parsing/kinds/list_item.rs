use std::sync::OnceLock;

use regex::Regex;

use super::{cached_regex, cached_regex_with, escaped, two_column_indent};
use crate::parsing::element::Element;

/// Bulleted list item introduced by `*` or `-`.
///
/// Does not guard against rule lines such as `* * *`; the classifier tries
/// [`HorizontalRule`](super::HorizontalRule) first.
pub struct UnsortedListItem;

impl UnsortedListItem {
    /// Accepted bullet characters.
    pub const BULLETS: [char; 2] = ['*', '-'];

    pub fn match_line(line: &str) -> Option<Element> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = cached_regex_with(&PATTERN, || {
            let bullets: String = Self::BULLETS.into_iter().map(escaped).collect();
            format!(r"^(\s*)[{bullets}]\s+(\S.*)")
        })
        .captures(line)?;

        Some(Element::UnsortedListItem {
            contents: caps[2].trim().to_string(),
            indent_level: two_column_indent(&caps[1]),
        })
    }
}

/// Numbered list item with one or more dotted groups, e.g. `1.2.3.`.
pub struct SortedListItem;

impl SortedListItem {
    /// Terminator of each numbering group.
    pub const GROUP_SEPARATOR: char = '.';

    pub fn match_line(line: &str) -> Option<Element> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps =
            cached_regex(&PATTERN, r"^\s*((?:[0-9]+\.)+)\s+(\S.*)").captures(line)?;

        let numbering = caps[1].to_string();
        let indent_level = numbering.matches(Self::GROUP_SEPARATOR).count();
        Some(Element::SortedListItem {
            contents: caps[2].trim().to_string(),
            numbering,
            indent_level,
        })
    }
}
