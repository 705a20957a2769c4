use std::sync::OnceLock;

use regex::Regex;

use super::{cached_regex_with, escaped};
use crate::parsing::element::Element;

/// ATX-style header: a run of `#`, whitespace, then text.
pub struct Header;

impl Header {
    /// The header marker character.
    pub const MARKER: char = '#';

    pub fn match_line(line: &str) -> Option<Element> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = cached_regex_with(&PATTERN, || {
            format!(r"^({}+)\s+(\S.*)", escaped(Self::MARKER))
        })
        .captures(line)?;

        Some(Element::Header {
            contents: caps[2].trim().to_string(),
            level: caps[1].len(),
        })
    }
}
