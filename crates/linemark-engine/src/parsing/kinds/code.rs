use std::sync::OnceLock;

use regex::Regex;

use super::cached_regex;
use crate::parsing::element::Element;

/// Indented code line: leading tabs, or at least four leading spaces.
pub struct CodeLine;

impl CodeLine {
    /// Spaces per indent level for space-indented code.
    pub const SPACES_PER_LEVEL: usize = 4;

    pub fn match_line(line: &str) -> Option<Element> {
        static TABS: OnceLock<Regex> = OnceLock::new();
        static SPACES: OnceLock<Regex> = OnceLock::new();

        if let Some(caps) = cached_regex(&TABS, r"^(\t+)(\S.*)").captures(line) {
            return Some(Element::Code {
                contents: caps[2].trim().to_string(),
                indent_level: caps[1].len(),
            });
        }

        let caps = cached_regex(&SPACES, r"^( {4,})(\S.*)").captures(line)?;
        Some(Element::Code {
            contents: caps[2].trim().to_string(),
            indent_level: caps[1].len() / Self::SPACES_PER_LEVEL,
        })
    }
}
