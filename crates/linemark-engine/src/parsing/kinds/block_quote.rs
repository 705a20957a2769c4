use std::sync::OnceLock;

use regex::Regex;

use super::{cached_regex_with, escaped, two_column_indent};
use crate::parsing::element::Element;

/// Blockquote line type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Matches `> text`, optionally indented.
    ///
    /// Only the first `>` and the whitespace after it are consumed, so
    /// `> > nested` keeps `> nested` as its contents.
    pub fn match_line(line: &str) -> Option<Element> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let caps = cached_regex_with(&PATTERN, || {
            format!(r"^(\s*){}\s+(\S.*)", escaped(Self::PREFIX))
        })
        .captures(line)?;

        Some(Element::Blockquote {
            contents: caps[2].trim().to_string(),
            indent_level: two_column_indent(&caps[1]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn quote(contents: &str, indent_level: usize) -> Option<Element> {
        Some(Element::Blockquote {
            contents: contents.to_string(),
            indent_level,
        })
    }

    #[rstest]
    #[case("> nested", "nested", 1)]
    #[case(" > one space", "one space", 1)]
    #[case("  > two spaces", "two spaces", 2)]
    #[case("    > four spaces", "four spaces", 3)]
    fn matches_quotes(#[case] line: &str, #[case] contents: &str, #[case] indent: usize) {
        assert_eq!(BlockQuote::match_line(line), quote(contents, indent));
    }

    #[test]
    fn consumes_only_first_marker() {
        assert_eq!(BlockQuote::match_line("> > nested"), quote("> nested", 1));
    }

    #[rstest]
    #[case(">no space")]
    #[case(">> double")]
    #[case(">   ")]
    #[case("a > b")]
    fn rejects_non_quotes(#[case] line: &str) {
        assert_eq!(BlockQuote::match_line(line), None);
    }
}
