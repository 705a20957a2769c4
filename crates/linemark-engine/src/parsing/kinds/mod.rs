//! Per-kind line matchers.
//!
//! Each element kind owns its delimiter syntax here; the classifier only
//! knows the order in which to try them. A matcher is a pure function
//! from the raw line to `Some(Element)` on a match, `None` otherwise.

use std::sync::OnceLock;

use regex::Regex;

pub mod blank_line;
pub mod block_quote;
pub mod code;
pub mod header;
pub mod horizontal_rule;
pub mod line_break;
pub mod list_item;
pub mod plain_text;

pub use blank_line::BlankLine;
pub use block_quote::BlockQuote;
pub use code::CodeLine;
pub use header::Header;
pub use horizontal_rule::HorizontalRule;
pub use line_break::LineBreak;
pub use list_item::{SortedListItem, UnsortedListItem};
pub use plain_text::PlainText;

/// Compiles a built-in pattern once and caches it in `cell`.
pub(crate) fn cached_regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("invalid built-in pattern"))
}

/// Like [`cached_regex`], for patterns assembled from a kind's delimiter
/// constants. `build` only runs on first use.
pub(crate) fn cached_regex_with(
    cell: &'static OnceLock<Regex>,
    build: impl FnOnce() -> String,
) -> &'static Regex {
    cell.get_or_init(|| Regex::new(&build()).expect("invalid built-in pattern"))
}

/// Regex-escaped form of a single delimiter character.
pub(crate) fn escaped(c: char) -> String {
    regex::escape(c.encode_utf8(&mut [0; 4]))
}

/// Indent level for markers nested by two-column steps: `floor(n / 2) + 1`.
///
/// `n` counts characters, so a tab is one column.
pub(crate) fn two_column_indent(leading_whitespace: &str) -> usize {
    leading_whitespace.chars().count() / 2 + 1
}
