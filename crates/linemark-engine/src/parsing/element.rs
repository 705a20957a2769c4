/// The block element assigned to a single input line.
///
/// Elements are plain values: the classifier builds them once and the
/// converter hands them to a serializer and drops them. Every `contents`
/// field holds the matched text with surrounding whitespace trimmed and
/// without the delimiter the matcher consumed (`#`, `*`, `>`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    /// `## Title`
    Header {
        contents: String,
        /// Number of leading `#` characters (1 or more).
        level: usize,
    },
    /// `* item` or `- item`, optionally indented.
    UnsortedListItem { contents: String, indent_level: usize },
    /// `1.2. item`
    SortedListItem {
        contents: String,
        /// The dotted number prefix exactly as written, e.g. `1.2.`.
        numbering: String,
        /// Number of `digits.` groups in `numbering`.
        indent_level: usize,
    },
    /// `> quoted`
    Blockquote { contents: String, indent_level: usize },
    /// A tab- or space-indented code line.
    Code { contents: String, indent_level: usize },
    /// `---`, `* * *`, `___`
    HorizontalRule,
    /// Two or more trailing whitespace characters after text.
    LineBreak,
    /// Empty or whitespace-only line.
    BlankLine,
    /// Fallback for lines no structured matcher accepts.
    PlainText { contents: String },
}

impl Element {
    /// Stable tag naming the variant.
    pub fn name(&self) -> &'static str {
        match self {
            Element::Header { .. } => "header",
            Element::UnsortedListItem { .. } => "unsorted list item",
            Element::SortedListItem { .. } => "sorted list item",
            Element::Blockquote { .. } => "quote",
            Element::Code { .. } => "code",
            Element::HorizontalRule => "horizontal rule",
            Element::LineBreak => "line break",
            Element::BlankLine => "blank line",
            Element::PlainText { .. } => "text",
        }
    }

    /// Text payload, if the variant carries one.
    pub fn contents(&self) -> Option<&str> {
        match self {
            Element::Header { contents, .. }
            | Element::UnsortedListItem { contents, .. }
            | Element::SortedListItem { contents, .. }
            | Element::Blockquote { contents, .. }
            | Element::Code { contents, .. }
            | Element::PlainText { contents } => Some(contents),
            Element::HorizontalRule | Element::LineBreak | Element::BlankLine => None,
        }
    }

    /// Nesting depth for list items, quotes and code lines.
    pub fn indent_level(&self) -> Option<usize> {
        match self {
            Element::UnsortedListItem { indent_level, .. }
            | Element::SortedListItem { indent_level, .. }
            | Element::Blockquote { indent_level, .. }
            | Element::Code { indent_level, .. } => Some(*indent_level),
            _ => None,
        }
    }

    pub fn is_plain_text(&self) -> bool {
        matches!(self, Element::PlainText { .. })
    }
}

/// Result of classifying one line.
///
/// The hard line break flag is computed independently of `element`; how it
/// turns into output is decided by [`LineBreakPolicy`](super::classify::LineBreakPolicy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub element: Element,
    pub has_line_break: bool,
}
