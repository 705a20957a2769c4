use crate::parsing::element::Element;

/// Paragraph text (marker struct).
///
/// Plain text has no delimiters - it is what a line becomes when no other
/// matcher accepts it, so unlike the other kinds it always matches.
pub struct PlainText;

impl PlainText {
    pub fn from_line(line: &str) -> Element {
        Element::PlainText {
            contents: line.trim().to_string(),
        }
    }
}
