use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::convert::ElementSerializer;
use crate::parsing::Element;

/// Renders each element as one line of HTML.
///
/// Elements are rendered in isolation: list items are not wrapped in
/// `<ul>`/`<ol>` and consecutive quote lines are not merged. Nesting is
/// exposed through `level-N` classes instead. Blank lines produce no output.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlSerializer;

impl HtmlSerializer {
    /// Deepest HTML heading level; deeper headers are clamped to it.
    pub const MAX_HEADING_LEVEL: usize = 6;

    pub fn render(element: &Element) -> String {
        let mut html = String::new();
        match element {
            Element::Header { contents, level } => {
                let level = (*level).clamp(1, Self::MAX_HEADING_LEVEL);
                let _ = writeln!(html, "<h{level}>{}</h{level}>", encode_text(contents));
            }
            Element::UnsortedListItem {
                contents,
                indent_level,
            } => {
                let _ = writeln!(
                    html,
                    r#"<li class="unordered level-{indent_level}">{}</li>"#,
                    encode_text(contents)
                );
            }
            Element::SortedListItem {
                contents,
                numbering,
                indent_level,
            } => {
                let _ = writeln!(
                    html,
                    r#"<li class="ordered level-{indent_level}" data-numbering="{}">{}</li>"#,
                    encode_double_quoted_attribute(numbering),
                    encode_text(contents)
                );
            }
            Element::Blockquote {
                contents,
                indent_level,
            } => {
                let _ = writeln!(
                    html,
                    r#"<blockquote class="level-{indent_level}">{}</blockquote>"#,
                    encode_text(contents)
                );
            }
            Element::Code {
                contents,
                indent_level,
            } => {
                let _ = writeln!(
                    html,
                    r#"<pre class="level-{indent_level}"><code>{}</code></pre>"#,
                    encode_text(contents)
                );
            }
            Element::HorizontalRule => html.push_str("<hr />\n"),
            Element::LineBreak => html.push_str("<br />\n"),
            Element::BlankLine => {}
            Element::PlainText { contents } => {
                if !contents.is_empty() {
                    let _ = writeln!(html, "<p>{}</p>", encode_text(contents));
                }
            }
        }
        html
    }
}

impl ElementSerializer for HtmlSerializer {
    fn serialize(&mut self, element: &Element) -> String {
        Self::render(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::classify;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("## Title", "<h2>Title</h2>\n")]
    #[case("######## Too deep", "<h6>Too deep</h6>\n")]
    #[case("  * item", "<li class=\"unordered level-2\">item</li>\n")]
    #[case(
        "1.2. x",
        "<li class=\"ordered level-2\" data-numbering=\"1.2.\">x</li>\n"
    )]
    #[case("> quote", "<blockquote class=\"level-1\">quote</blockquote>\n")]
    #[case("\t\tfn main() {}", "<pre class=\"level-2\"><code>fn main() {}</code></pre>\n")]
    #[case("* * *", "<hr />\n")]
    #[case("", "")]
    #[case("   ", "")]
    #[case("Hello", "<p>Hello</p>\n")]
    fn renders_lines(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(HtmlSerializer::render(&classify(line).element), expected);
    }

    #[test]
    fn escapes_markup_in_contents() {
        assert_eq!(
            HtmlSerializer::render(&classify("# <script> & co").element),
            "<h1>&lt;script&gt; &amp; co</h1>\n"
        );
        assert_eq!(
            HtmlSerializer::render(&classify("\tif a < b {").element),
            "<pre class=\"level-1\"><code>if a &lt; b {</code></pre>\n"
        );
    }

    #[test]
    fn renders_line_break() {
        assert_eq!(HtmlSerializer::render(&Element::LineBreak), "<br />\n");
    }
}
