use serde::{Deserialize, Serialize};

pub use super::element::Classification;
use super::element::Element;
use super::kinds::{
    BlankLine, BlockQuote, CodeLine, Header, HorizontalRule, LineBreak, PlainText, SortedListItem,
    UnsortedListItem,
};

type Matcher = fn(&str) -> Option<Element>;

/// Block matchers in priority order; the first `Some` wins.
///
/// `HorizontalRule` must precede `UnsortedListItem`: `* * *` and `- - -`
/// also satisfy the bullet pattern.
const MATCHERS: &[Matcher] = &[
    Header::match_line,
    HorizontalRule::match_line,
    UnsortedListItem::match_line,
    SortedListItem::match_line,
    BlockQuote::match_line,
    CodeLine::match_line,
    BlankLine::match_line,
];

/// How a trailing hard line break turns into output elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineBreakPolicy {
    /// Breaks only count on plain text lines, where a `LineBreak` follows
    /// the text. Lists, quotes, code, headers and rules never emit one.
    #[default]
    TextOnly,
    /// Every flagged line emits a `LineBreak` after its block element.
    Always,
    /// Hard breaks are never emitted.
    Ignore,
}

/// Classifies individual lines into block elements.
///
/// Classification is a pure function of the line; the policy only affects
/// which elements [`LineClassifier::elements`] yields.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier {
    policy: LineBreakPolicy,
}

impl LineClassifier {
    pub fn new(policy: LineBreakPolicy) -> Self {
        Self { policy }
    }

    /// Classifies a line into a [`Classification`].
    ///
    /// `line` must not include its terminator. Never fails: lines no matcher
    /// accepts become [`Element::PlainText`].
    pub fn classify(&self, line: &str) -> Classification {
        let element = MATCHERS
            .iter()
            .find_map(|matcher| matcher(line))
            .unwrap_or_else(|| PlainText::from_line(line));
        log::trace!("{line:?} classified as {}", element.name());

        Classification {
            element,
            has_line_break: LineBreak::detect(line),
        }
    }

    /// Classifies a line and yields the elements to serialize, in order.
    ///
    /// Always yields the block element, followed by [`Element::LineBreak`]
    /// when the policy honors the line's hard break.
    pub fn elements(&self, line: &str) -> impl Iterator<Item = Element> + use<> {
        let Classification {
            element,
            has_line_break,
        } = self.classify(line);

        let emit_break = has_line_break
            && match self.policy {
                LineBreakPolicy::TextOnly => element.is_plain_text(),
                LineBreakPolicy::Always => true,
                LineBreakPolicy::Ignore => false,
            };

        std::iter::once(element).chain(emit_break.then_some(Element::LineBreak))
    }
}

/// Classifies `line` with the default policy.
pub fn classify(line: &str) -> Classification {
    LineClassifier::default().classify(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn element(line: &str) -> Element {
        classify(line).element
    }

    fn text(contents: &str) -> Element {
        Element::PlainText {
            contents: contents.to_string(),
        }
    }

    #[test]
    fn matcher_table_is_in_priority_order() {
        let names: Vec<_> = ["# h", "* * *", "* a", "1. a", "> a", "\ta", ""]
            .into_iter()
            .map(|line| {
                let matched: Vec<_> = MATCHERS.iter().filter_map(|m| m(line)).collect();
                assert_eq!(matched.first().map(Element::name), Some(element(line).name()));
                element(line).name()
            })
            .collect();

        assert_eq!(
            names,
            vec![
                "header",
                "horizontal rule",
                "unsorted list item",
                "sorted list item",
                "quote",
                "code",
                "blank line",
            ]
        );
    }

    #[test]
    fn header_scenario() {
        assert_eq!(
            element("## Title"),
            Element::Header {
                contents: "Title".to_string(),
                level: 2,
            }
        );
    }

    #[test]
    fn unsorted_list_scenario() {
        assert_eq!(
            element("  * item"),
            Element::UnsortedListItem {
                contents: "item".to_string(),
                indent_level: 2,
            }
        );
    }

    #[test]
    fn sorted_list_scenario() {
        assert_eq!(
            element("1.2. x"),
            Element::SortedListItem {
                contents: "x".to_string(),
                numbering: "1.2.".to_string(),
                indent_level: 2,
            }
        );
    }

    #[test]
    fn blockquote_scenario() {
        assert_eq!(
            element("> nested"),
            Element::Blockquote {
                contents: "nested".to_string(),
                indent_level: 1,
            }
        );
    }

    #[test]
    fn nested_quote_marker_stays_in_contents() {
        assert_eq!(
            element("> > nested"),
            Element::Blockquote {
                contents: "> nested".to_string(),
                indent_level: 1,
            }
        );
    }

    #[test]
    fn tab_code_scenario() {
        assert_eq!(
            element("\t{ code; }"),
            Element::Code {
                contents: "{ code; }".to_string(),
                indent_level: 1,
            }
        );
    }

    #[rstest]
    #[case("---")]
    #[case("- - -")]
    #[case("* * *")]
    #[case("***")]
    #[case("___")]
    #[case("  -  -  -  -  ")]
    fn rules_win_over_list_items(#[case] line: &str) {
        assert_eq!(element(line), Element::HorizontalRule);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t")]
    fn blank_lines(#[case] line: &str) {
        assert_eq!(element(line), Element::BlankLine);
    }

    #[rstest]
    #[case("Just some text", "Just some text")]
    #[case("   padded text   ", "padded text")]
    #[case("#hashtag", "#hashtag")]
    #[case(">quote without space", ">quote without space")]
    #[case("#   ", "#")]
    fn falls_back_to_plain_text(#[case] line: &str, #[case] contents: &str) {
        assert_eq!(element(line), text(contents));
    }

    #[test]
    fn list_marker_beats_code_indentation() {
        assert_eq!(
            element("    - deep item"),
            Element::UnsortedListItem {
                contents: "deep item".to_string(),
                indent_level: 3,
            }
        );
        assert_eq!(
            element("    > deep quote"),
            Element::Blockquote {
                contents: "deep quote".to_string(),
                indent_level: 3,
            }
        );
    }

    #[test]
    fn header_beats_rule() {
        assert_eq!(
            element("# ---"),
            Element::Header {
                contents: "---".to_string(),
                level: 1,
            }
        );
    }

    #[test]
    fn classification_is_idempotent() {
        for line in ["## Title", "  * item", "1.2. x", "text  ", "", "\tcode"] {
            assert_eq!(classify(line), classify(line));
        }
    }

    #[test]
    fn line_break_flag_is_independent_of_block() {
        let c = classify("- item  ");
        assert!(c.has_line_break);
        assert_eq!(
            c.element,
            Element::UnsortedListItem {
                contents: "item".to_string(),
                indent_level: 1,
            }
        );
        assert!(!classify("- item").has_line_break);
    }

    fn elements(policy: LineBreakPolicy, line: &str) -> Vec<Element> {
        LineClassifier::new(policy).elements(line).collect()
    }

    #[test]
    fn text_only_policy_breaks_plain_text() {
        assert_eq!(
            elements(LineBreakPolicy::TextOnly, "Roses are red  "),
            vec![text("Roses are red"), Element::LineBreak]
        );
    }

    #[test]
    fn text_only_policy_ignores_break_on_list_item() {
        assert_eq!(
            elements(LineBreakPolicy::TextOnly, "- item  "),
            vec![Element::UnsortedListItem {
                contents: "item".to_string(),
                indent_level: 1,
            }]
        );
    }

    #[test]
    fn always_policy_breaks_any_block() {
        assert_eq!(
            elements(LineBreakPolicy::Always, "Roses are red  "),
            vec![text("Roses are red"), Element::LineBreak]
        );
        assert_eq!(
            elements(LineBreakPolicy::Always, "- item  "),
            vec![
                Element::UnsortedListItem {
                    contents: "item".to_string(),
                    indent_level: 1,
                },
                Element::LineBreak,
            ]
        );
    }

    #[test]
    fn ignore_policy_never_breaks() {
        assert_eq!(
            elements(LineBreakPolicy::Ignore, "Roses are red  "),
            vec![text("Roses are red")]
        );
        assert_eq!(elements(LineBreakPolicy::Ignore, "- item  ").len(), 1);
    }

    #[test]
    fn lines_without_break_yield_one_element() {
        for policy in [
            LineBreakPolicy::TextOnly,
            LineBreakPolicy::Always,
            LineBreakPolicy::Ignore,
        ] {
            assert_eq!(elements(policy, "plain"), vec![text("plain")]);
        }
    }
}
