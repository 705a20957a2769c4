use crate::parsing::element::Element;

pub struct BlankLine;

impl BlankLine {
    pub fn match_line(line: &str) -> Option<Element> {
        line.trim().is_empty().then_some(Element::BlankLine)
    }
}
