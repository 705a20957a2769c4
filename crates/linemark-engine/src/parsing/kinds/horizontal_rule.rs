use crate::parsing::element::Element;

/// Thematic break: three or more of the same rule character, whitespace ignored.
pub struct HorizontalRule;

impl HorizontalRule {
    /// Characters that may form a rule.
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    /// Minimum number of marker characters.
    pub const MIN_REPEAT: usize = 3;

    /// Whether `line` is a rule once all whitespace is removed.
    ///
    /// Interior whitespace is allowed, so `- - -` and `* * *` qualify.
    pub fn is_rule(line: &str) -> bool {
        let mut marks = line.chars().filter(|c| !c.is_whitespace());
        let Some(first) = marks.next() else {
            return false;
        };
        if !Self::MARKERS.contains(&first) {
            return false;
        }

        let mut count = 1;
        for c in marks {
            if c != first {
                return false;
            }
            count += 1;
        }
        count >= Self::MIN_REPEAT
    }

    pub fn match_line(line: &str) -> Option<Element> {
        Self::is_rule(line).then_some(Element::HorizontalRule)
    }
}
