use std::sync::OnceLock;

use regex::Regex;

use super::cached_regex;

/// Hard line break: non-whitespace followed by two or more trailing
/// whitespace characters.
pub struct LineBreak;

impl LineBreak {
    /// Checks the untrimmed line; the caller must already have removed the
    /// line terminator, otherwise `"text \n"` would count as a break.
    pub fn detect(line: &str) -> bool {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        cached_regex(&PATTERN, r"\S\s{2,}$").is_match(line)
    }
}
