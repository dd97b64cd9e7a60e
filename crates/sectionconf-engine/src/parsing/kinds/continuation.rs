/// Value continuation line type.
///
/// An indented line extends the value of the key above it. Indentation is
/// what tells a continuation apart from a new key-value line.
pub struct ContinuationLine;

impl ContinuationLine {
    /// Returns true when `line` (terminator already stripped) is a continuation.
    pub fn matches(line: &str) -> bool {
        Self::extract(line).is_some()
    }

    /// Extracts the text after the leading whitespace, otherwise unmodified.
    ///
    /// Requires at least one leading whitespace character and at least one
    /// non-whitespace character after it.
    pub fn extract(line: &str) -> Option<&str> {
        let text = line.trim_start();
        if text.len() == line.len() || text.is_empty() {
            return None;
        }
        Some(text)
    }

    /// Renders a continuation line (without terminator). `indent` is clamped
    /// to at least one space.
    pub fn render(text: &str, indent: usize) -> String {
        format!("{}{text}", " ".repeat(indent.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(" remaining value string", "remaining value string")]
    #[case("    remaining value string", "remaining value string")]
    #[case("\tthe best", "the best")]
    #[case("  trailing kept  ", "trailing kept  ")]
    #[case(" [header]", "[header]")]
    #[case(" key:value", "key:value")]
    fn extracts_text(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(ContinuationLine::extract(line), Some(expected));
    }

    #[rstest]
    #[case::no_whitespace("improperly formated line")]
    #[case::only_whitespace("          ")]
    #[case::empty("")]
    fn rejects(#[case] line: &str) {
        assert!(!ContinuationLine::matches(line));
    }

    #[test]
    fn render_clamps_indent() {
        assert_eq!(ContinuationLine::render("more", 0), " more");
        assert_eq!(ContinuationLine::render("more", 4), "    more");
    }
}
