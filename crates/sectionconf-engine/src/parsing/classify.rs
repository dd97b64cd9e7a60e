use super::{
    kinds::{ContinuationLine, HeaderLine, KeyValue, KeyValueLine},
    lines::LineRef,
    span::Span,
};

/// What a single line is, with the text extracted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `[name]` at column 0.
    Header(&'a str),
    /// `key: value` at column 0, split on the first colon.
    KeyValue(KeyValue<'a>),
    /// Indented text extending the previous value.
    Continuation(&'a str),
    /// Blank or malformed; ignored by the builder.
    Unrecognized,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of parsing: each line is classified independently
/// without reference to surrounding lines.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Full byte span of this line in the source.
    pub line: Span,
    /// Whether the line is empty or whitespace only.
    pub is_blank: bool,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the builder phase.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let content = lr.content();
        LineClass {
            number: lr.number,
            line: lr.span,
            is_blank: content.trim().is_empty(),
            kind: self.kind_of(content),
        }
    }

    /// Classifies line content (terminator already stripped).
    ///
    /// Precedence: header, then key-value, then continuation; first match wins.
    pub fn kind_of<'a>(&self, content: &'a str) -> LineKind<'a> {
        if let Some(name) = HeaderLine::extract(content) {
            return LineKind::Header(name);
        }
        if let Some(kv) = KeyValueLine::extract(content) {
            return LineKind::KeyValue(kv);
        }
        if let Some(text) = ContinuationLine::extract(content) {
            return LineKind::Continuation(text);
        }
        LineKind::Unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::lines::lines_with_spans;
    use rstest::rstest;

    fn kind(content: &str) -> LineKind<'_> {
        LineClassifier.kind_of(content)
    }

    #[test]
    fn header_beats_key_value() {
        assert_eq!(kind("[a]: b"), LineKind::Header("a"));
    }

    #[test]
    fn indented_header_is_continuation() {
        assert_eq!(kind(" [header]"), LineKind::Continuation("[header]"));
    }

    #[test]
    fn indented_key_value_is_continuation() {
        assert_eq!(kind(" key:value"), LineKind::Continuation("key:value"));
    }

    #[test]
    fn malformed_header_with_colon_falls_through() {
        // `[a` is not a valid key, so this is neither header nor key-value.
        assert_eq!(kind("[a:b]"), LineKind::Unrecognized);
    }

    #[test]
    fn empty_value_is_key_value_not_continuation() {
        assert_eq!(
            kind("key:"),
            LineKind::KeyValue(KeyValue {
                key: "key",
                value: "",
                extra_colons: 0,
            })
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("     ")]
    #[case::tabs("\t\t")]
    #[case::plain_text("improperly formated line")]
    #[case::only_colon(":")]
    fn unrecognized(#[case] content: &str) {
        assert_eq!(kind(content), LineKind::Unrecognized);
    }

    #[test]
    fn classify_strips_terminator_and_flags_blank() {
        let classes: Vec<_> = lines_with_spans("[a]\r\n\n  \nk: v\n")
            .map(|lr| LineClassifier.classify(&lr))
            .collect();

        assert_eq!(classes[0].kind, LineKind::Header("a"));
        assert!(!classes[0].is_blank);
        assert!(classes[1].is_blank);
        assert!(classes[2].is_blank);
        assert_eq!(classes[2].kind, LineKind::Unrecognized);
        assert_eq!(classes[3].number, 4);
        assert_eq!(classes[3].line, Span { start: 9, end: 14 });
    }
}
