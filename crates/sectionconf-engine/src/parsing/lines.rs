use super::span::Span;

/// A reference to a single line of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Byte span of this line in the source (includes the terminator if present).
    pub span: Span,
    /// The line text, terminator included.
    pub text: &'a str,
}

impl<'a> LineRef<'a> {
    /// The line text with a trailing `\n` or `\r\n` removed.
    pub fn content(&self) -> &'a str {
        match self.text.strip_suffix('\n') {
            Some(line) => line.strip_suffix('\r').unwrap_or(line),
            None => self.text,
        }
    }
}

/// Returns an iterator over lines with their numbers and byte spans.
///
/// Uses `split_inclusive` to keep terminators attached, so the spans of all
/// lines tile the source exactly.
pub fn lines_with_spans(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    text.split_inclusive('\n')
        .enumerate()
        .map(move |(index, line)| {
            let start = offset;
            offset += line.len();
            LineRef {
                number: index + 1,
                span: Span::from(start..offset),
                text: line,
            }
        })
}
