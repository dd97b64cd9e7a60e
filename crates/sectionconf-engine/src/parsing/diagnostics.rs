use std::fmt;

use super::span::Span;

/// An in-format irregularity the builder recovered from.
///
/// None of these abort a parse. They exist so callers can tell when lines
/// were dropped or reinterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A non-blank line that is not a header, key-value or continuation. Dropped.
    MalformedLine,
    /// A key-value line before any header; stored in the implicit `""` section.
    OrphanKeyValue { key: String },
    /// A key-value line with more than one colon; split on the first.
    AmbiguousColonSplit { key: String, extra_colons: usize },
    /// A continuation extended a numeric value, which became a string.
    NonStringContinuation { section: String, key: String },
    /// A continuation with no key to extend. Dropped.
    DanglingContinuation,
}

impl DiagnosticKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MalformedLine => "MalformedLine",
            Self::OrphanKeyValue { .. } => "OrphanKeyValue",
            Self::AmbiguousColonSplit { .. } => "AmbiguousColonSplit",
            Self::NonStringContinuation { .. } => "NonStringContinuation",
            Self::DanglingContinuation => "DanglingContinuation",
        }
    }

    /// Whether the line's content was discarded.
    pub fn drops_line(&self) -> bool {
        matches!(self, Self::MalformedLine | Self::DanglingContinuation)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedLine => "unrecognized line skipped".fmt(f),
            Self::OrphanKeyValue { key } => {
                write!(f, "key {key:?} appears before any header")
            }
            Self::AmbiguousColonSplit { key, extra_colons } => write!(
                f,
                "key {key:?} has {extra_colons} extra colon(s); split on the first"
            ),
            Self::NonStringContinuation { section, key } => write!(
                f,
                "continuation turned numeric value [{section}] {key:?} into a string"
            ),
            Self::DanglingContinuation => "continuation with no key to extend skipped".fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    /// Byte span of the offending line.
    pub span: Span,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}
