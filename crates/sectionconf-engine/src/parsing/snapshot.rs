use serde::Serialize;

use crate::models::Value;

use super::{
    builder::ParseReport,
    kinds::{HeaderLine, KeyValueLine},
    lines::lines_with_spans,
};

/// Snapshot of a parse for testing with `insta`.
#[derive(Serialize)]
pub struct Snap {
    pub sections: Vec<SectionSnap>,
    pub diagnostics: Vec<DiagnosticSnap>,
}

#[derive(Serialize)]
pub struct SectionSnap {
    pub name: String,
    pub entries: Vec<EntrySnap>,
}

#[derive(Serialize)]
pub struct EntrySnap {
    pub key: String,
    /// Value representation (`Float`, `Integer`, `String`).
    pub kind: String,
    /// Canonical text of the value.
    pub text: String,
}

#[derive(Serialize)]
pub struct DiagnosticSnap {
    pub line: usize,
    pub kind: String,
}

/// Converts a parse report into a serializable snapshot, in document order.
pub fn normalize(report: &ParseReport) -> Snap {
    let sections = report
        .document()
        .sections()
        .map(|(name, section)| SectionSnap {
            name: name.to_owned(),
            entries: section
                .iter()
                .map(|(key, value)| EntrySnap {
                    key: key.to_owned(),
                    kind: value.type_name().to_owned(),
                    text: value.to_string(),
                })
                .collect(),
        })
        .collect();

    let diagnostics = report
        .diagnostics()
        .iter()
        .map(|d| DiagnosticSnap {
            line: d.line,
            kind: d.kind.name().to_owned(),
        })
        .collect();

    Snap {
        sections,
        diagnostics,
    }
}

/// Validates parser output invariants against the source it came from.
///
/// Asserts that:
/// - Every section name is a valid header name, or the implicit `""` section
/// - Every key is a valid key
/// - No string value starts with whitespace
/// - Every diagnostic points at an existing, non-empty line and its span
///   slices back to that line's text
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn invariants(text: &str, report: &ParseReport) {
    for (name, section) in report.document().sections() {
        assert!(
            name.is_empty() || HeaderLine::is_valid_name(name),
            "invalid section name: {name:?}"
        );
        for (key, value) in section.iter() {
            assert!(KeyValueLine::is_valid_key(key), "invalid key: {key:?}");
            if let Value::String(s) = value {
                assert!(
                    s.trim_start() == s,
                    "value of [{name}] {key:?} has leading whitespace: {s:?}"
                );
            }
        }
    }

    let lines: Vec<_> = lines_with_spans(text).collect();
    for d in report.diagnostics() {
        let line = lines
            .get(d.line.wrapping_sub(1))
            .unwrap_or_else(|| panic!("diagnostic on missing line {}", d.line));
        assert_eq!(line.span, d.span, "diagnostic span mismatch on line {}", d.line);
        assert!(!d.span.is_empty(), "empty diagnostic span on line {}", d.line);
        assert_eq!(
            d.span.slice(text),
            Some(line.text),
            "diagnostic span does not slice line {}",
            d.line
        );
    }
}
