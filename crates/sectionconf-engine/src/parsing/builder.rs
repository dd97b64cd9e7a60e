use crate::models::{Document, Value};

use super::{
    classify::{LineClass, LineKind},
    coerce::coerce,
    diagnostics::{Diagnostic, DiagnosticKind},
    kinds::KeyValue,
};

/// Result of one parse: the document plus every irregularity recovered from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    document: Document,
    diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of non-blank lines whose content was dropped.
    pub fn skipped_lines(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.kind.drops_line())
            .count()
    }

    pub fn into_parts(self) -> (Document, Vec<Diagnostic>) {
        (self.document, self.diagnostics)
    }
}

/// Phase 2 of parsing: folds classified lines into a [`Document`].
///
/// Holds two cursors, the current section (initially `""`, the implicit
/// section) and the current key (initially none). Single forward pass with
/// no lookahead.
pub struct DocumentBuilder {
    section: String,
    key: Option<String>,
    doc: Document,
    diagnostics: Vec<Diagnostic>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            section: Document::IMPLICIT_SECTION.to_owned(),
            key: None,
            doc: Document::new(),
            diagnostics: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        match c.kind {
            LineKind::Header(name) => self.open_section(name),
            LineKind::KeyValue(kv) => self.assign(c, kv),
            LineKind::Continuation(text) => self.extend_value(c, text),
            LineKind::Unrecognized => {
                if !c.is_blank {
                    self.report(c, DiagnosticKind::MalformedLine);
                }
            }
        }
    }

    pub fn finish(self) -> ParseReport {
        ParseReport {
            document: self.doc,
            diagnostics: self.diagnostics,
        }
    }

    fn open_section(&mut self, name: &str) {
        // A repeated header starts its section over.
        self.doc.reset_section(name);
        self.section = name.to_owned();
        self.key = None;
    }

    fn assign(&mut self, c: &LineClass<'_>, kv: KeyValue<'_>) {
        if self.section == Document::IMPLICIT_SECTION {
            self.report(
                c,
                DiagnosticKind::OrphanKeyValue {
                    key: kv.key.to_owned(),
                },
            );
        }
        if kv.extra_colons > 0 {
            self.report(
                c,
                DiagnosticKind::AmbiguousColonSplit {
                    key: kv.key.to_owned(),
                    extra_colons: kv.extra_colons,
                },
            );
        }

        self.doc.set(&self.section, kv.key, coerce(kv.value));
        self.key = Some(kv.key.to_owned());
    }

    /// Appends continuation `text` to the current value after a single space.
    ///
    /// An empty current value takes `text` with no space in front, so
    /// `key:` followed by an indented line does not start with a blank. A
    /// numeric value is turned into its canonical text first and the result
    /// stays a string.
    fn extend_value(&mut self, c: &LineClass<'_>, text: &str) {
        let Some(value) = self
            .key
            .as_deref()
            .and_then(|key| self.doc.get_mut(&self.section, key))
        else {
            self.report(c, DiagnosticKind::DanglingContinuation);
            return;
        };

        let was_string = value.is_string();
        let mut joined = match std::mem::replace(value, Value::String(String::new())) {
            Value::String(s) => s,
            other => other.to_string(),
        };
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(text);
        *value = Value::String(joined);

        if !was_string {
            let kind = DiagnosticKind::NonStringContinuation {
                section: self.section.clone(),
                key: self.key.clone().unwrap_or_default(),
            };
            self.report(c, kind);
        }
    }

    fn report(&mut self, c: &LineClass<'_>, kind: DiagnosticKind) {
        let diagnostic = Diagnostic {
            line: c.number,
            span: c.line,
            kind,
        };
        log::debug!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{classify::LineClassifier, lines::lines_with_spans};
    use pretty_assertions::assert_eq;

    fn build(text: &str) -> ParseReport {
        let mut builder = DocumentBuilder::new();
        for lr in lines_with_spans(text) {
            builder.push(&LineClassifier.classify(&lr));
        }
        builder.finish()
    }

    fn kinds(report: &ParseReport) -> Vec<&'static str> {
        report.diagnostics().iter().map(|d| d.kind.name()).collect()
    }

    #[test]
    fn header_creates_empty_section() {
        let report = build("[header1]\n[header2]\n");
        let doc = report.document();

        assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["header1", "header2"]);
        assert!(doc.sections().all(|(_, s)| s.is_empty()));
        assert!(report.diagnostics().is_empty());
    }

    #[test]
    fn repeated_header_discards_earlier_entries() {
        let report = build("[a]\nx: 1\n[b]\ny: 2\n[a]\nz: 3\n");
        let doc = report.document();

        assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(doc.get("a", "x"), None);
        assert_eq!(doc.get("a", "z"), Some(&Value::Integer(3)));
    }

    #[test]
    fn continuation_joins_with_single_space() {
        let report = build("[header1]\napple: red apples are\n the best\n   and ripe");
        assert_eq!(
            report.document().get("header1", "apple"),
            Some(&Value::from("red apples are the best and ripe"))
        );
    }

    #[test]
    fn continuation_of_empty_value_has_no_leading_space() {
        let report = build("[a]\nlong:\n  starts on the next line\n");
        assert_eq!(
            report.document().get("a", "long"),
            Some(&Value::from("starts on the next line"))
        );
    }

    #[test]
    fn continuation_of_number_becomes_string() {
        let report = build("[shop]\nprice: 10\n  dollars\nqty: 5\n");
        let doc = report.document();

        assert_eq!(doc.get("shop", "price"), Some(&Value::from("10 dollars")));
        assert_eq!(doc.get("shop", "qty"), Some(&Value::Integer(5)));
        assert_eq!(
            report.diagnostics()[0].kind,
            DiagnosticKind::NonStringContinuation {
                section: "shop".into(),
                key: "price".into(),
            }
        );
        assert_eq!(report.diagnostics()[0].line, 3);
    }

    #[test]
    fn continuation_after_header_is_dangling() {
        let report = build("[a]\nk: v\n[b]\n  orphan text\n");

        assert_eq!(report.document().get("a", "k"), Some(&Value::from("v")));
        assert!(report.document().section("b").is_some_and(|s| s.is_empty()));
        assert_eq!(kinds(&report), vec!["DanglingContinuation"]);
        assert_eq!(report.skipped_lines(), 1);
    }

    #[test]
    fn continuation_before_anything_is_dangling() {
        let report = build("  leading text\n[a]\n");
        assert_eq!(kinds(&report), vec!["DanglingContinuation"]);
    }

    #[test]
    fn blank_lines_do_not_reset_key() {
        let report = build("[a]\nk: one\n\n  two\n");
        assert_eq!(report.document().get("a", "k"), Some(&Value::from("one two")));
        assert!(report.diagnostics().is_empty());
    }

    #[test]
    fn orphan_key_value_goes_to_implicit_section() {
        let report = build("first: 1\nsecond: 2\n[a]\nk: v\n");
        let doc = report.document();

        assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["", "a"]);
        assert_eq!(doc.get("", "first"), Some(&Value::Integer(1)));
        assert_eq!(doc.get("", "second"), Some(&Value::Integer(2)));
        assert_eq!(kinds(&report), vec!["OrphanKeyValue", "OrphanKeyValue"]);
    }

    #[test]
    fn multiple_colons_split_on_first() {
        let report = build("[event]\ntime:12:30\n");

        assert_eq!(report.document().get("event", "time"), Some(&Value::from("12:30")));
        assert_eq!(
            report.diagnostics()[0].kind,
            DiagnosticKind::AmbiguousColonSplit {
                key: "time".into(),
                extra_colons: 1,
            }
        );
    }

    #[test]
    fn malformed_lines_are_counted_but_blank_lines_are_not() {
        let report = build("[a]\nnot a pair\n\n   \nk: v\n");

        assert_eq!(report.document().get("a", "k"), Some(&Value::from("v")));
        assert_eq!(kinds(&report), vec!["MalformedLine"]);
        assert_eq!(report.diagnostics()[0].line, 2);
        assert_eq!(report.skipped_lines(), 1);
    }

    #[test]
    fn empty_value_is_kept() {
        let report = build("[a]\nkey:\n");
        assert_eq!(report.document().get("a", "key"), Some(&Value::from("")));
    }

    #[test]
    fn values_are_coerced() {
        let report = build("[movie]\ntitle:A Red Furnace\nprice:10.4\nqty:5");
        let doc = report.document();

        assert_eq!(doc.get("movie", "title"), Some(&Value::from("A Red Furnace")));
        assert_eq!(doc.get("movie", "price"), Some(&Value::Float(10.4)));
        assert_eq!(doc.get("movie", "qty"), Some(&Value::Integer(5)));
    }
}
