//! # Parsing
//!
//! Two-phase parsing of the sectioned key/value format.
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding local facts only: its span, whether it is blank, and its
//!    `LineKind` (header, key-value, continuation or unrecognized).
//! 2. **Document Construction** (`builder`): a `DocumentBuilder` folds the
//!    classified lines into a `Document`, tracking the current section and
//!    key, coercing values (`coerce`) and recording `Diagnostic`s.
//!
//! Column 0 is the governing rule of the format: a line that starts with
//! whitespace can only ever be a continuation.

pub mod builder;
pub mod classify;
pub mod coerce;
pub mod diagnostics;
pub mod kinds;
pub mod lines;
pub mod snapshot;
pub mod span;

pub use builder::{DocumentBuilder, ParseReport};
pub use classify::{LineClass, LineClassifier, LineKind};
pub use coerce::coerce;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use lines::{LineRef, lines_with_spans};
pub use span::Span;

use crate::models::Document;

use kinds::HeaderLine;

/// Parses `text` into a document, keeping the diagnostics.
pub fn parse_with_report(text: &str) -> ParseReport {
    let classifier = LineClassifier;
    let mut builder = DocumentBuilder::new();

    for lr in lines_with_spans(text) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    let report = builder.finish();
    log::debug!(
        "parsed {} section(s), {} diagnostic(s), {} line(s) skipped",
        report.document().len(),
        report.diagnostics().len(),
        report.skipped_lines()
    );
    report
}

/// Parses `text` into a document.
pub fn parse(text: &str) -> Document {
    parse_with_report(text).into_document()
}

/// Header names in source order, duplicates included.
pub fn headers(text: &str) -> Vec<String> {
    lines_with_spans(text)
        .filter_map(|lr| HeaderLine::extract(lr.content()))
        .map(str::to_owned)
        .collect()
}
