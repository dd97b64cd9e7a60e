//! Serializes a [`Document`] back into the bracket/colon format.
//!
//! Output is readable by the parser: parsing it reproduces the same
//! section/key/value triples, except that multi-line string values come
//! back joined with single spaces. Original formatting is not preserved.

use crate::{
    models::{Document, Section, Value},
    parsing::{
        coerce,
        kinds::{ContinuationLine, HeaderLine, KeyValueLine},
    },
};

/// Layout choices for serialized output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Emit an empty line before every header except the first line of output.
    pub blank_line_between_sections: bool,
    /// `key: value` rather than `key:value`.
    pub space_after_colon: bool,
    /// Spaces before each continuation line. Clamped to at least one.
    pub continuation_indent: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            blank_line_between_sections: true,
            space_after_colon: true,
            continuation_indent: 2,
        }
    }
}

/// Something in a document that will not survive a write/parse round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteIssue {
    /// The header would not parse back to this name.
    InvalidSectionName(String),
    /// The key line would not parse back to this key.
    InvalidKey { section: String, key: String },
    /// The value's text coerces to a different representation.
    TypeDrift {
        section: String,
        key: String,
        from: &'static str,
        to: &'static str,
    },
    /// The string will re-parse with different text: outer whitespace on a
    /// line is trimmed and blank lines are dropped.
    ContentDrift {
        section: String,
        key: String,
        reparsed: String,
    },
    /// The implicit section has no entries, so nothing is written for it.
    EmptyImplicitSection,
}

impl std::fmt::Display for WriteIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSectionName(name) => write!(f, "section name {name:?} will not re-parse"),
            Self::InvalidKey { section, key } => {
                write!(f, "key {key:?} in [{section}] will not re-parse")
            }
            Self::TypeDrift {
                section,
                key,
                from,
                to,
            } => write!(f, "[{section}] {key:?} is {from} but will re-parse as {to}"),
            Self::ContentDrift {
                section,
                key,
                reparsed,
            } => write!(f, "[{section}] {key:?} will re-parse as {reparsed:?}"),
            Self::EmptyImplicitSection => f.write_str("empty implicit section will not be written"),
        }
    }
}

/// Serializes with [`WriteOptions::default`].
pub fn serialize(doc: &Document) -> String {
    serialize_with(doc, &WriteOptions::default())
}

/// Serializes `doc`, sections in document order, keys in section order.
///
/// Entries of the implicit `""` section are written first with no header,
/// which is the only place the parser will put them back.
pub fn serialize_with(doc: &Document, options: &WriteOptions) -> String {
    let mut out = String::new();

    if let Some(implicit) = doc.section(Document::IMPLICIT_SECTION) {
        write_entries(&mut out, implicit, options);
    }

    for (name, section) in doc.sections().filter(|(name, _)| !name.is_empty()) {
        if options.blank_line_between_sections && !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&HeaderLine::render(name));
        out.push('\n');
        write_entries(&mut out, section, options);
    }

    out
}

fn write_entries(out: &mut String, section: &Section, options: &WriteOptions) {
    for (key, value) in section.iter() {
        let text = value.to_string();
        let mut lines = written_lines(&text);

        let first = lines.next().unwrap_or_default();
        out.push_str(&KeyValueLine::render(key, first, options.space_after_colon));
        out.push('\n');

        for rest in lines {
            out.push_str(&ContinuationLine::render(rest, options.continuation_indent));
            out.push('\n');
        }
    }
}

/// Lists everything in `doc` that [`serialize`] cannot write faithfully.
///
/// Line breaks in a string becoming single spaces is expected and not listed.
pub fn check_writable(doc: &Document) -> Vec<WriteIssue> {
    let mut issues = vec![];

    for (name, section) in doc.sections() {
        if name.is_empty() && section.is_empty() {
            issues.push(WriteIssue::EmptyImplicitSection);
        }
        if !name.is_empty() && !HeaderLine::is_valid_name(name) {
            issues.push(WriteIssue::InvalidSectionName(name.to_owned()));
        }
        for (key, value) in section.iter() {
            if !KeyValueLine::is_valid_key(key) {
                issues.push(WriteIssue::InvalidKey {
                    section: name.to_owned(),
                    key: key.to_owned(),
                });
            }
            let Value::String(s) = value else {
                continue;
            };
            let reparsed = reparsed_value(s);
            if reparsed.type_name() != value.type_name() {
                issues.push(WriteIssue::TypeDrift {
                    section: name.to_owned(),
                    key: key.to_owned(),
                    from: value.type_name(),
                    to: reparsed.type_name(),
                });
            } else if reparsed.to_string() != s.lines().collect::<Vec<_>>().join(" ") {
                issues.push(WriteIssue::ContentDrift {
                    section: name.to_owned(),
                    key: key.to_owned(),
                    reparsed: reparsed.to_string(),
                });
            }
        }
    }

    issues
}

/// The lines a value's text is written as: each trimmed, blanks dropped.
fn written_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// What the parser builds back from a written string.
fn reparsed_value(s: &str) -> Value {
    let lines: Vec<_> = written_lines(s).collect();
    match lines.as_slice() {
        [] => Value::String(String::new()),
        [single] => coerce(single),
        // Continuations always leave a string behind.
        _ => Value::String(lines.join(" ")),
    }
}
