/// The key and value extracted from a key-value line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValue<'a> {
    /// Trimmed key.
    pub key: &'a str,
    /// Trimmed value, possibly empty.
    pub value: &'a str,
    /// Colons found after the first one. They belong to the value.
    pub extra_colons: usize,
}

/// Key-value line type with owned separator constant.
///
/// A key-value line starts with a non-whitespace character in column 0 and
/// is split on its *first* colon only: `time: 12:30` is key `time`, value
/// `12:30`. The key must be one or more words (letters, digits, `_`)
/// separated by spaces; the value is free text and may be empty.
pub struct KeyValueLine;

impl KeyValueLine {
    pub const SEPARATOR: char = ':';

    /// Returns true when `line` (terminator already stripped) is a key-value line.
    pub fn matches(line: &str) -> bool {
        Self::extract(line).is_some()
    }

    pub fn extract(line: &str) -> Option<KeyValue<'_>> {
        if !line.starts_with(|c: char| !c.is_whitespace()) {
            return None;
        }

        let (key, value) = line.split_once(Self::SEPARATOR)?;
        let key = key.trim();
        if !Self::is_valid_key(key) {
            return None;
        }

        Some(KeyValue {
            key,
            value: value.trim(),
            extra_colons: value.matches(Self::SEPARATOR).count(),
        })
    }

    /// Renders a key-value line (without terminator).
    pub fn render(key: &str, value: &str, space_after_separator: bool) -> String {
        if value.is_empty() || !space_after_separator {
            format!("{key}{}{value}", Self::SEPARATOR)
        } else {
            format!("{key}{} {value}", Self::SEPARATOR)
        }
    }

    /// Whether `key` is a trimmed, non-empty run of word characters and spaces.
    pub fn is_valid_key(key: &str) -> bool {
        !key.is_empty() && key.trim() == key && key.chars().all(is_key_char)
    }
}

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == ' '
}
