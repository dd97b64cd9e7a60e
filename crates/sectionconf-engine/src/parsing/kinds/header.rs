/// Section header line type with owned delimiter constants.
///
/// All header syntax knowledge lives here: the line must start with `[` in
/// column 0, may pad the name with non-word characters on either side, and
/// ends at the first `]` after the name. Anything after that `]` is ignored.
pub struct HeaderLine;

impl HeaderLine {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';

    /// Returns true when `line` (terminator already stripped) is a header.
    pub fn matches(line: &str) -> bool {
        Self::extract(line).is_some()
    }

    /// Extracts the header name.
    ///
    /// The name is a run of ASCII letters, digits and spaces starting and
    /// ending on a letter or digit. Interior spacing is kept as written.
    pub fn extract(line: &str) -> Option<&str> {
        let body = line.strip_prefix(Self::OPEN)?;

        // Leading padding is any run of non-word characters.
        let start = body.find(is_word_char)?;
        let run = &body[start..];
        let run_len = run.find(|c: char| !is_name_char(c)).unwrap_or(run.len());
        let name = run[..run_len].trim_end();
        if name.is_empty() {
            // The first word character (`_`, non-ASCII) cannot start a name.
            return None;
        }

        // Trailing padding must also be non-word characters up to the close.
        let rest = &run[name.len()..];
        let close = rest.find(Self::CLOSE)?;
        if rest[..close].contains(is_word_char) {
            return None;
        }

        Some(name)
    }

    /// Renders a header line (without terminator).
    pub fn render(name: &str) -> String {
        format!("{}{name}{}", Self::OPEN, Self::CLOSE)
    }

    /// Whether `name` survives a render/extract round trip unchanged.
    pub fn is_valid_name(name: &str) -> bool {
        Self::extract(&Self::render(name)) == Some(name)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' '
}
