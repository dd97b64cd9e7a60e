use anyhow::{Context, Result};
use sectionconf_config::WriterConfig;
use sectionconf_engine::{ConfigFile, FileStore, WriteOptions, coerce, serialize_with};
use std::io::Write;
use std::path::Path;

use crate::args::{Command, USAGE};

/// How a command ended, when it did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// `get` or `unset` named a key that is not there.
    NotFound { section: String, key: String },
    /// `check` found this many diagnostics.
    Diagnostics(usize),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Done => 0,
            Self::NotFound { .. } | Self::Diagnostics(_) => 1,
        }
    }
}

pub fn write_options(writer: &WriterConfig) -> WriteOptions {
    WriteOptions {
        blank_line_between_sections: writer.blank_line_between_sections,
        space_after_colon: writer.space_after_colon,
        continuation_indent: writer.continuation_indent,
    }
}

/// Runs `command` against the file at `path`, printing results to `out`.
pub fn run(command: &Command, path: &Path, writer: &WriterConfig, out: &mut impl Write) -> Result<Outcome> {
    if *command == Command::Help {
        writeln!(out, "{USAGE}")?;
        return Ok(Outcome::Done);
    }

    let options = write_options(writer);
    let mut file = ConfigFile::open(FileStore::new(path))
        .with_context(|| format!("cannot open {}", path.display()))?
        .with_write_options(options.clone());

    match command {
        Command::Headers => {
            for name in file.headers() {
                writeln!(out, "{name}")?;
            }
        }
        Command::Show => {
            write!(out, "{}", serialize_with(file.document(), &options))?;
        }
        Command::Get { section, key } => match file.document().get(section, key) {
            Some(value) => writeln!(out, "{value}")?,
            None => return Ok(not_found(section, key)),
        },
        Command::Set { section, key, value } => {
            let value = coerce(value);
            log::debug!("setting [{section}] {key:?} to {} {value}", value.type_name());
            file.document_mut().set(section, key.as_str(), value);
            file.save()
                .with_context(|| format!("cannot write {}", path.display()))?;
        }
        Command::Unset { section, key } => {
            if file.document_mut().remove(section, key).is_none() {
                return Ok(not_found(section, key));
            }
            file.save()
                .with_context(|| format!("cannot write {}", path.display()))?;
        }
        Command::Check => {
            for diagnostic in file.diagnostics() {
                writeln!(out, "{diagnostic}")?;
            }
            if !file.diagnostics().is_empty() {
                return Ok(Outcome::Diagnostics(file.diagnostics().len()));
            }
        }
        Command::Help => {}
    }

    Ok(Outcome::Done)
}

fn not_found(section: &str, key: &str) -> Outcome {
    Outcome::NotFound {
        section: section.to_owned(),
        key: key.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const MOVIE: &str = "[movie]\ntitle:A Red Furnace\nprice:10.4\nqty:5\n";

    fn setup(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.conf");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    fn exec(command: Command, path: &Path) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run(&command, path, &WriterConfig::default(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    fn get(section: &str, key: &str) -> Command {
        Command::Get {
            section: section.into(),
            key: key.into(),
        }
    }

    #[test]
    fn headers_lists_duplicates() {
        let (_dir, path) = setup("[a]\nk: 1\n[ meta data ]\n[a]\n");
        let (outcome, out) = exec(Command::Headers, &path);

        assert_eq!(outcome, Outcome::Done);
        assert_eq!(out, "a\nmeta data\na\n");
    }

    #[test]
    fn show_prints_normalized_document() {
        let (_dir, path) = setup(MOVIE);
        let (_, out) = exec(Command::Show, &path);
        assert_eq!(out, "[movie]\ntitle: A Red Furnace\nprice: 10.4\nqty: 5\n");
    }

    #[test]
    fn show_honours_writer_config() {
        let (_dir, path) = setup("[a]\nk: 1\n[b]\nk: 2\n");
        let writer = WriterConfig {
            blank_line_between_sections: false,
            space_after_colon: false,
            continuation_indent: 2,
        };
        let mut out = Vec::new();

        run(&Command::Show, &path, &writer, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "[a]\nk:1\n[b]\nk:2\n");
    }

    #[test]
    fn get_prints_canonical_value() {
        let (_dir, path) = setup(MOVIE);

        assert_eq!(exec(get("movie", "price"), &path).1, "10.4\n");
        assert_eq!(exec(get("movie", "title"), &path).1, "A Red Furnace\n");
    }

    #[test]
    fn get_missing_key_is_not_found() {
        let (_dir, path) = setup(MOVIE);
        let (outcome, out) = exec(get("movie", "director"), &path);

        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(
            outcome,
            Outcome::NotFound {
                section: "movie".into(),
                key: "director".into(),
            }
        );
        assert_eq!(out, "");
    }

    #[test]
    fn set_coerces_and_writes_back() {
        let (_dir, path) = setup(MOVIE);
        let command = Command::Set {
            section: "movie".into(),
            key: "qty".into(),
            value: "6".into(),
        };

        assert_eq!(exec(command, &path).0, Outcome::Done);

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[movie]\ntitle: A Red Furnace\nprice: 10.4\nqty: 6\n"
        );
        assert_eq!(exec(get("movie", "qty"), &path).1, "6\n");
    }

    #[test]
    fn set_creates_missing_section() {
        let (_dir, path) = setup(MOVIE);
        let command = Command::Set {
            section: "extras".into(),
            key: "director".into(),
            value: "Someone".into(),
        };

        exec(command, &path);

        assert_eq!(exec(Command::Headers, &path).1, "movie\nextras\n");
    }

    #[test]
    fn unset_removes_key() {
        let (_dir, path) = setup(MOVIE);
        let command = Command::Unset {
            section: "movie".into(),
            key: "price".into(),
        };

        assert_eq!(exec(command.clone(), &path).0, Outcome::Done);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[movie]\ntitle: A Red Furnace\nqty: 5\n"
        );
        assert_eq!(exec(command, &path).0.exit_code(), 1);
    }

    #[test]
    fn unset_missing_key_leaves_file_untouched() {
        let (_dir, path) = setup(MOVIE);
        let command = Command::Unset {
            section: "movie".into(),
            key: "director".into(),
        };

        exec(command, &path);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), MOVIE);
    }

    #[test]
    fn check_reports_diagnostics() {
        let (_dir, path) = setup("orphan: 1\n[a]\nbroken\n");
        let (outcome, out) = exec(Command::Check, &path);

        assert_eq!(outcome, Outcome::Diagnostics(2));
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(out.lines().count(), 2);
        assert!(out.starts_with("line 1: "));
        assert!(out.contains("line 3: "));
    }

    #[test]
    fn check_clean_file_is_done() {
        let (_dir, path) = setup(MOVIE);
        let (outcome, out) = exec(Command::Check, &path);

        assert_eq!(outcome, Outcome::Done);
        assert_eq!(out, "");
    }

    #[test]
    fn help_needs_no_file() {
        let (outcome, out) = exec(Command::Help, Path::new("/nonexistent/app.conf"));

        assert_eq!(outcome, Outcome::Done);
        assert!(out.starts_with("Usage: sectionconf"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.conf");
        let mut out = Vec::new();

        let err = run(&Command::Show, &path, &WriterConfig::default(), &mut out).unwrap_err();

        assert!(err.to_string().starts_with("cannot open"));
    }
}
