use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: sectionconf [-f|--file PATH] <command> [args...]

Commands:
  headers                  list header names in source order
  show                     print the parsed document
  get <section> <key>      print one value
  set <section> <key> <v>  store a value and write the file back
  unset <section> <key>    remove a key and write the file back
  check                    print diagnostics, one per line

Without --file, `default_file` from the config file is used.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Headers,
    Show,
    Get { section: String, key: String },
    Set { section: String, key: String, value: String },
    Unset { section: String, key: String },
    Check,
    Help,
}

impl Command {
    fn from_words(name: &str, mut rest: Vec<String>) -> Result<Self, UsageError> {
        let expected = match name {
            "headers" | "show" | "check" => 0,
            "get" | "unset" => 2,
            "set" => 3,
            other => return Err(UsageError::UnknownCommand(other.to_owned())),
        };
        if rest.len() != expected {
            return Err(UsageError::WrongArity {
                command: name.to_owned(),
                expected,
                found: rest.len(),
            });
        }

        let mut next = || rest.remove(0);
        Ok(match name {
            "headers" => Self::Headers,
            "show" => Self::Show,
            "check" => Self::Check,
            "get" => Self::Get {
                section: next(),
                key: next(),
            },
            "unset" => Self::Unset {
                section: next(),
                key: next(),
            },
            _ => Self::Set {
                section: next(),
                key: next(),
                value: next(),
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("no command given")]
    MissingCommand,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' needs a value")]
    MissingOptionValue(String),
    #[error("'{command}' takes {expected} argument(s), got {found}")]
    WrongArity {
        command: String,
        expected: usize,
        found: usize,
    },
    #[error("no file given and no default_file in {0}")]
    NoFile(PathBuf),
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub file: Option<PathBuf>,
    pub command: Command,
}

impl Invocation {
    /// Parses arguments, program name excluded.
    ///
    /// Options are only recognized before the command word; everything after
    /// it is positional, so values may start with `-`.
    pub fn parse<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut file = None;

        let name = loop {
            let Some(arg) = args.next() else {
                return Err(UsageError::MissingCommand);
            };
            match arg.as_str() {
                "-f" | "--file" => {
                    let path = args.next().ok_or(UsageError::MissingOptionValue(arg))?;
                    file = Some(PathBuf::from(path));
                }
                "-h" | "--help" => {
                    return Ok(Self {
                        file,
                        command: Command::Help,
                    });
                }
                _ if arg.starts_with("--file=") => {
                    file = Some(PathBuf::from(&arg["--file=".len()..]));
                }
                _ if arg.starts_with('-') && arg.len() > 1 => {
                    return Err(UsageError::UnknownOption(arg));
                }
                _ => break arg,
            }
        };

        let command = Command::from_words(&name, args.collect())?;
        Ok(Self { file, command })
    }
}
