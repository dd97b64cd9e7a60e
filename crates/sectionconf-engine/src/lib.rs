pub mod editing;
pub mod io;
pub mod models;
pub mod parsing;
pub mod writing;

// Re-export key types for easier usage
pub use editing::ConfigFile;
pub use io::{FileStore, IoError, MemoryStore, TextSink, TextSource};
pub use models::{Document, Section, Value};
pub use parsing::{Diagnostic, DiagnosticKind, ParseReport, coerce, headers, parse, parse_with_report};
pub use writing::{WriteIssue, WriteOptions, check_writable, serialize, serialize_with};
