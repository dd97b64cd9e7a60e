pub mod continuation;
pub mod header;
pub mod key_value;

pub use continuation::ContinuationLine;
pub use header::HeaderLine;
pub use key_value::{KeyValue, KeyValueLine};
