pub mod document;
pub mod section;
pub mod value;

pub use document::Document;
pub use section::Section;
pub use value::Value;
