pub mod document;
pub mod source;

pub use crate::types::identifiers::DocumentVersion;
pub use document::Document;
pub use source::{PlainTextSource, TextSource, PAGE_BREAK};
