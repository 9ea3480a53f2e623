use serde::{Deserialize, Serialize};

use crate::types::identifiers::DocumentVersion;

/// Raw text extracted from one source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub version: DocumentVersion,
    pub source: String,
    pub text: String,
    pub page_count: usize,
}

impl Document {
    /// Concatenate extracted pages in order, one newline between pages.
    pub fn from_pages(source: impl Into<String>, pages: Vec<String>) -> Self {
        let page_count = pages.len();
        let text = pages.join("\n");
        let version = DocumentVersion::from_text(&text);

        Document {
            version,
            source: source.into(),
            text,
            page_count,
        }
    }
}
