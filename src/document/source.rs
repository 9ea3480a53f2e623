use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::document::Document;
use crate::types::AnalysisError;

/// Form feed, the page separator `pdftotext` writes between pages.
pub const PAGE_BREAK: char = '\u{000C}';

/// Produces the text of a paginated document, page by page.
pub trait TextSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>, AnalysisError>;

    fn load(&self, path: &Path) -> Result<Document, AnalysisError> {
        let pages = self.pages(path)?;
        Ok(Document::from_pages(path.display().to_string(), pages))
    }
}

/// Reads UTF-8 text files; pages are split on form feeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn pages(&self, path: &Path) -> Result<Vec<String>, AnalysisError> {
        let bytes = fs::read(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => AnalysisError::SourceNotFound(path.to_path_buf()),
            _ => AnalysisError::ExtractionFailure(format!("{}: {err}", path.display())),
        })?;

        let text = String::from_utf8(bytes)
            .map_err(|err| AnalysisError::ExtractionFailure(format!("{}: {err}", path.display())))?;

        // A trailing form feed closes the last page rather than opening an empty one.
        let body = text.strip_suffix(PAGE_BREAK).unwrap_or(&text);
        Ok(body.split(PAGE_BREAK).map(str::to_string).collect())
    }
}
