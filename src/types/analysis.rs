use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::answer::Answer;
use crate::entities::RecognitionError;
use crate::types::entity::{Entity, EntityFrequency};
use crate::types::identifiers::DocumentVersion;
use crate::types::keyword::Keyword;

/// Everything derived from one document, computed once and read by every question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    /// Descending by weight, at most `DEFAULT_KEYWORD_LIMIT` entries.
    pub keywords: Vec<Keyword>,
    /// Descending by count; ties keep first-seen order.
    pub entity_frequencies: Vec<EntityFrequency>,
    /// Document order.
    pub sentences: Vec<String>,
    /// Every mention of a desired type, unaggregated, in document order.
    pub filtered_entities: Vec<Entity>,
}

impl DocumentAnalysis {
    /// True when all four collections are empty.
    ///
    /// An empty analysis is also what `analyze_or_empty` returns on failure,
    /// so this alone cannot tell "nothing found" from "nothing analyzed".
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
            && self.entity_frequencies.is_empty()
            && self.sentences.is_empty()
            && self.filtered_entities.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Source document not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Text extraction failed: {0}")]
    ExtractionFailure(String),

    #[error("No terms left after stopword filtering")]
    EmptyCorpus,

    #[error("Entity recognition failed: {0}")]
    Recognition(#[from] RecognitionError),
}

/// One question and the answer given for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: Answer,
}

/// Serializable summary of a run over one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub source: String,
    pub version: DocumentVersion,
    pub generated_at: DateTime<Utc>, // informational only
    pub analysis: DocumentAnalysis,
    pub answers: Vec<QuestionAnswer>,
}
