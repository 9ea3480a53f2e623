pub mod idf;

pub use idf::SmoothIdfWeighter;

use thiserror::Error;

use crate::types::Keyword;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightingError {
    #[error("Empty vocabulary: the corpus contains no weighable terms")]
    EmptyCorpus,
}

/// Assigns one weight to every distinct term of a sentence corpus.
pub trait TermWeighter {
    /// `sentences` are already normalized: lowercased, stopword-free, space-joined.
    fn weigh(&self, sentences: &[String]) -> Result<Vec<Keyword>, WeightingError>;
}
