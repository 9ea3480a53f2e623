use serde::{Deserialize, Serialize};

/// A term ranked by corpus-relative informativeness.
///
/// Higher weight means the term occurs in fewer sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub weight: f64,
}

impl Keyword {
    pub fn new(term: impl Into<String>, weight: f64) -> Self {
        Self {
            term: term.into(),
            weight,
        }
    }
}
