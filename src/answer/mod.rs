pub mod selector;

pub use selector::AnswerSelector;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::EntityType;

/// Which retrieval phase produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerPhase {
    /// Sentences containing an entity of the question's target type.
    Entity,
    /// Sentences sharing at least one word with the question.
    Keyword,
    /// Neither phase matched; `text` is the no-answer sentinel.
    NoAnswer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub phase: AnswerPhase,
    /// Entity type the question was classified as, if any.
    pub target: Option<EntityType>,
    /// Positions of the answer sentences, ascending.
    pub sentence_indices: Vec<usize>,
}

impl Answer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn is_found(&self) -> bool {
        self.phase != AnswerPhase::NoAnswer
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
