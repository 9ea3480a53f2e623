//! Keyword extraction, entity ranking and entity-aware question answering for
//! a single document.
//!
//! `docqa-core` splits a document into sentences, ranks its terms by inverse
//! sentence frequency, counts organisation and person mentions, and answers
//! questions by returning the sentences most likely to contain the answer:
//! first by the entity type the question asks for, then by word overlap.
//! Tokenizer, term weighter and entity recognizer are injected collaborators.

pub mod answer;
pub mod config;
pub mod document;
pub mod entities;
pub mod keywords;
pub mod pipeline;
pub mod question;
pub mod text;
pub mod types;
pub mod weighting;

pub use answer::{Answer, AnswerPhase};
pub use config::{AnalysisConfig, NO_ANSWER};
pub use pipeline::Pipeline;
pub use types::{AnalysisError, DocumentAnalysis, Entity, EntityFrequency, EntityType, Keyword};
