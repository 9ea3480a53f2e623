pub mod aggregate;
pub mod recognizer;

pub use aggregate::{aggregate_entities, EntityAggregate};
pub use recognizer::{EntityRecognizer, PatternRecognizer, RecognitionError};
