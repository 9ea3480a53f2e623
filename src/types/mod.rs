pub mod analysis;
pub mod entity;
pub mod identifiers;
pub mod keyword;

pub use analysis::{AnalysisError, AnalysisReport, DocumentAnalysis, QuestionAnswer};
pub use entity::{Entity, EntityFrequency, EntityType};
pub use identifiers::DocumentVersion;
pub use keyword::Keyword;
