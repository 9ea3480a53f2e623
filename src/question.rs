use crate::config::AnalysisConfig;
use crate::types::EntityType;

pub const ORGANIZATION_TRIGGERS: &[&str] = &[
    "organisation", "unternehmen", "firma", "institut", "behörde", "verein", "gmbh", "kg", "ag",
];

pub const PERSON_TRIGGERS: &[&str] = &[
    "person", "name", "wer", "autor", "sprecher", "mitglied", "chef", "leiter", "direktor",
    "vorsitzender", "ceo",
];

/// Maps a question to the entity type it asks for.
///
/// Triggers are plain substrings of the lowercased question, so "wer" also
/// matches "werden". Organisation triggers are checked first: a question that
/// names both an organisation and a person asks for the organisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionClassifier {
    organization_triggers: Vec<String>,
    person_triggers: Vec<String>,
}

impl Default for QuestionClassifier {
    fn default() -> Self {
        Self::new(ORGANIZATION_TRIGGERS, PERSON_TRIGGERS)
    }
}

impl QuestionClassifier {
    pub fn new<S: AsRef<str>>(organization_triggers: &[S], person_triggers: &[S]) -> Self {
        let lowered = |triggers: &[S]| -> Vec<String> {
            triggers
                .iter()
                .map(|t| t.as_ref().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect()
        };
        Self {
            organization_triggers: lowered(organization_triggers),
            person_triggers: lowered(person_triggers),
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            config.organization_triggers.as_slice(),
            config.person_triggers.as_slice(),
        )
    }

    pub fn classify(&self, question: &str) -> Option<EntityType> {
        let question = question.to_lowercase();
        let mentions = |triggers: &[String]| triggers.iter().any(|t| question.contains(t.as_str()));

        if mentions(&self.organization_triggers) {
            Some(EntityType::Organization)
        } else if mentions(&self.person_triggers) {
            Some(EntityType::Person)
        } else {
            None
        }
    }
}
