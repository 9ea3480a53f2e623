use std::fmt;

use serde::{Deserialize, Serialize};

/// Label attached to a recognized entity.
///
/// Serialized as the CoNLL-style label (`"ORG"`, `"PER"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityType {
    Organization,
    Person,
    Location,
    Misc,
    Other(String),
}

impl EntityType {
    pub fn as_label(&self) -> &str {
        match self {
            EntityType::Organization => "ORG",
            EntityType::Person => "PER",
            EntityType::Location => "LOC",
            EntityType::Misc => "MISC",
            EntityType::Other(label) => label.as_str(),
        }
    }

    /// Labels are matched case-sensitively; unknown labels are kept verbatim.
    pub fn from_label(label: &str) -> Self {
        match label {
            "ORG" => EntityType::Organization,
            "PER" => EntityType::Person,
            "LOC" => EntityType::Location,
            "MISC" => EntityType::Misc,
            other => EntityType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl From<String> for EntityType {
    fn from(label: String) -> Self {
        EntityType::from_label(&label)
    }
}

impl From<EntityType> for String {
    fn from(entity_type: EntityType) -> Self {
        entity_type.as_label().to_string()
    }
}

/// A detected mention.
///
/// Equality is exact on both fields: no case folding, no whitespace trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
}

impl Entity {
    pub fn new(text: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            text: text.into(),
            entity_type,
        }
    }
}

/// A distinct entity and the number of times it was mentioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityFrequency {
    pub entity: Entity,
    pub count: usize,
}
