use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::question::{ORGANIZATION_TRIGGERS, PERSON_TRIGGERS};

pub const NO_ANSWER: &str = "no answer found";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables of answering.
///
/// Missing fields in a config file fall back to `AnalysisConfig::v0()`. The keyword
/// bound and the kept entity types are fixed and cannot be configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub no_answer: String,
    pub organization_triggers: Vec<String>,
    pub person_triggers: Vec<String>,
}

impl AnalysisConfig {
    pub fn v0() -> Self {
        Self {
            no_answer: NO_ANSWER.to_string(),
            organization_triggers: ORGANIZATION_TRIGGERS.iter().map(|t| t.to_string()).collect(),
            person_triggers: PERSON_TRIGGERS.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::v0()
    }
}
