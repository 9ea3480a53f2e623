use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash of the extracted document text.
///
/// Two analyses of documents with the same version are identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(String);

impl DocumentVersion {
    pub fn from_text(text: &str) -> Self {
        let digest = Sha256::digest(text.as_bytes());
        DocumentVersion(format!("sha256:{}", hex::encode(digest)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
