//! Summary of a rendered generation.

use crate::types::{Code, Genome, GenerationId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub id: GenerationId,
    pub identity: String,
    /// Identities of the left and right parents; empty for the seed unit
    pub parents: Vec<String>,
    pub genome: Genome,
    pub codes: Vec<Code>,
    pub sentence: String,
    pub created_at: DateTime<Utc>,
}

impl GenerationReport {
    pub fn new(
        identity: impl Into<String>,
        parents: Vec<String>,
        genome: Genome,
        codes: Vec<Code>,
        sentence: impl Into<String>,
    ) -> Self {
        Self {
            id: GenerationId::new(),
            identity: identity.into(),
            parents,
            genome,
            codes,
            sentence: sentence.into(),
            created_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
