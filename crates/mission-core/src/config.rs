//! Configuration types for splicing, decoding and generation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Splicer probabilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpliceConfig {
    /// Probability that a position is dropped from the child
    pub deletion_probability: f64,
    /// Base probability that a position is replaced by a random symbol
    pub replacement_probability: f64,
    /// Base threshold below which a copied symbol gains a random follower
    pub insertion_probability: f64,
}

impl Default for SpliceConfig {
    fn default() -> Self {
        Self {
            deletion_probability: 0.01,
            replacement_probability: 0.10,
            insertion_probability: 0.25,
        }
    }
}

impl SpliceConfig {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("deletion_probability", self.deletion_probability),
            ("replacement_probability", self.replacement_probability),
            ("insertion_probability", self.insertion_probability),
        ];
        for (name, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Validation(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// What the decoder does with a code below every key of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupPolicy {
    /// Fail with `Error::LookupUnderflow`
    Strict,
    /// Fall back to the smallest key and log a warning
    #[default]
    Saturate,
}

/// Decoder configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    pub lookup_policy: LookupPolicy,
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    pub splice: SpliceConfig,
    pub decoder: DecoderConfig,
    /// Seed for the splicer; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Directory holding emitted unit definitions
    pub definition_dir: String,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            splice: SpliceConfig::default(),
            decoder: DecoderConfig::default(),
            seed: None,
            definition_dir: ".".to_string(),
        }
    }
}

impl MissionConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.splice.validate()?;
        if self.definition_dir.is_empty() {
            return Err(Error::Validation("definition_dir must not be empty".to_string()));
        }
        Ok(())
    }
}
