//! In-memory lineages.
//!
//! Breeding here splices straight into a new `MissionStatement` without
//! writing or activating any definition text.

use mission_core::{DecoderConfig, Error, GenerationId, Result};
use mission_genome::Splice;
use mission_runtime::seed::{self, SelfContainedMissionStatement};
use mission_runtime::template::validate_identity;
use mission_runtime::{Entity, MissionStatement};
use tracing::info;

/// One member of a lineage
#[derive(Debug, Clone)]
pub struct Generation {
    pub id: GenerationId,
    pub unit: MissionStatement,
    /// Left and right parent identities; empty for a founder
    pub parents: Vec<String>,
}

impl Generation {
    pub fn identity(&self) -> &str {
        self.unit.identity()
    }
}

/// Ordered generations, oldest first
#[derive(Debug, Clone)]
pub struct Lineage {
    generations: Vec<Generation>,
    decoder: DecoderConfig,
}

impl Lineage {
    pub fn new(decoder: DecoderConfig) -> Self {
        Self {
            generations: Vec::new(),
            decoder,
        }
    }

    /// A lineage founded by the seed unit
    pub fn from_seed(decoder: DecoderConfig) -> Result<Self> {
        let founder = SelfContainedMissionStatement::new(decoder.clone())?;
        let unit = MissionStatement::new(seed::IDENTITY, founder.genome().clone(), decoder.clone())
            .with_source(seed::SOURCE);

        let mut lineage = Self::new(decoder);
        lineage.push(unit, Vec::new())?;
        Ok(lineage)
    }

    /// Append an existing unit
    pub fn push(&mut self, unit: MissionStatement, parents: Vec<String>) -> Result<&Generation> {
        if self.get(unit.identity()).is_some() {
            return Err(Error::Validation(format!(
                "lineage already has a generation named '{}'",
                unit.identity()
            )));
        }

        self.generations.push(Generation {
            id: GenerationId::new(),
            unit,
            parents,
        });
        Ok(&self.generations[self.generations.len() - 1])
    }

    /// Splice generation `left` with generation `right` into a new one
    pub fn breed(
        &mut self,
        left: usize,
        right: usize,
        name: &str,
        splicer: &mut dyn Splice,
    ) -> Result<&Generation> {
        // Check parents and name before touching the RNG
        let count = self.generations.len();
        let (Some(l), Some(r)) = (self.generations.get(left), self.generations.get(right)) else {
            return Err(Error::Validation(format!(
                "parents {} and {} out of range for {} generations",
                left, right, count
            )));
        };
        validate_identity(name)?;
        if self.get(name).is_some() {
            return Err(Error::Validation(format!(
                "lineage already has a generation named '{}'",
                name
            )));
        }

        // Splice and record
        let child = splicer.splice(l.unit.genome(), r.unit.genome());
        let parents = vec![l.identity().to_string(), r.identity().to_string()];
        info!(name, left = %parents[0], right = %parents[1], genome = %child, "Bred generation");

        let unit = MissionStatement::new(name, child, self.decoder.clone());
        self.push(unit, parents)
    }

    pub fn latest(&self) -> Option<&Generation> {
        self.generations.last()
    }

    pub fn get(&self, name: &str) -> Option<&Generation> {
        self.generations.iter().find(|g| g.identity() == name)
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Generation> {
        self.generations.iter()
    }
}
