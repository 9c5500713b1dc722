//! Activation of stored definitions into live units.

use crate::entity::Entity;
use crate::seed::{self, SelfContainedMissionStatement};
use crate::statement::MissionStatement;
use crate::store::DefinitionStore;
use crate::template::parse_definition;
use mission_core::{DecoderConfig, Error, Result};

/// Builds a live unit from its name
pub trait ActivationService {
    fn activate(&self, name: &str) -> Result<Box<dyn Entity>>;
}

/// Activates units from definitions held in a store.
///
/// The seed identity resolves to the built-in seed unit unless the store
/// holds a definition under that name.
pub struct DefinitionLoader<S: DefinitionStore> {
    store: S,
    decoder: DecoderConfig,
}

impl<S: DefinitionStore> DefinitionLoader<S> {
    pub fn new(store: S, decoder: DecoderConfig) -> Self {
        Self { store, decoder }
    }

    /// Check a definition and build the unit it declares
    pub fn compile(&self, name: &str, definition: String) -> Result<MissionStatement> {
        let (identity, genome) = parse_definition(&definition)?;
        if identity != name {
            return Err(Error::Combination(format!(
                "definition stored as '{}' declares '{}'",
                name, identity
            )));
        }

        Ok(MissionStatement::new(identity, genome, self.decoder.clone()).with_source(definition))
    }
}

impl<S: DefinitionStore> ActivationService for DefinitionLoader<S> {
    fn activate(&self, name: &str) -> Result<Box<dyn Entity>> {
        match self.store.fetch(name) {
            Ok(definition) => {
                let unit = self.compile(name, definition)?;
                tracing::debug!(name, genome = %unit.genome(), "Activated unit");
                Ok(Box::new(unit))
            }
            Err(Error::NotFound(_)) if name == seed::IDENTITY => {
                Ok(Box::new(SelfContainedMissionStatement::new(self.decoder.clone())?))
            }
            Err(e) => Err(e),
        }
    }
}
