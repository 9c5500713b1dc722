//! An activated generation.

use crate::entity::{render_genome, Entity};
use crate::template::DefinitionTemplate;
use mission_core::{DecoderConfig, Genome, Result};
use mission_genome::Splice;
use std::io::Write;

/// A unit created from a spliced genome, either activated from a stored
/// definition or bred directly in memory
#[derive(Debug, Clone)]
pub struct MissionStatement {
    identity: String,
    genome: Genome,
    decoder: DecoderConfig,
    /// Definition this unit was activated from, if any
    source: Option<String>,
}

impl MissionStatement {
    pub fn new(identity: impl Into<String>, genome: Genome, decoder: DecoderConfig) -> Self {
        Self {
            identity: identity.into(),
            genome,
            decoder,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Template for this unit's offspring: its own definition when it has
    /// one, otherwise the seed's
    pub fn template(&self) -> DefinitionTemplate {
        match &self.source {
            Some(source) => DefinitionTemplate::new(self.identity.clone(), source.clone()),
            None => DefinitionTemplate::standard(),
        }
    }
}

impl Entity for MissionStatement {
    fn identity(&self) -> &str {
        &self.identity
    }

    fn genome(&self) -> &Genome {
        &self.genome
    }

    fn render(&self, out: &mut dyn Write) -> Result<()> {
        render_genome(&self.genome, &self.decoder, out)
    }

    fn derive_definition(
        &self,
        partner: &dyn Entity,
        name: &str,
        splicer: &mut dyn Splice,
        out: &mut dyn Write,
    ) -> Result<Genome> {
        let child = splicer.splice(&self.genome, partner.genome());
        self.template().write_definition(name, &child, out)?;
        Ok(child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::parse_definition;
    use mission_core::SpliceConfig;
    use mission_genome::Splicer;

    #[test]
    fn test_render_uses_own_genome() {
        let unit = MissionStatement::new("Gen1", "AGG".parse().unwrap(), DecoderConfig::default());
        let mut out = Vec::new();
        unit.render(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "We will commit to evolve.\n");
    }

    #[test]
    fn test_offspring_of_activated_unit() {
        let parent_text = DefinitionTemplate::standard()
            .rewrite("Gen1", &"ATC".parse().unwrap())
            .unwrap();
        let (identity, genome) = parse_definition(&parent_text).unwrap();
        let parent = MissionStatement::new(identity, genome, DecoderConfig::default())
            .with_source(parent_text);
        assert_eq!(parent.template().identity(), "Gen1");

        let mut splicer = Splicer::seeded(SpliceConfig::default(), 11);
        let mut out = Vec::new();
        let child = parent
            .derive_definition(&parent, "Gen2", &mut splicer, &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("Gen1"));
        assert_eq!(parse_definition(&text).unwrap(), ("Gen2".to_string(), child));
    }

    #[test]
    fn test_in_memory_unit_uses_seed_template() {
        let unit = MissionStatement::new("Bred", "G".parse().unwrap(), DecoderConfig::default());
        assert!(unit.source().is_none());
        assert_eq!(unit.template(), DefinitionTemplate::standard());
    }
}
