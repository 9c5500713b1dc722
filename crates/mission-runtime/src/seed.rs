//! The seed unit.
//!
//! This file is its own definition template: new generations are emitted
//! by rewriting this source under a new identity and strand.

use crate::entity::{render_genome, Entity};
use crate::template::DefinitionTemplate;
use mission_core::{DecoderConfig, Genome, Result};
use mission_genome::Splice;
use std::io::Write;

/// Source text of this unit
pub const SOURCE: &str = include_str!("seed.rs");

pub const IDENTITY: &str = "SelfContainedMissionStatement";

const STRAND: &str = "GG";

pub struct SelfContainedMissionStatement {
    genome: Genome,
    decoder: DecoderConfig,
}

impl SelfContainedMissionStatement {
    pub fn new(decoder: DecoderConfig) -> Result<Self> {
        Ok(Self {
            genome: STRAND.parse()?,
            decoder,
        })
    }

    pub fn template() -> DefinitionTemplate {
        DefinitionTemplate::new(IDENTITY, SOURCE)
    }
}

impl Entity for SelfContainedMissionStatement {
    fn identity(&self) -> &str {
        IDENTITY
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
        Self::template().write_definition(name, &child, out)?;
        Ok(child)
    }
}
