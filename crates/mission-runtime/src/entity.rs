//! The capability every genome-bearing unit exposes.

use mission_core::{DecoderConfig, Genome, Result};
use mission_genome::{Decoder, Lexicon, MissionStatementWriter, Splice};
use std::io::Write;

/// A unit that carries a genome
pub trait Entity {
    /// Name this unit was defined under
    fn identity(&self) -> &str;

    fn genome(&self) -> &Genome;

    /// Write this unit's mission statement
    fn render(&self, out: &mut dyn Write) -> Result<()>;

    /// Splice this genome (left) with `partner`'s (right) and write the
    /// definition of a new unit called `name` carrying the child genome.
    fn derive_definition(
        &self,
        partner: &dyn Entity,
        name: &str,
        splicer: &mut dyn Splice,
        out: &mut dyn Write,
    ) -> Result<Genome>;
}

/// Stream genome text through a mission statement writer into `out`
pub fn render_genome(genome: &Genome, config: &DecoderConfig, out: &mut dyn Write) -> Result<()> {
    let decoder = Decoder::new(Lexicon::standard()?, config);
    let mut writer = MissionStatementWriter::new(out, decoder);
    writer.write_all(genome.to_string().as_bytes())?;
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_genome() {
        let mut out = Vec::new();
        render_genome(&"GG".parse().unwrap(), &DecoderConfig::default(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Our mission is to evolve.\n");
    }

    #[test]
    fn test_render_empty_genome_writes_nothing() {
        let mut out = Vec::new();
        render_genome(&Genome::empty(), &DecoderConfig::default(), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
