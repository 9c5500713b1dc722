//! The generation pipeline: combine, emit, activate, render.

use mission_core::{Error, GenerationReport, Genome, Result};
use mission_genome::{decode, Splice};
use mission_runtime::{ActivationService, DefinitionStore, Entity};
use std::fmt;
use std::io::Write;
use tracing::{info, instrument};

/// Observable position of a pipeline in its state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    GenomeCombined,
    DefinitionEmitted,
    Activated,
    Rendered,
    /// A transition failed; the pipeline cannot continue
    Failed,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Idle => "idle",
            PipelineStage::GenomeCombined => "genome combined",
            PipelineStage::DefinitionEmitted => "definition emitted",
            PipelineStage::Activated => "activated",
            PipelineStage::Rendered => "rendered",
            PipelineStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

enum PipelineState {
    Idle,
    GenomeCombined { child: Genome, definition: Vec<u8> },
    DefinitionEmitted { child: Genome },
    Activated { child: Genome, entity: Box<dyn Entity> },
    Rendered,
    Failed,
}

impl PipelineState {
    fn stage(&self) -> PipelineStage {
        match self {
            PipelineState::Idle => PipelineStage::Idle,
            PipelineState::GenomeCombined { .. } => PipelineStage::GenomeCombined,
            PipelineState::DefinitionEmitted { .. } => PipelineStage::DefinitionEmitted,
            PipelineState::Activated { .. } => PipelineStage::Activated,
            PipelineState::Rendered => PipelineStage::Rendered,
            PipelineState::Failed => PipelineStage::Failed,
        }
    }
}

/// Result of a rendered generation
pub struct GenerationOutcome {
    pub identity: String,
    /// Left and right parent identities
    pub parents: Vec<String>,
    pub genome: Genome,
    pub sentence: String,
    pub entity: Box<dyn Entity>,
}

impl GenerationOutcome {
    pub fn report(&self) -> GenerationReport {
        GenerationReport::new(
            self.identity.clone(),
            self.parents.clone(),
            self.genome.clone(),
            decode(&self.genome),
            self.sentence.clone(),
        )
    }
}

/// Drives one new generation named `name`.
///
/// Each transition consumes the previous state. If a transition fails the
/// pipeline is left in `Failed` and every further call is rejected.
pub struct GenerationPipeline<'a> {
    name: String,
    store: &'a dyn DefinitionStore,
    activator: &'a dyn ActivationService,
    parents: Vec<String>,
    state: PipelineState,
}

impl<'a> GenerationPipeline<'a> {
    pub fn new(
        name: impl Into<String>,
        store: &'a dyn DefinitionStore,
        activator: &'a dyn ActivationService,
    ) -> Self {
        Self {
            name: name.into(),
            store,
            activator,
            parents: Vec::new(),
            state: PipelineState::Idle,
        }
    }

    pub fn stage(&self) -> PipelineStage {
        self.state.stage()
    }

    /// Child genome, once combined and until rendered
    pub fn child(&self) -> Option<&Genome> {
        match &self.state {
            PipelineState::GenomeCombined { child, .. }
            | PipelineState::DefinitionEmitted { child }
            | PipelineState::Activated { child, .. } => Some(child),
            _ => None,
        }
    }

    fn take_state(&mut self, expected: PipelineStage) -> Result<PipelineState> {
        let stage = self.stage();
        if stage != expected {
            return Err(self.out_of_order(stage, expected));
        }
        Ok(std::mem::replace(&mut self.state, PipelineState::Failed))
    }

    fn out_of_order(&self, stage: PipelineStage, expected: PipelineStage) -> Error {
        Error::InvalidState(format!(
            "generation '{}' is {}, expected {}",
            self.name, stage, expected
        ))
    }

    /// Splice `left` with `right` and draft the child's definition
    pub fn combine(
        &mut self,
        left: &dyn Entity,
        right: &dyn Entity,
        splicer: &mut dyn Splice,
    ) -> Result<()> {
        self.take_state(PipelineStage::Idle)?;
        info!(left = left.identity(), right = right.identity(), "Combining genomes");

        let mut definition = Vec::new();
        let child = left.derive_definition(right, &self.name, splicer, &mut definition)?;
        info!(genome = %child, len = child.len(), "Spliced child genome");

        self.parents = vec![left.identity().to_string(), right.identity().to_string()];
        self.state = PipelineState::GenomeCombined { child, definition };
        Ok(())
    }

    /// Persist the drafted definition under the new identity
    pub fn emit(&mut self) -> Result<()> {
        let PipelineState::GenomeCombined { child, definition } =
            self.take_state(PipelineStage::GenomeCombined)?
        else {
            return Err(self.out_of_order(PipelineStage::Failed, PipelineStage::GenomeCombined));
        };

        let text = String::from_utf8(definition).map_err(|e| Error::Combination(e.to_string()))?;
        self.store.store(&self.name, &text)?;
        info!(name = %self.name, bytes = text.len(), "Emitted definition");

        self.state = PipelineState::DefinitionEmitted { child };
        Ok(())
    }

    /// Build the emitted definition into a live unit
    pub fn activate(&mut self) -> Result<()> {
        let PipelineState::DefinitionEmitted { child } =
            self.take_state(PipelineStage::DefinitionEmitted)?
        else {
            return Err(self.out_of_order(PipelineStage::Failed, PipelineStage::DefinitionEmitted));
        };

        let entity = self.activator.activate(&self.name)?;
        if entity.genome() != &child {
            return Err(Error::Combination(format!(
                "activated '{}' carries {} instead of {}",
                self.name,
                entity.genome(),
                child
            )));
        }
        info!(name = %self.name, "Activated generation");

        self.state = PipelineState::Activated { child, entity };
        Ok(())
    }

    /// Render the activated unit into `out`
    pub fn render(&mut self, out: &mut dyn Write) -> Result<GenerationOutcome> {
        let PipelineState::Activated { child, entity } =
            self.take_state(PipelineStage::Activated)?
        else {
            return Err(self.out_of_order(PipelineStage::Failed, PipelineStage::Activated));
        };

        let mut buf = Vec::new();
        entity.render(&mut buf)?;
        out.write_all(&buf)?;
        out.flush()?;
        let sentence = String::from_utf8(buf).map_err(|e| Error::Serialization(e.to_string()))?;
        info!(name = %self.name, "Rendered generation");

        self.state = PipelineState::Rendered;
        Ok(GenerationOutcome {
            identity: self.name.clone(),
            parents: std::mem::take(&mut self.parents),
            genome: child,
            sentence,
            entity,
        })
    }

    /// Run every transition in order
    #[instrument(skip_all, fields(name = %self.name))]
    pub fn run(
        mut self,
        left: &dyn Entity,
        right: &dyn Entity,
        splicer: &mut dyn Splice,
        out: &mut dyn Write,
    ) -> Result<GenerationOutcome> {
        self.combine(left, right, splicer)?;
        self.emit()?;
        self.activate()?;
        self.render(out)
    }
}
