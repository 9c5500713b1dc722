//! Generations of mission statements.
//!
//! This module drives a new generation from two parents through splicing,
//! definition emission, activation and rendering. It also keeps purely
//! in-memory lineages that skip the textual definition step.

pub mod pipeline;
pub mod lineage;

pub use pipeline::{GenerationOutcome, GenerationPipeline, PipelineStage};
pub use lineage::{Generation, Lineage};
