//! Runtime for genome-bearing units.
//!
//! This module provides what a generation needs to exist as a unit:
//! - The `Entity` capability shared by every unit
//! - The seed unit, whose own source is the definition template
//! - Definition rewriting, storage and activation

pub mod entity;
pub mod seed;
pub mod statement;
pub mod template;
pub mod store;
pub mod loader;

pub use entity::{render_genome, Entity};
pub use seed::SelfContainedMissionStatement;
pub use statement::MissionStatement;
pub use template::{parse_definition, DefinitionRewriter, DefinitionTemplate};
pub use store::{DefinitionStore, DirectoryStore, MemoryStore};
pub use loader::{ActivationService, DefinitionLoader};
