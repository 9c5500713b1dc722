//! Genome interpretation and recombination.
//!
//! A genome is read as a run of self-delimiting numeric codes. Each code is
//! looked up in a per-category instruction table, and the number of codes
//! picks the sentence grammar. New genomes come from splicing two parents
//! with position-dependent deletion, replacement and insertion.

pub mod instruction;
pub mod corpus;
pub mod grammar;
pub mod decoder;
pub mod splicer;
pub mod validation;

pub use instruction::InstructionSet;
pub use corpus::{Category, Lexicon};
pub use grammar::{pattern_for, PATTERNS};
pub use decoder::{decode, Decoder, MissionStatementWriter};
pub use splicer::{Splice, Splicer};
pub use validation::validate_lexicon;
