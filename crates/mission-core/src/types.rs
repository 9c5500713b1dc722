//! Core type definitions for genomes.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationId(pub Uuid);

impl GenerationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GenerationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A decoded genome code
pub type Code = u32;

/// One of the four genome symbols, ordered by rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    G,
    A,
    T,
    C,
}

impl Symbol {
    /// All symbols in rank order
    pub const ALL: [Symbol; 4] = [Symbol::G, Symbol::A, Symbol::T, Symbol::C];

    /// Ordinal rank, 0 through 3
    pub fn rank(self) -> u8 {
        match self {
            Symbol::G => 0,
            Symbol::A => 1,
            Symbol::T => 2,
            Symbol::C => 3,
        }
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.get(rank as usize).copied()
    }

    /// Number of decimal digits in a code opened by this symbol
    pub fn digit_len(self) -> u32 {
        self.rank() as u32 + 1
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::G => 'G',
            Symbol::A => 'A',
            Symbol::T => 'T',
            Symbol::C => 'C',
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'G' => Ok(Symbol::G),
            'A' => Ok(Symbol::A),
            'T' => Ok(Symbol::T),
            'C' => Ok(Symbol::C),
            other => Err(Error::InvalidSymbol(other)),
        }
    }
}

impl TryFrom<u8> for Symbol {
    type Error = Error;

    fn try_from(b: u8) -> Result<Self> {
        Symbol::try_from(b as char)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An immutable sequence of symbols
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Genome {
    symbols: Vec<Symbol>,
}

impl Genome {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.symbols.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.symbols.iter().copied()
    }
}

impl FromIterator<Symbol> for Genome {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for Genome {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars().map(Symbol::try_from).collect()
    }
}

impl TryFrom<String> for Genome {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Genome> for String {
    fn from(genome: Genome) -> Self {
        genome.to_string()
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
