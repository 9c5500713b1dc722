//! Error types for genome decoding, splicing and generation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed instruction data in '{category}' at line {line}: {text:?}")]
    MalformedInstructionData {
        category: String,
        line: usize,
        text: String,
    },

    #[error("Lookup underflow in '{category}': code {code} is below the smallest key {smallest}")]
    LookupUnderflow {
        category: String,
        code: u32,
        smallest: u32,
    },

    #[error("Combination failed: {0}")]
    Combination(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid genome symbol: {0:?}")]
    InvalidSymbol(char),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
