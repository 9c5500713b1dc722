//! Consistency checks between the grammar and a lexicon.

use crate::corpus::Lexicon;
use crate::grammar::PATTERNS;
use mission_core::{Error, Result};

/// Validate that every category named by a grammar pattern has a table
pub fn validate_lexicon(lexicon: &Lexicon) -> Result<()> {
    for (slots, pattern) in PATTERNS.iter().enumerate() {
        if let Some(missing) = pattern.iter().find(|c| !lexicon.contains(**c)) {
            return Err(Error::Validation(format!(
                "Pattern with {} slots uses category '{}' which has no instruction set",
                slots, missing
            )));
        }
    }

    Ok(())
}
