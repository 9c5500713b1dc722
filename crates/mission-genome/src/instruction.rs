//! Sparse code-to-phrase tables with floor lookup.

use mission_core::{Code, Error, Result};

/// Phrases of one lexical category, keyed by ascending sparse codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionSet {
    category: String,
    keys: Vec<Code>,
    phrases: Vec<String>,
}

impl InstructionSet {
    /// Parse `<integer><phrase>` lines. Keys must already be strictly
    /// ascending; blank lines are skipped.
    pub fn parse(category: &str, data: &str) -> Result<Self> {
        let mut keys: Vec<Code> = Vec::new();
        let mut phrases = Vec::new();

        for (idx, line) in data.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let malformed = || Error::MalformedInstructionData {
                category: category.to_string(),
                line: idx + 1,
                text: line.to_string(),
            };

            // Split the leading key from its phrase
            let digits_end = line
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(line.len());
            if digits_end == 0 {
                return Err(malformed());
            }

            let key: Code = line[..digits_end].parse().map_err(|_| malformed())?;
            // Floor lookup needs strictly ascending keys
            if keys.last().is_some_and(|&last| last >= key) {
                return Err(malformed());
            }

            keys.push(key);
            phrases.push(line[digits_end..].to_string());
        }

        // A category with no phrases can never be looked up
        if keys.is_empty() {
            return Err(Error::MalformedInstructionData {
                category: category.to_string(),
                line: 0,
                text: String::new(),
            });
        }

        Ok(Self {
            category: category.to_string(),
            keys,
            phrases,
        })
    }

    pub fn keys(&self) -> &[Code] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn smallest_key(&self) -> Code {
        self.keys[0]
    }

    /// Phrase stored under the smallest key
    pub fn first_phrase(&self) -> &str {
        &self.phrases[0]
    }

    /// Phrase for the largest key that is less than or equal to `code`
    pub fn get(&self, code: Code) -> Result<&str> {
        let index = self.floor_index(code)?;
        Ok(&self.phrases[index])
    }

    /// Largest stored key that is less than or equal to `code`
    pub fn floor_key(&self, code: Code) -> Result<Code> {
        let index = self.floor_index(code)?;
        Ok(self.keys[index])
    }

    fn floor_index(&self, code: Code) -> Result<usize> {
        let smallest = self.smallest_key();
        if code < smallest {
            return Err(Error::LookupUnderflow {
                category: self.category.clone(),
                code,
                smallest,
            });
        }

        // Window is [min, max); keys[min] <= code holds throughout.
        let (mut min, mut max) = (0, self.keys.len());
        loop {
            let mid = (min + max) / 2;
            if self.keys[mid] == code {
                return Ok(mid);
            }
            if max == min + 1 {
                return Ok(min);
            }
            if self.keys[mid] > code {
                max = mid;
            } else {
                min = mid;
            }
        }
    }
}
