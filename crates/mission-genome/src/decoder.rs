//! Genome to mission statement decoding.

use crate::corpus::{Category, Lexicon};
use crate::grammar::pattern_for;
use mission_core::{Code, DecoderConfig, Error, Genome, LookupPolicy, Result, Symbol};
use std::io::{self, Write};

/// Builds self-delimiting codes one symbol at a time.
///
/// A symbol that opens a code sets its leading digit to its own digit
/// length (1, 20, 300 or 4000), so codes opened by the same symbol always
/// have the same width. Following symbols fill the lower digits.
#[derive(Debug, Clone, Default)]
pub struct CodeAccumulator {
    codes: Vec<Code>,
    remaining: u32,
}

impl CodeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, symbol: Symbol) {
        let len = symbol.digit_len();
        if self.remaining == 0 {
            self.codes.push(len * 10u32.pow(len - 1));
            self.remaining = len;
        } else if let Some(current) = self.codes.last_mut() {
            *current += len * 10u32.pow(self.remaining - 1);
        }
        self.remaining -= 1;
    }

    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// True when the last code still expects more symbols
    pub fn is_partial(&self) -> bool {
        self.remaining > 0
    }

    pub fn take(&mut self) -> Vec<Code> {
        self.remaining = 0;
        std::mem::take(&mut self.codes)
    }
}

/// Decode a genome into its codes
pub fn decode(genome: &Genome) -> Vec<Code> {
    let mut acc = CodeAccumulator::new();
    for symbol in genome.iter() {
        acc.push(symbol);
    }
    acc.take()
}

/// Renders codes as sentences using a lexicon
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    lexicon: &'a Lexicon,
    policy: LookupPolicy,
}

impl<'a> Decoder<'a> {
    pub fn new(lexicon: &'a Lexicon, config: &DecoderConfig) -> Self {
        Self {
            lexicon,
            policy: config.lookup_policy,
        }
    }

    /// Phrase for `code` in `category`, applying the underflow policy
    pub fn phrase(&self, category: Category, code: Code) -> Result<&'a str> {
        let set = self.lexicon.get(category).ok_or_else(|| {
            Error::Validation(format!("No instruction set for category '{}'", category))
        })?;

        match set.get(code) {
            Err(Error::LookupUnderflow { smallest, .. })
                if self.policy == LookupPolicy::Saturate =>
            {
                tracing::warn!(
                    category = %category,
                    code,
                    smallest,
                    "Code below smallest key, using first phrase"
                );
                Ok(set.first_phrase())
            }
            other => other,
        }
    }

    /// Write the sentence for `codes`. Nothing is written for zero codes.
    pub fn render_codes<W: Write + ?Sized>(&self, codes: &[Code], out: &mut W) -> Result<()> {
        let pattern = pattern_for(codes.len());
        for (index, (category, code)) in pattern.iter().zip(codes).enumerate() {
            let phrase = self.phrase(*category, *code)?;
            out.write_all(phrase.as_bytes())?;
            if index + 1 != pattern.len() {
                out.write_all(b" ")?;
            } else {
                out.write_all(b".\n")?;
            }
        }
        Ok(())
    }

    pub fn render<W: Write + ?Sized>(&self, genome: &Genome, out: &mut W) -> Result<()> {
        self.render_codes(&decode(genome), out)
    }

    pub fn sentence(&self, genome: &Genome) -> Result<String> {
        let mut buf = Vec::new();
        self.render(genome, &mut buf)?;
        String::from_utf8(buf).map_err(|e| Error::Serialization(e.to_string()))
    }
}

/// A byte sink that reads genome text and writes a mission statement.
///
/// Symbols accumulate until `flush`, which renders one sentence to the inner
/// writer and starts over.
pub struct MissionStatementWriter<'a, W: Write> {
    inner: W,
    decoder: Decoder<'a>,
    acc: CodeAccumulator,
}

impl<'a, W: Write> MissionStatementWriter<'a, W> {
    pub fn new(inner: W, decoder: Decoder<'a>) -> Self {
        Self {
            inner,
            decoder,
            acc: CodeAccumulator::new(),
        }
    }

    pub fn codes(&self) -> &[Code] {
        self.acc.codes()
    }

    /// Render any pending sentence and hand back the inner writer
    pub fn finish(mut self) -> Result<W> {
        self.render_pending()?;
        self.inner.flush()?;
        Ok(self.inner)
    }

    fn render_pending(&mut self) -> Result<()> {
        let codes = self.acc.take();
        self.decoder.render_codes(&codes, &mut self.inner)
    }
}

impl<W: Write> Write for MissionStatementWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &byte in buf {
            if byte == b'\n' {
                continue;
            }
            let symbol = Symbol::try_from(byte)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            self.acc.push(symbol);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.render_pending().map_err(|e| match e {
            Error::Io(io_err) => io_err,
            other => io::Error::new(io::ErrorKind::Other, other),
        })?;
        self.inner.flush()
    }
}
