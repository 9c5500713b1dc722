//! Rewriting a unit definition under a new identity and genome.

use crate::seed;
use mission_core::{Error, Genome, Result};
use std::io::{self, Write};

/// Start of the strand declaration line; the quoted payload follows
const STRAND_MARKER: &str = "const STRAND: &str = \"";
const STRAND_END: &str = "\";";
const STRUCT_MARKER: &str = "pub struct ";

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Check that `name` can be used as a unit identity.
///
/// Besides being an identifier, the name must survive its own rewrite: a
/// definition written under it is renamed again when it breeds, so the
/// name may not occur inside the markers the rewriter looks for.
pub fn validate_identity(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let identifier = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if !identifier {
        return Err(Error::Combination(format!("'{}' is not a valid unit identity", name)));
    }

    if KEYWORDS.contains(&name) {
        return Err(Error::Combination(format!("'{}' is a reserved word", name)));
    }
    if [STRAND_MARKER, STRAND_END, STRUCT_MARKER]
        .iter()
        .any(|marker| marker.contains(name))
    {
        return Err(Error::Combination(format!(
            "'{}' clashes with the definition markers",
            name
        )));
    }
    Ok(())
}

/// Byte range of the strand payload within `line`, if it declares one
fn strand_payload(line: &str) -> Option<(usize, usize)> {
    let start = line.find(STRAND_MARKER)? + STRAND_MARKER.len();
    let end = start + line[start..].rfind(STRAND_END)?;
    Some((start, end))
}

/// Extract the declared identity and genome from a definition
pub fn parse_definition(definition: &str) -> Result<(String, Genome)> {
    let identity = definition
        .lines()
        .find_map(|line| line.trim_start().strip_prefix(STRUCT_MARKER))
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Error::Combination("definition declares no unit".to_string()))?;

    let strand = definition
        .lines()
        .find_map(|line| strand_payload(line).map(|(start, end)| &line[start..end]))
        .ok_or_else(|| {
            Error::Combination(format!("definition of '{}' has no strand declaration", identity))
        })?;

    let genome = strand.parse().map_err(|e| {
        Error::Combination(format!("definition of '{}' has an invalid strand: {}", identity, e))
    })?;

    Ok((identity, genome))
}

/// A `Write` adapter that rewrites a definition one line at a time.
///
/// Every occurrence of the old identity becomes the new identity, and the
/// strand declaration gets the new genome as its payload.
pub struct DefinitionRewriter<W: Write> {
    inner: W,
    old_identity: String,
    new_identity: String,
    strand: String,
    line: Vec<u8>,
    declarations: usize,
}

impl<W: Write> DefinitionRewriter<W> {
    pub fn new(inner: W, old_identity: &str, new_identity: &str, genome: &Genome) -> Result<Self> {
        validate_identity(new_identity)?;
        if old_identity.is_empty() {
            return Err(Error::Combination("template identity is empty".to_string()));
        }

        Ok(Self {
            inner,
            old_identity: old_identity.to_string(),
            new_identity: new_identity.to_string(),
            strand: genome.to_string(),
            line: Vec::new(),
            declarations: 0,
        })
    }

    /// Number of strand declarations rewritten so far
    pub fn declarations(&self) -> usize {
        self.declarations
    }

    /// Rewrite the trailing partial line and return the inner writer
    pub fn finish(mut self) -> Result<W> {
        if !self.line.is_empty() {
            let line = std::mem::take(&mut self.line);
            self.emit(&line)?;
        }
        self.inner.flush()?;

        if self.declarations == 0 {
            return Err(Error::Combination(format!(
                "no strand declaration found while defining '{}'",
                self.new_identity
            )));
        }
        Ok(self.inner)
    }

    fn emit(&mut self, raw: &[u8]) -> io::Result<()> {
        let text = std::str::from_utf8(raw)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let mut line = text.replace(&self.old_identity, &self.new_identity);

        if let Some((start, end)) = strand_payload(&line) {
            line.replace_range(start..end, &self.strand);
            self.declarations += 1;
        }

        self.inner.write_all(line.as_bytes())
    }
}

impl<W: Write> Write for DefinitionRewriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &byte in buf {
            if byte == b'\n' {
                let line = std::mem::take(&mut self.line);
                self.emit(&line)?;
                self.inner.write_all(b"\n")?;
            } else {
                self.line.push(byte);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// A reference definition and the identity token it is written under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionTemplate {
    identity: String,
    source: String,
}

impl DefinitionTemplate {
    pub fn new(identity: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            source: source.into(),
        }
    }

    /// The seed unit's own source
    pub fn standard() -> Self {
        Self::new(seed::IDENTITY, seed::SOURCE)
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Write the definition of unit `name` carrying `genome`
    pub fn write_definition<W: Write>(&self, name: &str, genome: &Genome, out: W) -> Result<W> {
        let mut rewriter = DefinitionRewriter::new(out, &self.identity, name, genome)?;
        rewriter.write_all(self.source.as_bytes())?;
        rewriter.finish()
    }

    pub fn rewrite(&self, name: &str, genome: &Genome) -> Result<String> {
        let bytes = self.write_definition(name, genome, Vec::new())?;
        String::from_utf8(bytes).map_err(|e| Error::Combination(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genome(text: &str) -> Genome {
        text.parse().unwrap()
    }

    fn sample() -> DefinitionTemplate {
        let source = [
            "// Parent unit",
            "pub struct Parent;",
            "impl Parent {",
            "    const STRAND: &str = \"GG\";",
            "    fn describe() -> &'static str { \"Parent, son of Parent\" }",
            "}",
        ]
        .join("\n");
        DefinitionTemplate::new("Parent", source)
    }

    #[test]
    fn test_rewrite_identity_and_strand() {
        let text = sample().rewrite("Child", &genome("GATC")).unwrap();

        assert!(text.contains("pub struct Child;"));
        assert!(text.contains("impl Child {"));
        assert!(text.contains("\"Child, son of Child\""));
        assert!(text.contains("const STRAND: &str = \"GATC\";"));
        assert!(!text.contains("Parent"));
        // untouched lines and the missing final newline survive
        assert!(text.starts_with("// Child unit\n"));
        assert!(text.ends_with('}'));
    }

    #[test]
    fn test_rewrite_to_empty_genome() {
        let text = sample().rewrite("Child", &Genome::empty()).unwrap();
        assert!(text.contains("const STRAND: &str = \"\";"));
        assert_eq!(parse_definition(&text).unwrap(), ("Child".to_string(), Genome::empty()));
    }

    #[test]
    fn test_missing_declaration_fails() {
        let template = DefinitionTemplate::new("Parent", "pub struct Parent;\n");
        let err = template.rewrite("Child", &genome("G")).unwrap_err();
        assert!(matches!(err, Error::Combination(_)));
    }

    #[test]
    fn test_invalid_identity_rejected() {
        for name in ["", "9Lives", "../escape", "two words"] {
            assert!(sample().rewrite(name, &genome("G")).is_err(), "{name:?}");
        }
        assert!(validate_identity("_Gen2").is_ok());
    }

    #[test]
    fn test_identity_must_survive_rewrite() {
        for name in ["A", "S", "T", "R", "STRAND", "str", "pub", "struct", "const", "fn", "Self"] {
            let err = validate_identity(name).unwrap_err();
            assert!(matches!(err, Error::Combination(_)), "{name:?}");
        }
        for name in ["Gen1", "Strand2", "Structure", "Ada"] {
            assert!(validate_identity(name).is_ok(), "{name:?}");
        }
    }

    #[test]
    fn test_accepted_identity_can_breed_again() {
        let first = DefinitionTemplate::standard()
            .rewrite("Ada", &genome("GA"))
            .unwrap();
        let second = DefinitionTemplate::new("Ada", first)
            .rewrite("Child", &genome("TC"))
            .unwrap();
        assert_eq!(parse_definition(&second).unwrap(), ("Child".to_string(), genome("TC")));
    }

    #[test]
    fn test_rewriter_handles_split_writes() {
        let template = sample();
        let mut rewriter =
            DefinitionRewriter::new(Vec::new(), "Parent", "Child", &genome("CC")).unwrap();
        for chunk in template.source().as_bytes().chunks(3) {
            rewriter.write_all(chunk).unwrap();
        }
        assert_eq!(rewriter.declarations(), 1);

        let out = String::from_utf8(rewriter.finish().unwrap()).unwrap();
        assert_eq!(out, template.rewrite("Child", &genome("CC")).unwrap());
    }

    #[test]
    fn test_standard_template_round_trips() {
        let template = DefinitionTemplate::standard();
        let text = template.rewrite("Generation2", &genome("ATTAC")).unwrap();
        let (identity, parsed) = parse_definition(&text).unwrap();
        assert_eq!(identity, "Generation2");
        assert_eq!(parsed, genome("ATTAC"));
        assert!(!text.contains(seed::IDENTITY));
    }

    #[test]
    fn test_parse_definition_errors() {
        assert!(parse_definition("fn main() {}").is_err());
        assert!(parse_definition("pub struct Lonely;").is_err());

        let bad_strand = "pub struct Odd;\nconst STRAND: &str = \"GXG\";\n";
        assert!(matches!(parse_definition(bad_strand), Err(Error::Combination(_))));
    }
}
