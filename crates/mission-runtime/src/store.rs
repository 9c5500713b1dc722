//! Storage for emitted unit definitions.

use crate::template::validate_identity;
use mission_core::{Error, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Named unit definitions
pub trait DefinitionStore {
    fn store(&self, name: &str, definition: &str) -> Result<()>;

    fn fetch(&self, name: &str) -> Result<String>;

    fn contains(&self, name: &str) -> bool {
        self.fetch(name).is_ok()
    }
}

impl<S: DefinitionStore + ?Sized> DefinitionStore for &S {
    fn store(&self, name: &str, definition: &str) -> Result<()> {
        (**self).store(name, definition)
    }

    fn fetch(&self, name: &str) -> Result<String> {
        (**self).fetch(name)
    }
}

impl<S: DefinitionStore + ?Sized> DefinitionStore for Arc<S> {
    fn store(&self, name: &str, definition: &str) -> Result<()> {
        (**self).store(name, definition)
    }

    fn fetch(&self, name: &str) -> Result<String> {
        (**self).fetch(name)
    }
}

/// Definitions kept in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    definitions: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.definitions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.read().is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.definitions.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl DefinitionStore for MemoryStore {
    fn store(&self, name: &str, definition: &str) -> Result<()> {
        validate_identity(name)?;
        let replaced = self
            .definitions
            .write()
            .insert(name.to_string(), definition.to_string());
        if replaced.is_some() {
            tracing::debug!("Replaced stored definition of {}", name);
        }
        Ok(())
    }

    fn fetch(&self, name: &str) -> Result<String> {
        self.definitions
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("definition '{}'", name)))
    }
}

/// Definitions kept as `<name>.rs` files in a directory
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    dir: PathBuf,
}

impl DirectoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.rs", name))
    }
}

impl DefinitionStore for DirectoryStore {
    fn store(&self, name: &str, definition: &str) -> Result<()> {
        validate_identity(name)?;
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(name);
        std::fs::write(&path, definition)?;
        tracing::debug!("Wrote definition to {}", path.display());
        Ok(())
    }

    fn fetch(&self, name: &str) -> Result<String> {
        validate_identity(name).map_err(|_| Error::NotFound(format!("definition '{}'", name)))?;
        let path = self.path_for(name);
        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound(format!("{}", path.display())),
            _ => Error::Io(e),
        })
    }
}
