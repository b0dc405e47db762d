//! Persistent variable store
//!
//! Binds a [`VarSet`] to a file path. Every mutation is write-through:
//! the change is applied in memory, flushed to disk, and rolled back if
//! the flush fails, so the in-memory set and the file never diverge.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::{is_valid_name, Entry, VarSet};
use crate::parser;
use crate::utils::path::write_atomic;

#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    vars: VarSet,
}

impl Store {
    /// Open a store for the given file.
    ///
    /// A missing file yields an empty set; the file is created lazily on
    /// the first flush.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let vars = if path.exists() {
            parser::parse(&std::fs::read_to_string(&path)?)?
        } else {
            VarSet::new()
        };
        Ok(Self { path, vars })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries in first-seen order.
    pub fn list(&self) -> &[Entry] {
        self.vars.entries()
    }

    /// Snapshot of the current names, for the completion provider.
    pub fn names(&self) -> Vec<String> {
        self.vars.names()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains(name)
    }

    pub fn get(&self, name: &str) -> Result<&str> {
        self.vars
            .get(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Append a new variable and persist.
    pub fn add(&mut self, name: &str, value: &str) -> Result<()> {
        if !is_valid_name(name) {
            return Err(Error::InvalidName(name.to_string()));
        }
        if self.vars.contains(name) {
            return Err(Error::Duplicate(name.to_string()));
        }

        self.vars.push(Entry::new(name, value));
        if let Err(err) = self.flush() {
            self.vars.remove(name);
            return Err(err);
        }
        Ok(())
    }

    /// Update an existing variable in place (position unchanged) and persist.
    pub fn edit(&mut self, name: &str, new_value: &str) -> Result<()> {
        let old = self
            .vars
            .set(name, new_value)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        if let Err(err) = self.flush() {
            self.vars.set(name, old);
            return Err(err);
        }
        Ok(())
    }

    /// Remove a variable and persist.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let (idx, entry) = self
            .vars
            .remove(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        if let Err(err) = self.flush() {
            self.vars.insert_at(idx, entry);
            return Err(err);
        }
        Ok(())
    }

    /// Write the current set to disk atomically. Safe to call at any time;
    /// rewriting an unchanged set is a no-op from the reader's perspective.
    pub fn flush(&self) -> Result<()> {
        write_atomic(&self.path, &parser::serialize(&self.vars))
    }
}
