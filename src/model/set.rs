//! Ordered variable set

use super::Entry;

/// Ordered collection of variable entries.
///
/// Order is first-seen order: new entries are appended, edits keep the
/// entry's position. Names are unique; uniqueness is enforced by the
/// callers ([`crate::store::Store`] and the parser), this type only
/// provides the mechanics.
#[derive(Debug, Clone, Default)]
pub struct VarSet {
    entries: Vec<Entry>,
}

impl VarSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// Append a new entry. The caller must have checked for duplicates.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Update an existing entry in place, returning the old value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        let idx = self.position(name)?;
        Some(std::mem::replace(&mut self.entries[idx].value, value.into()))
    }

    /// Update an existing entry in place, or append a new one.
    pub fn upsert(&mut self, entry: Entry) {
        match self.position(&entry.name) {
            Some(idx) => self.entries[idx].value = entry.value,
            None => self.entries.push(entry),
        }
    }

    /// Remove an entry by name, returning it along with its index.
    pub fn remove(&mut self, name: &str) -> Option<(usize, Entry)> {
        let idx = self.position(name)?;
        Some((idx, self.entries.remove(idx)))
    }

    /// Re-insert an entry at a given index (rollback path).
    pub fn insert_at(&mut self, idx: usize, entry: Entry) {
        let idx = idx.min(self.entries.len());
        self.entries.insert(idx, entry);
    }
}
