//! Staging area
//!
//! The index holds the pending changes `commit` will apply on top of the last
//! snapshot. It is stored as text (see [`crate::artifacts::index`]) and
//! loaded lazily: the first read in a process parses the file, later reads use
//! the in-memory copy.
//!
//! Entries are written back sorted by path so the file content is stable.

use crate::artifacts::index::index_entry::IndexEntry;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.vcs/Index`)
    path: Box<Path>,
    entries: BTreeMap<String, IndexEntry>,
    /// Whether the file has been parsed in this process
    loaded: bool,
    /// Whether in-memory entries differ from the file
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            loaded: false,
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk unless it has already been loaded.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        if self.loaded {
            return Ok(());
        }

        self.entries.clear();
        self.changed = false;

        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)
                .with_context(|| format!("Unable to read index {}", self.path.display()))?;

            for line in content.lines().filter(|line| !line.is_empty()) {
                let entry = IndexEntry::parse_line(line)?;
                self.entries.insert(entry.name.clone(), entry);
            }
        }

        self.loaded = true;
        debug!(entries = self.entries.len(), "loaded index");

        Ok(())
    }

    pub fn entry_by_path(&self, path: &str) -> Option<&IndexEntry> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    pub fn paths(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stage an entry, replacing any previous entry for the same path.
    pub fn add(&mut self, entry: IndexEntry) {
        self.entries.insert(entry.name.clone(), entry);
        self.changed = true;
    }

    /// Unstage a path, returning the entry that was removed.
    pub fn remove(&mut self, path: &str) -> Option<IndexEntry> {
        let removed = self.entries.remove(path);
        if removed.is_some() {
            self.changed = true;
        }

        removed
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.changed = true;
        }
        self.entries.clear();
        self.loaded = true;
    }

    /// Flush the index to disk if anything changed.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let content = self
            .entries
            .values()
            .map(IndexEntry::to_line)
            .collect::<String>();

        std::fs::write(&self.path, content)
            .with_context(|| format!("Unable to write index {}", self.path.display()))?;
        self.changed = false;
        debug!(entries = self.entries.len(), "flushed index");

        Ok(())
    }
}
