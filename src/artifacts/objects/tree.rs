//! Tree object
//!
//! A tree is a flat snapshot: every tracked file's repository-relative path
//! (forward slashes) mapped to the address of its blob. There are no nested
//! subtrees, so restoring a snapshot never needs more than one tree read.
//!
//! ## Format
//!
//! ```text
//! <path> <address>\n
//! ```
//!
//! Lines are sorted by path, which makes the serialization (and therefore the
//! address) canonical for a given mapping. Paths may contain spaces; the
//! address is always the last 40 characters of the line.

use crate::artifacts::index::index_entry::{EntryState, IndexEntry};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::BufRead;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<String, ObjectId>,
}

impl Tree {
    pub fn new(entries: BTreeMap<String, ObjectId>) -> Self {
        Tree { entries }
    }

    pub fn get(&self, path: &str) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn insert(&mut self, path: String, oid: ObjectId) {
        self.entries.insert(path, oid);
    }

    pub fn remove(&mut self, path: &str) -> Option<ObjectId> {
        self.entries.remove(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &ObjectId)> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Paths at or below `prefix` (a repository-relative directory or file).
    pub fn paths_under<'t>(&'t self, prefix: &'t str) -> impl Iterator<Item = &'t String> + 't {
        self.entries
            .keys()
            .filter(move |path| is_at_or_below(path, prefix))
    }

    /// Build the next snapshot by applying staged entries on top of this one.
    ///
    /// ADDED and MODIFIED entries overwrite or insert; REMOVED entries delete.
    pub fn apply<'e>(&self, staged: impl Iterator<Item = &'e IndexEntry>) -> anyhow::Result<Self> {
        let mut next = self.clone();

        for entry in staged {
            match (&entry.state, &entry.oid) {
                (EntryState::Removed, _) => {
                    next.remove(&entry.name);
                }
                (EntryState::Added | EntryState::Modified, Some(oid)) => {
                    next.insert(entry.name.clone(), oid.clone());
                }
                (state, None) => {
                    anyhow::bail!("{state:?} entry for {} carries no address", entry.name)
                }
            }
        }

        Ok(next)
    }
}

/// `prefix` of `""` or `"."` matches everything.
pub fn is_at_or_below(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() || prefix == "." {
        return true;
    }

    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content = self
            .entries
            .iter()
            .map(|(path, oid)| format!("{path} {oid}\n"))
            .collect::<String>();

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut entries = BTreeMap::new();

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let split = line
                .len()
                .checked_sub(OBJECT_ID_LENGTH + 1)
                .filter(|split| *split > 0)
                .with_context(|| format!("Invalid tree entry: {line:?}"))?;
            let (path, tail) = line
                .split_at_checked(split)
                .with_context(|| format!("Invalid tree entry: {line:?}"))?;
            let oid = tail
                .strip_prefix(' ')
                .with_context(|| format!("Invalid tree entry: {line:?}"))?;

            entries.insert(path.to_string(), ObjectId::try_parse(oid.to_string())?);
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {}
