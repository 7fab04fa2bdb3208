//! Index entry representation
//!
//! Each entry is a pending change to one repository-relative path: the blob
//! address it should point at in the next commit and whether the change adds,
//! modifies or removes the path.

use crate::artifacts::index::{ENTRY_TAIL_LENGTH, REMOVED_SENTINEL};
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::VcsError;

/// State of a staged change, stored on disk as a single digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryState {
    Modified,
    Added,
    Removed,
}

impl EntryState {
    pub fn as_digit(&self) -> char {
        match self {
            EntryState::Modified => '0',
            EntryState::Added => '1',
            EntryState::Removed => '2',
        }
    }

    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(EntryState::Modified),
            '1' => Some(EntryState::Added),
            '2' => Some(EntryState::Removed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Forward-slash path relative to the repository root
    pub name: String,
    /// Staged blob; `None` exactly when the entry is REMOVED
    pub oid: Option<ObjectId>,
    pub state: EntryState,
}

impl IndexEntry {
    pub fn added(name: String, oid: ObjectId) -> Self {
        IndexEntry {
            name,
            oid: Some(oid),
            state: EntryState::Added,
        }
    }

    pub fn modified(name: String, oid: ObjectId) -> Self {
        IndexEntry {
            name,
            oid: Some(oid),
            state: EntryState::Modified,
        }
    }

    pub fn removed(name: String) -> Self {
        IndexEntry {
            name,
            oid: None,
            state: EntryState::Removed,
        }
    }

    pub fn is_removed(&self) -> bool {
        self.state == EntryState::Removed
    }

    pub fn to_line(&self) -> String {
        let address = self
            .oid
            .as_ref()
            .map(|oid| oid.as_ref())
            .unwrap_or(REMOVED_SENTINEL);

        format!("{} {} {}\n", self.name, address, self.state.as_digit())
    }

    /// Parse one index line (without its trailing newline).
    pub fn parse_line(line: &str) -> anyhow::Result<Self> {
        let corrupt = || VcsError::CorruptIndex(line.to_string());

        let split = line
            .len()
            .checked_sub(ENTRY_TAIL_LENGTH)
            .filter(|split| *split > 0)
            .ok_or_else(corrupt)?;
        let (name, tail) = line.split_at_checked(split).ok_or_else(corrupt)?;

        let mut tail = tail.chars();
        let (Some(' '), address, Some(' '), Some(digit), None) = (
            tail.next(),
            tail.by_ref().take(40).collect::<String>(),
            tail.next(),
            tail.next(),
            tail.next(),
        ) else {
            return Err(corrupt().into());
        };

        let state = EntryState::from_digit(digit).ok_or_else(corrupt)?;
        let oid = match state {
            EntryState::Removed if address == REMOVED_SENTINEL => None,
            EntryState::Removed => return Err(corrupt().into()),
            _ => Some(ObjectId::try_parse(address).map_err(|_| corrupt())?),
        };

        Ok(IndexEntry {
            name: name.to_string(),
            oid,
            state,
        })
    }
}

impl PartialOrd for IndexEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IndexEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}
