//! Commit object
//!
//! Commits record a complete snapshot (the address of a flat tree), the
//! previous commit on the same line of development, and who made it, when,
//! on which branch and why.
//!
//! ## Format
//!
//! One field per line, in fixed order. The parent line is empty for the
//! first commit:
//! ```text
//! <tree-address>
//! <parent-address-or-empty>
//! MM/DD/YYYY HH:MM:SS
//! <author>
//! <branch>
//! <message>
//! ```
//!
//! The message is the last field, so it may itself span several lines.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use chrono::{NaiveDateTime, Timelike};
use std::io::BufRead;

pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Local wall-clock time with second precision and no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn now() -> Self {
        let now = chrono::Local::now().naive_local();
        Timestamp(now.with_nanosecond(0).unwrap_or(now))
    }

    pub fn parse(value: &str) -> anyhow::Result<Self> {
        NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT)
            .map(Timestamp)
            .with_context(|| format!("Invalid timestamp {value:?}, expected MM/DD/YYYY HH:MM:SS"))
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    tree_oid: ObjectId,
    parent: Option<ObjectId>,
    timestamp: Timestamp,
    author: String,
    branch: String,
    message: String,
}

impl Commit {
    pub fn new(
        tree_oid: ObjectId,
        parent: Option<ObjectId>,
        timestamp: Timestamp,
        author: &str,
        branch: &str,
        message: &str,
    ) -> Self {
        Commit {
            tree_oid,
            parent,
            timestamp,
            // author and branch occupy exactly one line each
            author: author.replace(['\r', '\n'], " "),
            branch: branch.to_string(),
            message: message.to_string(),
        }
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the commit the way `log` (and, with the branch line, `global-log`) shows it.
    pub fn log_entry(&self, oid: &ObjectId, with_branch: bool) -> String {
        let mut lines = vec![
            "===".to_string(),
            format!("commit {oid}"),
            format!("Date: {}", self.timestamp),
            format!("Author: {}", self.author),
        ];
        if with_branch {
            lines.push(format!("Branch: {}", self.branch));
        }
        lines.push(self.message.clone());

        format!("{}\n\n", lines.join("\n"))
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let parent = self
            .parent
            .as_ref()
            .map(|parent| parent.to_string())
            .unwrap_or_default();

        let content = format!(
            "{}\n{}\n{}\n{}\n{}\n{}\n",
            self.tree_oid, parent, self.timestamp, self.author, self.branch, self.message
        );

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Invalid commit object: not UTF-8")?;

        let mut lines = content.lines();

        let tree_oid = lines
            .next()
            .context("Invalid commit object: missing tree line")?;
        let tree_oid = ObjectId::try_parse(tree_oid.to_string())
            .context("Invalid commit object: invalid tree line")?;

        let parent = lines
            .next()
            .context("Invalid commit object: missing parent line")?;
        let parent = match parent {
            "" => None,
            parent => Some(
                ObjectId::try_parse(parent.to_string())
                    .context("Invalid commit object: invalid parent line")?,
            ),
        };

        let timestamp = lines
            .next()
            .context("Invalid commit object: missing timestamp line")?;
        let timestamp = Timestamp::parse(timestamp)?;

        let author = lines
            .next()
            .context("Invalid commit object: missing author line")?;
        let branch = lines
            .next()
            .context("Invalid commit object: missing branch line")?;

        let message = lines.collect::<Vec<&str>>().join("\n");

        Ok(Commit {
            tree_oid,
            parent,
            timestamp,
            author: author.to_string(),
            branch: branch.to_string(),
            message,
        })
    }
}

impl Object for Commit {}
