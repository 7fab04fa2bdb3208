//! Log of every commit ever made
//!
//! `.vcs/AllCommits` is append-only: one commit address per line, in the
//! order the commits were created. Only `global-log` reads it.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::io::Write;
use std::path::Path;

#[derive(Debug, new)]
pub struct CommitLog {
    /// Path to the log file (`.vcs/AllCommits`)
    path: Box<Path>,
}

impl CommitLog {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, commit_id: &ObjectId) -> anyhow::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Unable to open {}", self.path.display()))?;

        writeln!(file, "{commit_id}")
            .with_context(|| format!("Unable to append to {}", self.path.display()))
    }

    /// Every recorded commit address, in on-disk order.
    pub fn read_all(&self) -> anyhow::Result<Vec<ObjectId>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read {}", self.path.display()))?;

        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                ObjectId::try_parse(line.to_string())
                    .with_context(|| format!("Invalid entry in {}: {line:?}", self.path.display()))
            })
            .collect()
    }
}
