//! Branches and HEAD
//!
//! Every branch is a file `.vcs/Branches/<name>` whose content is the address
//! of its tip commit, or nothing before the branch's first commit.
//!
//! `.vcs/HEAD` holds the absolute path of the current branch file. The
//! branch name is that path's file name.
//!
//! Branch tips and HEAD are replaced atomically (temporary file + rename).

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::write_atomically;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::VcsError;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

pub const HEAD_FILE_NAME: &str = "HEAD";
pub const BRANCHES_DIR_NAME: &str = "Branches";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository metadata directory (`.vcs`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_FILE_NAME).into_boxed_path()
    }

    pub fn branches_path(&self) -> Box<Path> {
        self.path.join(BRANCHES_DIR_NAME).into_boxed_path()
    }

    pub fn branch_path(&self, name: &BranchName) -> PathBuf {
        self.branches_path().join(name.as_ref())
    }

    pub fn branch_exists(&self, name: &BranchName) -> bool {
        self.branch_path(name).is_file()
    }

    /// Name of the branch HEAD points at.
    pub fn current_branch(&self) -> anyhow::Result<BranchName> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("Unable to read {}", head_path.display()))?;
        let content = content.trim_end_matches(['\r', '\n']);

        let name = Path::new(content)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .with_context(|| format!("HEAD does not point at a branch file: {content:?}"))?;
        let name = BranchName::try_parse(name)
            .with_context(|| format!("HEAD does not point at a branch file: {content:?}"))?;

        if !self.branch_exists(&name) {
            anyhow::bail!("HEAD points at missing branch {name}");
        }

        Ok(name)
    }

    /// Tip of the given branch; `None` before its first commit.
    pub fn read_branch(&self, name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(name);
        if !branch_path.is_file() {
            return Err(VcsError::NoSuchBranch.into());
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("Unable to read branch file {}", branch_path.display()))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        ObjectId::try_parse(content.to_string())
            .map(Some)
            .with_context(|| format!("Branch {name} holds an invalid address: {content:?}"))
    }

    /// Tip of the current branch.
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.read_branch(&self.current_branch()?)
    }

    pub fn update_branch(&self, name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        write_atomically(&self.branch_path(name), oid.as_ref().as_bytes())?;
        debug!(branch = %name, oid = %oid, "moved branch tip");

        Ok(())
    }

    /// Point HEAD at an existing branch file.
    pub fn set_head(&self, name: &BranchName) -> anyhow::Result<()> {
        let branch_path = self.branch_path(name);
        if !branch_path.is_file() {
            return Err(VcsError::NoSuchBranch.into());
        }

        write_atomically(
            &self.head_path(),
            branch_path.to_string_lossy().as_bytes(),
        )?;
        debug!(branch = %name, "updated HEAD");

        Ok(())
    }

    /// Create a branch file holding `tip` (empty when there is no commit yet).
    pub fn create_branch(&self, name: &BranchName, tip: Option<&ObjectId>) -> anyhow::Result<()> {
        let branch_path = self.branch_path(name);
        if branch_path.exists() {
            return Err(VcsError::BranchExists.into());
        }

        let content = tip.map(|oid| oid.to_string()).unwrap_or_default();
        write_atomically(&branch_path, content.as_bytes())?;
        debug!(branch = %name, tip = %content, "created branch");

        Ok(())
    }

    /// Every branch, sorted by name.
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let mut branches = WalkDir::new(self.branches_path())
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                BranchName::try_parse(entry.file_name().to_string_lossy().to_string()).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }
}
