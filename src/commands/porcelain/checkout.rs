use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::conflict::untracked_around;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::VcsError;
use tracing::{debug, info};

impl Repository {
    /// Restore `path` as it is in the current branch tip.
    pub fn checkout_file(&self, path: &str) -> anyhow::Result<()> {
        let commit_id = self.head_commit()?;

        self.restore_file(commit_id.as_ref(), path)
    }

    /// Restore `path` as it is in the commit named by `revision`.
    pub fn checkout_file_from_commit(&self, revision: &str, path: &str) -> anyhow::Result<()> {
        let commit_id = Revision::try_parse(revision)?.resolve_commit(self.database())?;

        self.restore_file(Some(&commit_id), path)
    }

    /// Replace the working directory with the tip of `branch_name` and make it current.
    ///
    /// The index is left as it is.
    pub fn checkout_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        // a name that can't be a branch can't exist either
        let target = BranchName::try_parse(branch_name.to_string())
            .map_err(|_| VcsError::NoSuchBranch)?;

        if target == *self.current_branch_ref() {
            return Err(VcsError::BranchAlreadyCurrent.into());
        }
        if !self.refs().branch_exists(&target) {
            return Err(VcsError::NoSuchBranch.into());
        }

        let current_tree = self.head_tree()?;
        let target_tip = self.refs().read_branch(&target)?;
        let target_tree = self.database().commit_tree(target_tip.as_ref())?;

        let migration = Migration::new(self, current_tree, target_tree);
        migration.check_conflicts()?;
        migration.apply_changes()?;

        self.refs().set_head(&target)?;
        self.set_current_branch(target.clone());
        info!(branch = %target, "switched branch");

        writeln!(self.writer(), "Switched to branch '{target}'")?;

        Ok(())
    }

    fn restore_file(&self, commit_id: Option<&ObjectId>, path: &str) -> anyhow::Result<()> {
        let path = self.relative_path(path)?;
        let tree = self.database().commit_tree(commit_id)?;
        let oid = tree.get(&path).ok_or(VcsError::FileNotInCommit)?;

        let blocked = untracked_around(&path, &self.head_tree()?, self.workspace())?;
        if !blocked.is_empty() {
            debug!(paths = ?blocked, "untracked files block restore");
            return Err(VcsError::UntrackedInTheWay(blocked).into());
        }

        let reader = self.database().open(oid)?;
        self.workspace().write_file(&path, reader)?;
        debug!(path, %oid, "restored file");

        Ok(())
    }
}
