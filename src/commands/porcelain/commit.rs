use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, Timestamp};
use crate::error::VcsError;
use tracing::info;

impl Repository {
    pub fn commit(&self, message: &str, author: Option<&str>) -> anyhow::Result<()> {
        let mut index = self.index();

        // Load the index file from the disk
        index.rehydrate()?;

        if index.is_empty() {
            return Err(VcsError::NothingToCommit.into());
        }

        let message = message.trim();
        if message.is_empty() {
            return Err(VcsError::EmptyCommitMessage.into());
        }

        let parent = self.head_commit()?;
        let parent_tree = self.database().commit_tree(parent.as_ref())?;

        // complete snapshot: parent tree with the staged changes applied
        let tree = parent_tree.apply(index.entries())?;
        let tree_id = self.database().store(&tree)?;

        let author = author
            .map(str::trim)
            .filter(|author| !author.is_empty())
            .unwrap_or(self.config().author.as_str());
        let timestamp = self.config().author_date.unwrap_or_else(Timestamp::now);
        let branch = self.current_branch();

        let commit = Commit::new(
            tree_id,
            parent.clone(),
            timestamp,
            author,
            branch.as_ref(),
            message,
        );
        let commit_id = self.database().store(&commit)?;
        self.refs().update_branch(&branch, &commit_id)?;

        index.clear();
        index.write_updates()?;

        self.commit_log().append(&commit_id)?;
        info!(%branch, commit = %commit_id, files = tree.len(), "created commit");

        let is_root = match parent {
            Some(_) => "",
            None => " (root-commit)",
        };
        let summary = message.lines().next().unwrap_or_default();

        writeln!(
            self.writer(),
            "[{branch}{is_root} {}] {summary}",
            commit_id.to_short_oid()
        )?;

        Ok(())
    }
}
