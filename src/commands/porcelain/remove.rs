use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::tree::is_at_or_below;
use crate::error::VcsError;
use std::collections::BTreeSet;
use tracing::debug;

impl Repository {
    /// Stage removals of committed files (deleting them from the working
    /// directory) and unstage files that were only added.
    ///
    /// Every path is checked before anything changes.
    pub fn remove(&self, paths: &[String]) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        let head_tree = self.head_tree()?;
        let mut targets = BTreeSet::new();

        for path in paths {
            let path = self.relative_path(path)?;

            let matched = if head_tree.contains(&path) || index.contains(&path) {
                vec![path]
            } else {
                head_tree
                    .paths_under(&path)
                    .chain(index.paths().filter(|staged| is_at_or_below(staged, &path)))
                    .cloned()
                    .collect()
            };

            if matched.is_empty() {
                return Err(VcsError::NoReasonToRemove.into());
            }
            targets.extend(matched);
        }

        let mut deletions = Vec::new();
        for path in targets {
            if head_tree.contains(&path) {
                debug!(path, "staged removal");
                index.add(IndexEntry::removed(path.clone()));
                deletions.push(path);
            } else {
                debug!(path, "unstaged");
                index.remove(&path);
            }
        }

        index.write_updates()?;

        for path in deletions {
            self.workspace().remove_file(&path)?;
        }

        Ok(())
    }
}
