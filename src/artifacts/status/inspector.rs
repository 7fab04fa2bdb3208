use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::status::file_change::FileChange;
use derive_new::new;

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Classify a path present in the working directory.
    ///
    /// Returns `None` for a file that matches the last commit and is not staged.
    pub fn check_working_file(
        &self,
        path: &str,
        index: &Index,
        head_tree: &Tree,
    ) -> anyhow::Result<Option<FileChange>> {
        if let Some(entry) = index.entry_by_path(path) {
            if entry.is_removed() {
                // removal was staged but the file is back
                return Ok(Some(FileChange::Untracked));
            }

            let oid = self.repository.workspace().hash_file(path)?;
            return Ok(Some(if entry.oid.as_ref() == Some(&oid) {
                FileChange::Staged
            } else {
                FileChange::Modified
            }));
        }

        match head_tree.get(path) {
            Some(committed) if *committed != self.repository.workspace().hash_file(path)? => {
                Ok(Some(FileChange::Modified))
            }
            Some(_) => Ok(None),
            None => Ok(Some(FileChange::Untracked)),
        }
    }

    /// Classify an index entry whose path is missing from the working directory.
    pub fn check_missing_entry(&self, entry: &IndexEntry) -> FileChange {
        if entry.is_removed() {
            FileChange::Removed
        } else {
            FileChange::Deleted
        }
    }
}
