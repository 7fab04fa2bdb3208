use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::tree::{Tree, is_at_or_below};
use crate::error::VcsError;
use std::collections::BTreeSet;
use tracing::debug;

impl Repository {
    pub fn add(&self, paths: &[String]) -> anyhow::Result<()> {
        let mut index = self.index();

        // Load the index file from the disk
        index.rehydrate()?;

        let head_tree = self.head_tree()?;

        for path in paths {
            let path = self.relative_path(path)?;

            if path.is_empty()
                || self.workspace().is_dir(&path)
                || self.is_vanished_directory(&path, &index, &head_tree)
            {
                for path in self.expand_directory(&path, &index, &head_tree)? {
                    self.stage_path(&mut index, &head_tree, &path, false)?;
                }
            } else {
                self.stage_path(&mut index, &head_tree, &path, true)?;
            }
        }

        index.write_updates()?;

        Ok(())
    }

    /// Working files under `dir`, plus everything under it that is committed or staged.
    fn expand_directory(
        &self,
        dir: &str,
        index: &Index,
        head_tree: &Tree,
    ) -> anyhow::Result<BTreeSet<String>> {
        let mut paths = self
            .workspace()
            .list_files_under(dir)?
            .into_iter()
            .collect::<BTreeSet<_>>();

        paths.extend(head_tree.paths_under(dir).cloned());
        paths.extend(index.paths().filter(|path| is_at_or_below(path, dir)).cloned());

        Ok(paths)
    }

    /// A directory that is gone from disk but still has committed or staged files.
    fn is_vanished_directory(&self, path: &str, index: &Index, head_tree: &Tree) -> bool {
        let is_below = |tracked: &String| tracked != path && is_at_or_below(tracked, path);

        !self.workspace().is_file(path)
            && (head_tree.paths_under(path).any(is_below) || index.paths().any(is_below))
    }

    /// Compare the working file with the last snapshot and record the difference.
    ///
    /// A path that is neither on disk nor committed is an error when named
    /// explicitly and is simply unstaged when reached through a directory.
    fn stage_path(
        &self,
        index: &mut Index,
        head_tree: &Tree,
        path: &str,
        explicit: bool,
    ) -> anyhow::Result<()> {
        let committed = head_tree.get(path);

        if !self.workspace().is_file(path) {
            return match committed {
                Some(_) => {
                    debug!(path, "staged removal");
                    index.add(IndexEntry::removed(path.to_string()));
                    Ok(())
                }
                None if !explicit && index.remove(path).is_some() => {
                    debug!(path, "unstaged vanished file");
                    Ok(())
                }
                None => Err(VcsError::NoSuchFile(path.to_string()).into()),
            };
        }

        let oid = self.workspace().hash_file(path)?;

        match committed {
            Some(committed) if *committed == oid => {
                // back to the committed content: nothing left to stage
                if index.remove(path).is_some() {
                    debug!(path, "unstaged unchanged file");
                }
            }
            Some(_) => {
                let oid = self.database().store_file(&self.workspace().absolute(path))?;
                debug!(path, %oid, "staged modification");
                index.add(IndexEntry::modified(path.to_string(), oid));
            }
            None => {
                let oid = self.database().store_file(&self.workspace().absolute(path))?;
                debug!(path, %oid, "staged new file");
                index.add(IndexEntry::added(path.to_string(), oid));
            }
        }

        Ok(())
    }
}
