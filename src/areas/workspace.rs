//! Working directory access
//!
//! All paths handed to and returned from the workspace are repository-relative
//! with forward slashes, the same form trees and the index use. The `.vcs`
//! metadata directory is never listed.

use crate::areas::repository::VCS_DIR_NAME;
use crate::artifacts::core::temp_path_for;
use crate::artifacts::objects::hasher::hash_file;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn absolute(&self, file_path: &str) -> PathBuf {
        file_path
            .split('/')
            .filter(|component| !component.is_empty())
            .fold(self.path.to_path_buf(), |path, component| path.join(component))
    }

    pub fn is_file(&self, file_path: &str) -> bool {
        self.absolute(file_path).is_file()
    }

    pub fn is_dir(&self, file_path: &str) -> bool {
        self.absolute(file_path).is_dir()
    }

    /// Every file in the working directory, sorted.
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        self.list_files_under("")
    }

    /// Every file at or below `dir_path` (`""` for the whole working directory), sorted.
    pub fn list_files_under(&self, dir_path: &str) -> anyhow::Result<Vec<String>> {
        let root = self.absolute(dir_path);
        if !root.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&root)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != VCS_DIR_NAME);

        for entry in walker {
            let entry = entry.with_context(|| format!("Unable to walk {}", root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            match self.relative(entry.path()) {
                Some(relative) if is_trackable_path(&relative) => files.push(relative),
                Some(relative) => {
                    warn!(path = ?relative, "skipping file whose name contains a line break")
                }
                None => warn!(
                    path = %entry.path().display(),
                    "skipping file whose name is not valid UTF-8"
                ),
            }
        }
        files.sort();

        Ok(files)
    }

    pub fn hash_file(&self, file_path: &str) -> anyhow::Result<ObjectId> {
        let path = self.absolute(file_path);

        hash_file(&path).with_context(|| format!("Unable to hash {}", path.display()))
    }

    /// Replace (or create) a working file with the bytes from `reader`.
    ///
    /// Missing parent directories are created. The content is written to a
    /// temporary sibling first and renamed over the target.
    pub fn write_file(&self, file_path: &str, mut reader: impl BufRead) -> anyhow::Result<()> {
        let path = self.absolute(file_path);
        let parent = path
            .parent()
            .with_context(|| format!("Invalid file path {}", path.display()))?;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Unable to create directory {}", parent.display()))?;

        if path.is_dir() {
            std::fs::remove_dir_all(&path)
                .with_context(|| format!("Unable to replace directory {}", path.display()))?;
        }

        let temp_path = temp_path_for(&path)?;
        let written = std::fs::File::create(&temp_path)
            .with_context(|| format!("Unable to create {}", temp_path.display()))
            .and_then(|mut file| {
                std::io::copy(&mut reader, &mut file)
                    .with_context(|| format!("Unable to write {}", temp_path.display()))
            })
            .and_then(|_| {
                std::fs::rename(&temp_path, &path)
                    .with_context(|| format!("Unable to replace {}", path.display()))
            });

        if written.is_err() {
            let _ = std::fs::remove_file(&temp_path);
        }
        written?;
        debug!(path = file_path, "materialized file");

        Ok(())
    }

    /// Delete a working file if present, then prune directories it leaves empty.
    pub fn remove_file(&self, file_path: &str) -> anyhow::Result<()> {
        let path = self.absolute(file_path);

        if path.is_file() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Unable to delete {}", path.display()))?;
            debug!(path = file_path, "deleted file");
        }

        self.prune_empty_parent_dirs(&path)
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.starts_with(self.path.as_ref())
            && parent.is_dir()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)
                .with_context(|| format!("Unable to remove empty directory {}", parent.display()))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    /// Repository-relative form of `path`; `None` when a component is not UTF-8.
    fn relative(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(self.path.as_ref()).ok()?;

        let components = relative
            .components()
            .map(|component| component.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()?;

        if components.is_empty() {
            None
        } else {
            Some(components.join("/"))
        }
    }
}

/// Trees and the index are line-oriented, so a path must fit on one line.
pub fn is_trackable_path(path: &str) -> bool {
    !path.contains(['\n', '\r'])
}
