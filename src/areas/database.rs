//! Content-addressed object store
//!
//! Every object (blob, tree or commit) is stored under the SHA-1 digest of its
//! bytes at `.vcs/Objects/<first-2-chars>/<remaining-38-chars>`. Stored bytes
//! are the serialization itself: no header, no compression.
//!
//! Writes are idempotent. If the target address already exists the write is
//! skipped, so identical content is only ever stored once.

use crate::artifacts::core::{temp_path_for, write_atomically};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::hasher::HashWriter;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::error::VcsError;
use anyhow::Context;
use bytes::Bytes;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
    /// Commits already parsed during this process, keyed by address
    commits: RefCell<HashMap<ObjectId, Commit>>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database {
            path,
            commits: RefCell::new(HashMap::new()),
        }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).is_file()
    }

    /// Store an in-memory object and return its address.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let content = object.serialize()?;
        let object_id = object.object_id()?;
        let object_path = self.object_path(&object_id);

        if object_path.exists() {
            debug!(oid = %object_id, "object already stored");
            return Ok(object_id);
        }

        self.create_shard_dir(&object_path)?;
        write_atomically(&object_path, &content)
            .with_context(|| format!("Unable to write object {object_id}"))?;
        debug!(oid = %object_id, bytes = content.len(), "stored object");

        Ok(object_id)
    }

    /// Store a file's exact bytes as a blob, streaming it so it is read only once.
    pub fn store_file(&self, source: &Path) -> anyhow::Result<ObjectId> {
        let mut reader = std::fs::File::open(source)
            .with_context(|| format!("Unable to open {}", source.display()))?;

        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("Unable to create {}", self.path.display()))?;
        let temp_path = temp_path_for(&self.path.join("blob"))?;
        let temp_file = std::fs::File::create(&temp_path)
            .with_context(|| format!("Unable to create {}", temp_path.display()))?;

        let mut writer = HashWriter::new(temp_file);
        let copied = std::io::copy(&mut reader, &mut writer)
            .with_context(|| format!("Unable to read {}", source.display()));
        let (_, object_id) = match copied.and_then(|_| writer.finish()) {
            Ok(result) => result,
            Err(error) => {
                let _ = std::fs::remove_file(&temp_path);
                return Err(error);
            }
        };

        let object_path = self.object_path(&object_id);
        if object_path.exists() {
            debug!(oid = %object_id, "blob already stored");
            std::fs::remove_file(&temp_path)
                .with_context(|| format!("Unable to remove {}", temp_path.display()))?;
            return Ok(object_id);
        }

        self.create_shard_dir(&object_path)?;
        std::fs::rename(&temp_path, &object_path)
            .with_context(|| format!("Unable to rename blob into {}", object_path.display()))?;
        debug!(oid = %object_id, source = %source.display(), "stored blob");

        Ok(object_id)
    }

    /// Open a stored object for reading.
    pub fn open(&self, object_id: &ObjectId) -> anyhow::Result<impl BufRead> {
        let object_path = self.object_path(object_id);
        if !object_path.is_file() {
            return Err(VcsError::ObjectMissing(object_id.to_string()).into());
        }

        let file = std::fs::File::open(&object_path)
            .with_context(|| format!("Unable to open object file {}", object_path.display()))?;

        Ok(BufReader::new(file))
    }

    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.object_path(object_id);
        if !object_path.is_file() {
            return Err(VcsError::ObjectMissing(object_id.to_string()).into());
        }

        let content = std::fs::read(&object_path)
            .with_context(|| format!("Unable to read object file {}", object_path.display()))?;

        Ok(content.into())
    }

    pub fn parse_tree(&self, object_id: &ObjectId) -> anyhow::Result<Tree> {
        let content = self.load(object_id)?;

        Tree::deserialize(Cursor::new(content))
            .map_err(|error| VcsError::CorruptObject(object_id.to_string(), error.to_string()).into())
    }

    /// Parse a commit, going through the in-process commit cache.
    pub fn parse_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        if let Some(commit) = self.commits.borrow().get(object_id) {
            return Ok(commit.clone());
        }

        let content = self.load(object_id)?;
        let commit = Commit::deserialize(Cursor::new(content)).map_err(|error| {
            VcsError::CorruptObject(object_id.to_string(), error.to_string())
        })?;

        self.commits
            .borrow_mut()
            .insert(object_id.clone(), commit.clone());

        Ok(commit)
    }

    /// Parse an object as a commit, yielding `None` when it is some other kind of object.
    pub fn try_parse_commit(&self, object_id: &ObjectId) -> anyhow::Result<Option<Commit>> {
        match self.parse_commit(object_id) {
            Ok(commit) => Ok(Some(commit)),
            Err(error) => match error.downcast_ref::<VcsError>() {
                Some(VcsError::CorruptObject(..)) => Ok(None),
                _ => Err(error),
            },
        }
    }

    /// Tree of the given commit, or the empty tree when there is no commit yet.
    pub fn commit_tree(&self, commit_id: Option<&ObjectId>) -> anyhow::Result<Tree> {
        match commit_id {
            Some(commit_id) => {
                let commit = self.parse_commit(commit_id)?;
                self.parse_tree(commit.tree_oid())
            }
            None => Ok(Tree::default()),
        }
    }

    /// Find every stored object whose address starts with `prefix`.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();
        if prefix.len() < 2 || prefix.len() > OBJECT_ID_LENGTH {
            return Ok(Vec::new());
        }

        let (dir_name, file_prefix) = prefix.split_at(2);
        let dir_path = self.path.join(dir_name);
        if !dir_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        for entry in std::fs::read_dir(&dir_path)
            .with_context(|| format!("Unable to list {}", dir_path.display()))?
        {
            let file_name = entry?.file_name();
            let file_name = file_name.to_string_lossy();

            if file_name.starts_with(file_prefix)
                && let Ok(oid) = ObjectId::try_parse(format!("{dir_name}{file_name}"))
            {
                matches.push(oid);
            }
        }
        matches.sort();

        Ok(matches)
    }

    fn create_shard_dir(&self, object_path: &Path) -> anyhow::Result<()> {
        let shard = object_path
            .parent()
            .with_context(|| format!("Invalid object path {}", object_path.display()))?;

        std::fs::create_dir_all(shard)
            .with_context(|| format!("Unable to create object directory {}", shard.display()))
    }
}
