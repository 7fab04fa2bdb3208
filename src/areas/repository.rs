use crate::areas::commit_log::CommitLog;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::{Workspace, is_trackable_path};
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::config::Config;
use crate::error::VcsError;
use anyhow::Context;
use std::cell::{Ref, RefCell, RefMut};
use std::path::{Component, Path, PathBuf};

pub const VCS_DIR_NAME: &str = ".vcs";
pub const OBJECTS_DIR_NAME: &str = "Objects";
pub const INDEX_FILE_NAME: &str = "Index";
pub const ALL_COMMITS_FILE_NAME: &str = "AllCommits";

pub struct Repository {
    /// Working directory root (the directory holding `.vcs`)
    path: Box<Path>,
    /// Directory the command runs from; command-line paths are relative to it
    cwd: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    config: Config,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    commit_log: CommitLog,
    current_branch: RefCell<BranchName>,
}

impl Repository {
    /// Open the repository rooted at `path`.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", path.display()))?;

        Self::open(path.clone(), path, writer)
    }

    /// Find the repository containing `start` by walking up its ancestors.
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let cwd = start
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", start.display()))?;

        let root = cwd
            .ancestors()
            .find(|dir| dir.join(VCS_DIR_NAME).is_dir())
            .ok_or(VcsError::NoRepository)?
            .to_path_buf();

        Self::open(root, cwd, writer)
    }

    fn open(root: PathBuf, cwd: PathBuf, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let vcs_path = root.join(VCS_DIR_NAME);
        if !vcs_path.is_dir() {
            return Err(VcsError::NoRepository.into());
        }

        let index = Index::new(vcs_path.join(INDEX_FILE_NAME).into_boxed_path());
        let database = Database::new(vcs_path.join(OBJECTS_DIR_NAME).into_boxed_path());
        let workspace = Workspace::new(root.clone().into_boxed_path());
        let refs = Refs::new(vcs_path.clone().into_boxed_path());
        let commit_log = CommitLog::new(vcs_path.join(ALL_COMMITS_FILE_NAME).into_boxed_path());
        let current_branch = refs.current_branch()?;

        Ok(Repository {
            path: root.into_boxed_path(),
            cwd: cwd.into_boxed_path(),
            writer: RefCell::new(writer),
            config: Config::default(),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
            commit_log,
            current_branch: RefCell::new(current_branch),
        })
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn vcs_path(&self) -> PathBuf {
        self.path.join(VCS_DIR_NAME)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn commit_log(&self) -> &CommitLog {
        &self.commit_log
    }

    pub fn current_branch(&self) -> BranchName {
        self.current_branch.borrow().clone()
    }

    pub fn current_branch_ref(&self) -> Ref<'_, BranchName> {
        self.current_branch.borrow()
    }

    pub fn set_current_branch(&self, branch: BranchName) {
        *self.current_branch.borrow_mut() = branch;
    }

    /// Tip of the current branch; `None` before its first commit.
    pub fn head_commit(&self) -> anyhow::Result<Option<ObjectId>> {
        self.refs.read_branch(&self.current_branch_ref())
    }

    /// Snapshot of the current branch tip (empty before the first commit).
    pub fn head_tree(&self) -> anyhow::Result<Tree> {
        self.database.commit_tree(self.head_commit()?.as_ref())
    }

    /// Normalize a command-line path to the repository-relative, forward-slash
    /// form used by trees and the index. The repository root itself is `""`.
    pub fn relative_path(&self, argument: &str) -> anyhow::Result<String> {
        let joined = self.cwd.join(argument);
        let normalized = normalize_lexically(&joined);

        let relative = match normalized.strip_prefix(self.path.as_ref()) {
            Ok(relative) => relative.to_path_buf(),
            // the argument may spell the root differently (e.g. through a symlink)
            Err(_) => joined
                .canonicalize()
                .ok()
                .and_then(|canonical| {
                    canonical
                        .strip_prefix(self.path.as_ref())
                        .ok()
                        .map(Path::to_path_buf)
                })
                .ok_or_else(|| VcsError::OutsideRepository(normalized.clone()))?,
        };

        let components = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy().to_string())
            .collect::<Vec<_>>();

        if components.first().is_some_and(|first| first == VCS_DIR_NAME) {
            return Err(VcsError::OutsideRepository(normalized).into());
        }

        let relative = components.join("/");
        if !is_trackable_path(&relative) {
            return Err(VcsError::UntrackablePath(relative).into());
        }

        Ok(relative)
    }
}

/// Resolve `.` and `..` without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}
