//! User-facing error taxonomy
//!
//! Every failure a user can trigger on purpose has a fixed message. These
//! errors travel through `anyhow::Result` like any other error and are picked
//! back out at the binary boundary with `downcast_ref::<VcsError>()`.
//!
//! Unexpected filesystem failures stay plain `anyhow` errors with context.

use std::path::PathBuf;
use thiserror::Error;

pub const UNTRACKED_IN_THE_WAY: &str =
    "There are untracked files in the way; delete it or add it first.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VcsError {
    #[error("Not in an initialized Version Control System directory.")]
    NoRepository,

    #[error("Directory doesn't exist")]
    DirectoryMissing(PathBuf),

    #[error("Version Control System already exists")]
    RepositoryExists,

    #[error("{0} does not exist")]
    NoSuchFile(String),

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    #[error("{} is outside the repository", .0.display())]
    OutsideRepository(PathBuf),

    #[error("{0:?} cannot be tracked: file names may not contain line breaks")]
    UntrackablePath(String),

    #[error("No commit with that id exists.")]
    NoSuchCommit,

    #[error("Ambiguous commit id")]
    AmbiguousCommit(String),

    #[error("No object with that id exists.")]
    NoSuchObject(String),

    #[error("Ambiguous object id")]
    AmbiguousObject(String),

    #[error("No such branch exists.")]
    NoSuchBranch,

    #[error("A branch with that name already exists.")]
    BranchExists,

    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("No need to checkout the current branch.")]
    BranchAlreadyCurrent,

    #[error("There are untracked files in the way; delete it or add it first.\n{}", .0.join("\n"))]
    UntrackedInTheWay(Vec<String>),

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("Please enter a commit message.")]
    EmptyCommitMessage,

    #[error("No reason to remove the file.")]
    NoReasonToRemove,

    #[error("object {0} is missing from the object store")]
    ObjectMissing(String),

    #[error("object {0} is corrupt: {1}")]
    CorruptObject(String, String),

    #[error("index entry is malformed: {0:?}")]
    CorruptIndex(String),
}

impl VcsError {
    /// Whether the error is the user's doing rather than a damaged repository.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            VcsError::ObjectMissing(_) | VcsError::CorruptObject(..) | VcsError::CorruptIndex(_)
        )
    }
}
