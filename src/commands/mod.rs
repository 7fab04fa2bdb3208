//! Command implementations
//!
//! Every command is an `impl Repository` block in its own file, organized into
//! two categories:
//!
//! - `plumbing`: low-level access to the object store (hash-object, cat-file, ls-tree)
//! - `porcelain`: user-facing version control workflows (add, commit, log, etc.)
//!
//! Commands print through [`Repository::writer`](crate::areas::repository::Repository::writer)
//! and report user mistakes as [`VcsError`](crate::error::VcsError)s.

pub mod plumbing;
pub mod porcelain;
