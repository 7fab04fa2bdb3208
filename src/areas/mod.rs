//! On-disk areas of a repository
//!
//! Everything under `.vcs/` plus the working directory:
//!
//! - `database`: content-addressed object store (`Objects/`)
//! - `index`: staging area (`Index`)
//! - `refs`: branch files and HEAD (`Branches/`, `HEAD`)
//! - `commit_log`: every commit ever made (`AllCommits`)
//! - `workspace`: the working directory itself
//! - `repository`: binds the areas together and locates the repository

pub mod commit_log;
pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
