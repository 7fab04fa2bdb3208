//! Branch switching
//!
//! Switching branches replaces the working files of the current commit's
//! snapshot with those of the target branch tip:
//!
//! 1. Plan: files only the current snapshot tracks are deleted, every file
//!    of the target snapshot is written
//! 2. Check: untracked working files the target would overwrite abort the
//!    switch before anything is touched
//! 3. Apply: deletions first, then writes
//!
//! The index is left as it is.

pub mod conflict;
pub mod migration;
