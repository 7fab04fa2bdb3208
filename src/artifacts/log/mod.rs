//! Commit history traversal
//!
//! - `rev_list`: walk from a branch tip back through parent addresses
//!
//! History is linear: every commit has at most one parent, so `log` is a
//! simple walk until the initial commit.

pub mod rev_list;
