//! Working tree status inspection
//!
//! Status compares three snapshots of the repository: the tree of the last
//! commit on the current branch, the index and the working directory.
//!
//! ## Components
//!
//! - `file_change`: the category a path is reported under
//! - `inspector`: per-path classification rules
//! - `status_info`: the full report, grouped into sections

pub mod file_change;
pub mod inspector;
pub mod status_info;
