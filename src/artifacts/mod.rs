//! Data structures and algorithms
//!
//! - `branch`: branch names and commit-address resolution
//! - `checkout`: branch-switch planning and conflict detection
//! - `core`: shared utilities (pager wrapper, atomic writes)
//! - `index`: index entry format
//! - `log`: commit history traversal
//! - `objects`: blob, tree and commit objects
//! - `status`: working tree status inspection

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod log;
pub mod objects;
pub mod status;
