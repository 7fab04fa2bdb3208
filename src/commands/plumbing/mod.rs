//! Plumbing commands (low-level operations)
//!
//! Direct access to the object store, mostly useful for scripting and for
//! inspecting a repository by hand.
//!
//! ## Commands
//!
//! - `hash-object`: Compute a file's address and optionally store it
//! - `cat-file`: Print the raw bytes of a stored object
//! - `ls-tree`: List the snapshot of a commit

pub mod cat_file;
pub mod hash_object;
pub mod ls_tree;
