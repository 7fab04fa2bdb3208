//! Stored object types
//!
//! Everything in the object store is addressed by the SHA-1 digest of its
//! bytes:
//!
//! - **Blob**: a file's raw content
//! - **Tree**: a flat, sorted `path -> blob address` listing
//! - **Commit**: a snapshot's tree plus parent, time, author, branch and message

pub mod blob;
pub mod commit;
pub mod hasher;
pub mod object;
pub mod object_id;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
