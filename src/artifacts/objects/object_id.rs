//! Object address (SHA-1 digest)
//!
//! Addresses are 40-character lowercase hexadecimal strings. They identify
//! blobs, trees and commits alike.
//!
//! ## Storage
//!
//! Objects are stored in `.vcs/Objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use std::path::PathBuf;

/// Object address
///
/// A 40-character lowercase hexadecimal string that uniquely identifies an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object address
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string (upper case is folded)
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Whether `candidate` looks like a (possibly abbreviated) address.
    pub fn is_hex_prefix(candidate: &str) -> bool {
        !candidate.is_empty()
            && candidate.len() <= OBJECT_ID_LENGTH
            && candidate.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Convert to the sharded file system path used by the object store
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the address
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
