use crate::artifacts::objects::hasher::hash_bytes;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Result;
use bytes::Bytes;
use std::io::BufRead;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

/// Anything that lives in the object store under the digest of its serialization.
pub trait Object: Packable {
    fn object_id(&self) -> Result<ObjectId> {
        hash_bytes(&self.serialize()?)
    }
}
