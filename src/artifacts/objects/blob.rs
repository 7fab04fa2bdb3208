//! Blob object
//!
//! Blobs hold a file's exact bytes. There is no header and no compression,
//! so a blob file in the object store is byte-identical to the file it was
//! made from.

use crate::artifacts::objects::object::{Object, Packable};
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl From<&str> for Blob {
    fn from(content: &str) -> Self {
        Blob::new(Bytes::copy_from_slice(content.as_bytes()))
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Object for Blob {}
