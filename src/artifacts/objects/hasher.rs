//! SHA-1 digests of byte streams
//!
//! Files are hashed by streaming them through a [`HashWriter`], so large
//! files never have to be held in memory. In-memory buffers (tree and commit
//! serializations) are hashed directly.

use crate::artifacts::objects::object_id::ObjectId;
use sha1::{Digest, Sha1};
use std::io::{self, Read, Write};
use std::path::Path;

/// `Write` adapter that feeds everything written through it into a SHA-1 hasher
/// before handing the bytes to the inner writer.
pub struct HashWriter<W> {
    writer: W,
    hasher: Sha1,
}

impl<W: Write> HashWriter<W> {
    pub fn new(writer: W) -> Self {
        HashWriter {
            writer,
            hasher: Sha1::new(),
        }
    }

    /// Finish hashing, returning the inner writer and the digest.
    pub fn finish(self) -> anyhow::Result<(W, ObjectId)> {
        let digest = self.hasher.finalize();
        Ok((self.writer, ObjectId::try_parse(format!("{digest:x}"))?))
    }
}

impl<W: Write> Write for HashWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.writer.write(buf)?;
        self.hasher.update(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

pub fn hash_bytes(data: &[u8]) -> anyhow::Result<ObjectId> {
    let mut hasher = Sha1::new();
    hasher.update(data);
    ObjectId::try_parse(format!("{:x}", hasher.finalize()))
}

pub fn hash_reader(mut reader: impl Read) -> anyhow::Result<ObjectId> {
    let mut writer = HashWriter::new(io::sink());
    io::copy(&mut reader, &mut writer)?;
    Ok(writer.finish()?.1)
}

pub fn hash_file(path: &Path) -> anyhow::Result<ObjectId> {
    let file = std::fs::File::open(path)?;
    hash_reader(io::BufReader::new(file))
}
