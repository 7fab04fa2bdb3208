use crate::areas::repository::Repository;
use crate::artifacts::objects::hasher::hash_file;
use crate::error::VcsError;

impl Repository {
    pub fn hash_object(&self, file_path: &str, write: bool) -> anyhow::Result<()> {
        let path = self.cwd().join(file_path);
        if !path.is_file() {
            return Err(VcsError::NoSuchFile(file_path.to_string()).into());
        }

        // storing hashes while copying, so only hash when nothing is written
        let object_id = if write {
            self.database().store_file(&path)?
        } else {
            hash_file(&path)?
        };

        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }
}
