use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::error::VcsError;

impl Repository {
    pub fn cat_file(&self, object_id: &str) -> anyhow::Result<()> {
        let revision =
            Revision::try_parse(object_id).map_err(|_| VcsError::NoSuchObject(object_id.to_string()))?;
        let object_id = revision.resolve_object(self.database())?;

        // objects are raw bytes: print them as stored
        let data = self.database().load(&object_id)?;
        self.writer().write_all(&data)?;

        Ok(())
    }
}
