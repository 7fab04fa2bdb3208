use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;

impl Repository {
    /// List the snapshot of `revision`, or of the current branch tip.
    pub fn ls_tree(&self, revision: Option<&str>) -> anyhow::Result<()> {
        let commit_id = match revision {
            Some(revision) => Some(Revision::try_parse(revision)?.resolve_commit(self.database())?),
            None => self.head_commit()?,
        };

        let tree = self.database().commit_tree(commit_id.as_ref())?;
        for (path, oid) in tree.entries() {
            writeln!(self.writer(), "{oid} {path}")?;
        }

        Ok(())
    }
}
