use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;

impl Repository {
    /// Ancestry of the current branch tip, newest first.
    pub fn log(&self) -> anyhow::Result<()> {
        let rev_list = RevList::new(self.database(), self.head_commit()?);

        for entry in rev_list {
            let (commit_id, commit) = entry?;
            write!(self.writer(), "{}", commit.log_entry(&commit_id, false))?;
        }

        Ok(())
    }

    /// Every commit ever made, in creation order, with the branch it was made on.
    pub fn global_log(&self) -> anyhow::Result<()> {
        for commit_id in self.commit_log().read_all()? {
            let commit = self.database().parse_commit(&commit_id)?;
            write!(self.writer(), "{}", commit.log_entry(&commit_id, true))?;
        }

        Ok(())
    }
}
