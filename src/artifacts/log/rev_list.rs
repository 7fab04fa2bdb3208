use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// Ancestry of a commit, newest first.
#[derive(Clone, new)]
pub struct RevList<'d> {
    database: &'d Database,
    start: Option<ObjectId>,
}

impl<'d> IntoIterator for RevList<'d> {
    type Item = anyhow::Result<(ObjectId, Commit)>;
    type IntoIter = RevListIntoIter<'d>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIntoIter {
            database: self.database,
            current_commit_oid: self.start,
        }
    }
}

#[derive(Clone)]
pub struct RevListIntoIter<'d> {
    database: &'d Database,
    current_commit_oid: Option<ObjectId>,
}

impl Iterator for RevListIntoIter<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.database.parse_commit(&commit_oid) {
            Ok(commit) => {
                // move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok((commit_oid, commit)))
            }
            Err(error) => Some(Err(error)),
        }
    }
}
