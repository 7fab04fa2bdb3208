use crate::areas::repository::Repository;
use crate::artifacts::checkout::conflict::untracked_in_the_way;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::error::VcsError;
use tracing::debug;

/// Planned working-directory changes for moving between two snapshots.
pub struct Migration<'r> {
    repository: &'r Repository,
    current: Tree,
    target: Tree,
    /// Paths tracked now but not in the target
    deletes: Vec<String>,
    /// Every target path with the blob to materialize
    writes: Vec<(String, ObjectId)>,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, current: Tree, target: Tree) -> Self {
        let deletes = current
            .paths()
            .filter(|path| !target.contains(path))
            .cloned()
            .collect::<Vec<_>>();
        let writes = target
            .entries()
            .map(|(path, oid)| (path.clone(), oid.clone()))
            .collect::<Vec<_>>();

        Migration {
            repository,
            current,
            target,
            deletes,
            writes,
        }
    }

    /// Fail without touching anything if the switch would clobber untracked
    /// files or needs blobs the store does not have.
    pub fn check_conflicts(&self) -> anyhow::Result<()> {
        let blocked =
            untracked_in_the_way(&self.current, &self.target, self.repository.workspace())?;
        if !blocked.is_empty() {
            debug!(paths = ?blocked, "untracked files block checkout");
            return Err(VcsError::UntrackedInTheWay(blocked).into());
        }

        if let Some((_, oid)) = self
            .writes
            .iter()
            .find(|(_, oid)| !self.repository.database().exists(oid))
        {
            return Err(VcsError::ObjectMissing(oid.to_string()).into());
        }

        Ok(())
    }

    /// Delete files first so a path can turn from file into directory, then
    /// materialize the target snapshot.
    pub fn apply_changes(&self) -> anyhow::Result<()> {
        debug!(
            deletes = self.deletes.len(),
            writes = self.writes.len(),
            "applying checkout migration"
        );

        for path in &self.deletes {
            self.repository.workspace().remove_file(path)?;
        }

        for (path, oid) in &self.writes {
            let reader = self.repository.database().open(oid)?;
            self.repository.workspace().write_file(path, reader)?;
        }

        Ok(())
    }
}
