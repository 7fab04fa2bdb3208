use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::status::file_change::{FileChange, Section};
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

pub type ChangeSet = BTreeMap<String, FileChange>;

#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub(crate) branches: Vec<BranchName>,
    pub(crate) current_branch: BranchName,
    pub(crate) changes: ChangeSet,
}

impl StatusInfo {
    pub fn branches(&self) -> &[BranchName] {
        &self.branches
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.current_branch
    }

    pub fn changes(&self) -> &ChangeSet {
        &self.changes
    }

    /// Paths reported under `section`, sorted.
    pub fn section(&self, section: Section) -> Vec<(&str, FileChange)> {
        self.changes
            .iter()
            .filter(|(_, change)| change.section() == section)
            .map(|(path, change)| (path.as_str(), *change))
            .collect()
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self, index: &Index) -> anyhow::Result<StatusInfo> {
        let inspector = Inspector::new(self.repository);
        let head_tree = self.repository.head_tree()?;
        let working_files = self.repository.workspace().list_files()?;

        let mut changes = ChangeSet::new();

        for path in &working_files {
            if let Some(change) = inspector.check_working_file(path, index, &head_tree)? {
                changes.insert(path.clone(), change);
            }
        }

        let working_files = working_files.iter().collect::<BTreeSet<_>>();

        // staged entries whose file is gone
        for entry in index.entries() {
            if !working_files.contains(&entry.name) {
                changes.insert(entry.name.clone(), inspector.check_missing_entry(entry));
            }
        }

        // committed files that are gone and not staged
        for path in head_tree.paths() {
            if !working_files.contains(path) && !index.contains(path) {
                changes.insert(path.clone(), FileChange::Deleted);
            }
        }

        Ok(StatusInfo {
            branches: self.repository.refs().list_branches()?,
            current_branch: self.repository.current_branch(),
            changes,
        })
    }
}
