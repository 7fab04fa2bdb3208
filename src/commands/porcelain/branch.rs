use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use colored::Colorize;
use tracing::info;

const BRANCHES_HEADER: &str = "=== Branches ===";

impl Repository {
    /// Create `branch_name` at the current tip, or list branches when no name is given.
    pub fn branch(&self, branch_name: Option<&str>) -> anyhow::Result<()> {
        match branch_name {
            Some(branch_name) => self.create_branch(branch_name),
            None => {
                let branches = self.refs().list_branches()?;
                self.print_branches(&branches, &self.current_branch())
            }
        }
    }

    fn create_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        let tip = self.head_commit()?;

        self.refs().create_branch(&branch_name, tip.as_ref())?;
        info!(branch = %branch_name, "created branch");

        Ok(())
    }

    pub(crate) fn print_branches(
        &self,
        branches: &[BranchName],
        current: &BranchName,
    ) -> anyhow::Result<()> {
        writeln!(self.writer(), "{BRANCHES_HEADER}")?;
        for branch in branches {
            if branch == current {
                writeln!(self.writer(), "{}", format!("*{branch}").green())?;
            } else {
                writeln!(self.writer(), "{branch}")?;
            }
        }
        writeln!(self.writer())?;

        Ok(())
    }
}
