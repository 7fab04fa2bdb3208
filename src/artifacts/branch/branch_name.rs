use crate::artifacts::branch::{DEFAULT_BRANCH, INVALID_BRANCH_NAME_REGEX};
use crate::error::VcsError;
use anyhow::Context;

/// Name of a branch file under `.vcs/Branches/`.
///
/// Branch files live in a single flat directory, so on top of git's ref-name
/// rules a name may not contain `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() || name.contains('/') {
            return Err(VcsError::InvalidBranchName(name).into());
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(&name) {
            Err(VcsError::InvalidBranchName(name).into())
        } else {
            Ok(Self(name))
        }
    }

    pub fn default_branch() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
