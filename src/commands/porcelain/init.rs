use crate::areas::refs::Refs;
use crate::areas::repository::{
    ALL_COMMITS_FILE_NAME, INDEX_FILE_NAME, OBJECTS_DIR_NAME, Repository, VCS_DIR_NAME,
};
use crate::artifacts::branch::branch_name::BranchName;
use crate::error::VcsError;
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::info;
#[cfg(windows)]
use tracing::warn;

impl Repository {
    /// Create a repository in `dir` and open it.
    ///
    /// A half-created `.vcs` directory is removed again if any step fails.
    pub fn init(dir: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !dir.is_dir() {
            return Err(VcsError::DirectoryMissing(dir.to_path_buf()).into());
        }

        let root = dir
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", dir.display()))?;
        let vcs_path = root.join(VCS_DIR_NAME);
        if vcs_path.exists() {
            return Err(VcsError::RepositoryExists.into());
        }

        if let Err(error) = create_layout(&vcs_path) {
            let _ = fs::remove_dir_all(&vcs_path);
            return Err(error);
        }
        hide_directory(&vcs_path);
        info!(path = %vcs_path.display(), "initialized repository");

        let repository = Repository::new(&root, writer)?;
        writeln!(
            repository.writer(),
            "Initialized empty Version Control System in {}",
            vcs_path.display()
        )?;

        Ok(repository)
    }
}

fn create_layout(vcs_path: &Path) -> anyhow::Result<()> {
    fs::create_dir(vcs_path)
        .with_context(|| format!("Failed to create {}", vcs_path.display()))?;

    let objects_path = vcs_path.join(OBJECTS_DIR_NAME);
    fs::create_dir(&objects_path)
        .with_context(|| format!("Failed to create {}", objects_path.display()))?;

    let refs = Refs::new(vcs_path.to_path_buf().into_boxed_path());
    fs::create_dir(refs.branches_path())
        .with_context(|| format!("Failed to create {}", refs.branches_path().display()))?;

    for file in [
        refs.head_path().to_path_buf(),
        vcs_path.join(INDEX_FILE_NAME),
        vcs_path.join(ALL_COMMITS_FILE_NAME),
    ] {
        fs::write(&file, b"").with_context(|| format!("Failed to create {}", file.display()))?;
    }

    let default_branch = BranchName::default_branch();
    refs.create_branch(&default_branch, None)
        .context("Failed to create the default branch")?;
    refs.set_head(&default_branch)
        .context("Failed to create the initial HEAD")?;

    Ok(())
}

#[cfg(windows)]
fn hide_directory(path: &Path) {
    match std::process::Command::new("attrib")
        .arg("+H")
        .arg(path)
        .status()
    {
        Ok(status) if status.success() => {}
        Ok(status) => warn!(path = %path.display(), %status, "could not hide directory"),
        Err(error) => warn!(path = %path.display(), %error, "could not hide directory"),
    }
}

/// Dot directories are already hidden.
#[cfg(not(windows))]
fn hide_directory(_path: &Path) {}
