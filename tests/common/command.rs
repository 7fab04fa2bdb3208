use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Commit timestamp used by every test so commit addresses are reproducible.
pub const AUTHOR_DATE: &str = "01/01/2024 12:00:00";
pub const AUTHOR_NAME: &str = "fake_user";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with one commit holding `1.txt`, `a/2.txt` and `a/b/3.txt`.
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_vcs_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_vcs_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    vcs_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_vcs_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("vcs").expect("Failed to find vcs binary");
    cmd.envs(vec![
        ("NO_PAGER", "1"),
        ("VCS_LOG", "warn"),
        ("VCS_AUTHOR_NAME", AUTHOR_NAME),
        ("VCS_AUTHOR_DATE", AUTHOR_DATE),
    ]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn vcs_commit(dir: &Path, message: &str) -> Command {
    run_vcs_command(dir, &["commit", "-m", message])
}

/// Run a command that must succeed and return its stdout.
pub fn vcs_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_vcs_command(dir, args).assert().success();

    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is not UTF-8")
}

/// Address stored in `.vcs/Branches/<branch>` (empty before the first commit).
pub fn branch_tip(dir: &Path, branch: &str) -> String {
    std::fs::read_to_string(dir.join(".vcs").join("Branches").join(branch))
        .expect("Failed to read branch file")
        .trim()
        .to_string()
}

pub fn index_content(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(".vcs").join("Index")).expect("Failed to read index")
}
