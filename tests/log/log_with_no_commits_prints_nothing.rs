use crate::common::command::{repository_dir, run_vcs_command, vcs_stdout};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_with_no_commits_prints_nothing(repository_dir: TempDir) {
    run_vcs_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    assert_eq!(vcs_stdout(repository_dir.path(), &["log"]), "");
    assert_eq!(vcs_stdout(repository_dir.path(), &["global-log"]), "");
}
