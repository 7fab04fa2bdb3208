use crate::common::command::{repository_dir, run_vcs_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(&["status"])]
#[case(&["log"])]
#[case(&["add", "a.txt"])]
#[case(&["commit", "-m", "message"])]
fn commands_outside_a_repository_fail(repository_dir: TempDir, #[case] args: &[&str]) {
    run_vcs_command(repository_dir.path(), args)
        .assert()
        .failure()
        .code(1)
        .stderr("Not in an initialized Version Control System directory.\n");
}
