use crate::common::command::{repository_dir, run_vcs_command, vcs_commit, vcs_stdout};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn modify_then_status(repository_dir: TempDir) {
    let root = repository_dir.path();
    run_vcs_command(root, &["init"]).assert().success();
    write_file(FileSpec::new(root.join("a.txt"), "hello\n".to_string()));
    run_vcs_command(root, &["add", "a.txt"]).assert().success();
    vcs_commit(root, "first").assert().success();

    write_file(FileSpec::new(root.join("a.txt"), "hello2\n".to_string()));

    assert_eq!(
        vcs_stdout(root, &["status"]),
        "=== Branches ===\n*master\n\n=== Modified Files ===\na.txt (modified)\n\n"
    );
}
