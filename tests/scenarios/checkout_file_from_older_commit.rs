use crate::common::command::{branch_tip, repository_dir, run_vcs_command, vcs_commit, vcs_stdout};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_file_from_older_commit(repository_dir: TempDir) {
    let root = repository_dir.path();
    run_vcs_command(root, &["init"]).assert().success();

    write_file(FileSpec::new(root.join("a.txt"), "v1".to_string()));
    run_vcs_command(root, &["add", "a.txt"]).assert().success();
    vcs_commit(root, "v1").assert().success();
    let first_commit = branch_tip(root, "master");

    write_file(FileSpec::new(root.join("a.txt"), "v2".to_string()));
    run_vcs_command(root, &["add", "a.txt"]).assert().success();
    vcs_commit(root, "v2").assert().success();

    run_vcs_command(root, &["checkout", &first_commit, "--", "a.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&root.join("a.txt")), "v1");
    assert_eq!(
        vcs_stdout(root, &["status"]),
        "=== Branches ===\n*master\n\n=== Modified Files ===\na.txt (modified)\n\n"
    );
}
