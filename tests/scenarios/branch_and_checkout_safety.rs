use crate::common::command::{branch_tip, repository_dir, run_vcs_command, vcs_commit, vcs_stdout};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn branch_and_checkout_safety(repository_dir: TempDir) {
    let root = repository_dir.path();
    run_vcs_command(root, &["init"]).assert().success();
    write_file(FileSpec::new(root.join("a.txt"), "hello\n".to_string()));
    run_vcs_command(root, &["add", "a.txt"]).assert().success();
    vcs_commit(root, "first").assert().success();

    // a branch can also be created by hand
    std::fs::write(
        root.join(".vcs").join("Branches").join("feature"),
        branch_tip(root, "master"),
    )
    .unwrap();

    run_vcs_command(root, &["checkout", "feature"]).assert().success();
    write_file(FileSpec::new(root.join("b.txt"), "feature b\n".to_string()));
    run_vcs_command(root, &["add", "b.txt"]).assert().success();
    vcs_commit(root, "add b").assert().success();
    run_vcs_command(root, &["checkout", "master"]).assert().success();
    assert!(!root.join("b.txt").exists());

    write_file(FileSpec::new(root.join("b.txt"), "master b\n".to_string()));
    let status_before = vcs_stdout(root, &["status"]);

    run_vcs_command(root, &["checkout", "feature"])
        .assert()
        .failure()
        .stderr("There are untracked files in the way; delete it or add it first.\nb.txt\n");

    assert_eq!(read_file(&root.join("b.txt")), "master b\n");
    assert_eq!(read_file(&root.join("a.txt")), "hello\n");
    assert_eq!(vcs_stdout(root, &["status"]), status_before);
}

#[rstest]
fn switching_back_and_forth_is_idempotent(repository_dir: TempDir) {
    let root = repository_dir.path();
    run_vcs_command(root, &["init"]).assert().success();
    write_file(FileSpec::new(root.join("a.txt"), "hello\n".to_string()));
    run_vcs_command(root, &["add", "a.txt"]).assert().success();
    vcs_commit(root, "first").assert().success();
    run_vcs_command(root, &["branch", "feature"]).assert().success();

    for branch in ["feature", "master", "feature", "master"] {
        run_vcs_command(root, &["checkout", branch]).assert().success();
        assert_eq!(read_file(&root.join("a.txt")), "hello\n");
    }
    assert_eq!(
        vcs_stdout(root, &["status"]),
        "=== Branches ===\nfeature\n*master\n\n"
    );
}
