use crate::common::command::{branch_tip, index_content, repository_dir, run_vcs_command, vcs_stdout};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_commit_log(repository_dir: TempDir) {
    let root = repository_dir.path();
    run_vcs_command(root, &["init"]).assert().success();
    write_file(FileSpec::new(root.join("a.txt"), "hello\n".to_string()));

    run_vcs_command(root, &["add", "a.txt"]).assert().success();
    assert_eq!(
        index_content(root),
        "a.txt f572d396fae9206628714fb2ce00f72e94f2258f 1\n"
    );

    run_vcs_command(root, &["commit", "-m", "first", "--author", "Alice"])
        .assert()
        .success();

    assert_eq!(index_content(root), "");
    let tip = branch_tip(root, "master");
    assert_eq!(tip.len(), 40);

    let log = vcs_stdout(root, &["log"]);
    assert_eq!(log.matches("===\n").count(), 1);
    assert!(log.contains(&format!("commit {tip}\n")));
    assert!(log.contains("Author: Alice\n"));
    assert!(log.ends_with("first\n\n"));
}
