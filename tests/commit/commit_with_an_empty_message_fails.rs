use crate::common::command::{index_content, init_repository_dir, run_vcs_command, vcs_commit};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("")]
#[case("   ")]
fn commit_with_an_empty_message_fails(init_repository_dir: TempDir, #[case] message: &str) {
    let repository_dir = init_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "changed".to_string(),
    ));
    run_vcs_command(repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    vcs_commit(repository_dir.path(), message)
        .assert()
        .failure()
        .code(1)
        .stderr("Please enter a commit message.\n");

    // the staged change survives
    assert!(!index_content(repository_dir.path()).is_empty());
}

#[rstest]
fn commit_without_a_message_flag_fails(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "changed".to_string(),
    ));
    run_vcs_command(repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    run_vcs_command(repository_dir.path(), &["commit"])
        .assert()
        .failure()
        .code(1)
        .stderr("Please enter a commit message.\n");
}
