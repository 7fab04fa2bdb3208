use crate::common::command::{index_content, init_repository_dir, run_vcs_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn remove_committed_file_stages_removal(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;

    run_vcs_command(repository_dir.path(), &["rm", "1.txt"])
        .assert()
        .success();

    assert!(!repository_dir.path().join("1.txt").exists());
    assert_eq!(
        index_content(repository_dir.path()),
        format!("1.txt {} 2\n", "_".repeat(40))
    );
}

#[rstest]
fn remove_last_file_of_a_directory_prunes_it(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;

    run_vcs_command(repository_dir.path(), &["rm", "a/b/3.txt"])
        .assert()
        .success();

    assert!(!repository_dir.path().join("a").join("b").exists());
    assert!(repository_dir.path().join("a").join("2.txt").exists());
}
