use crate::common::command::{index_content, init_repository_dir, run_vcs_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn remove_directory_removes_tracked_files_under_it(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;
    let untracked = repository_dir.path().join("a").join("scratch.txt");
    write_file(FileSpec::new(untracked.clone(), "scratch".to_string()));

    run_vcs_command(repository_dir.path(), &["rm", "a"])
        .assert()
        .success();

    let sentinel = "_".repeat(40);
    assert_eq!(
        index_content(repository_dir.path()),
        format!("a/2.txt {sentinel} 2\na/b/3.txt {sentinel} 2\n")
    );
    assert!(!repository_dir.path().join("a").join("2.txt").exists());
    assert!(!repository_dir.path().join("a").join("b").exists());
    assert_eq!(read_file(&untracked), "scratch");
}
