use crate::common::command::{index_content, init_repository_dir, repository_dir, run_vcs_command};
use crate::common::file::{FileSpec, delete_path, write_file, write_generated_files};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_directory_stages_every_file_under_it(repository_dir: TempDir) {
    run_vcs_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let notes_dir = repository_dir.path().join("notes");
    let files = write_generated_files(&notes_dir, 5);
    write_file(FileSpec::new(
        repository_dir.path().join("outside.txt"),
        "outside".to_string(),
    ));

    run_vcs_command(repository_dir.path(), &["add", "notes"])
        .assert()
        .success();

    let index = index_content(repository_dir.path());
    assert_eq!(index.lines().count(), files.len());
    for file in &files {
        let name = file.path.file_name().and_then(|name| name.to_str()).unwrap();
        assert!(index.contains(&format!("notes/{name} ")), "{name} not staged");
    }
    assert!(!index.contains("outside.txt"));
}

#[rstest]
fn add_directory_from_a_subdirectory_stages_changes_and_deletions(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;
    let sub_dir = repository_dir.path().join("a");
    write_file(FileSpec::new(sub_dir.join("2.txt"), "changed".to_string()));
    delete_path(&sub_dir.join("b").join("3.txt"));

    run_vcs_command(&sub_dir, &["add", "."])
        .assert()
        .success();

    let index = index_content(repository_dir.path());
    let lines = index.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("a/2.txt ") && lines[0].ends_with(" 0"));
    assert_eq!(lines[1], format!("a/b/3.txt {} 2", "_".repeat(40)));
}
