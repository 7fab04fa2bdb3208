use crate::common::command::{index_content, repository_dir, run_vcs_command, vcs_stdout};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

#[rstest]
fn add_all_skips_names_that_cannot_be_tracked(repository_dir: TempDir) {
    let root = repository_dir.path();
    run_vcs_command(root, &["init"]).assert().success();
    write_file(FileSpec::new(root.join("ok.txt"), "ok".to_string()));
    write_file(FileSpec::new(root.join("a\nb.txt"), "newline".to_string()));
    std::fs::write(root.join(OsStr::from_bytes(b"bad\xff.txt")), "latin-1").unwrap();

    run_vcs_command(root, &["add", "."])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping file"));

    let index = index_content(root);
    assert_eq!(index.lines().count(), 1);
    assert!(index.starts_with("ok.txt "));

    assert_eq!(
        vcs_stdout(root, &["status"]),
        "=== Branches ===\n*master\n\n=== Staged Files ===\nok.txt\n\n"
    );
}

#[rstest]
fn add_name_with_a_line_break_fails(repository_dir: TempDir) {
    let root = repository_dir.path();
    run_vcs_command(root, &["init"]).assert().success();
    write_file(FileSpec::new(root.join("a\nb.txt"), "newline".to_string()));

    run_vcs_command(root, &["add", "a\nb.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr("\"a\\nb.txt\" cannot be tracked: file names may not contain line breaks\n");

    assert_eq!(index_content(root), "");
}
