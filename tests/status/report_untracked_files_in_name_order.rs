use crate::common::command::{repository_dir, run_vcs_command, vcs_stdout};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_untracked_files_in_name_order(repository_dir: TempDir) {
    run_vcs_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    let mut files = write_generated_files(repository_dir.path(), 6)
        .into_iter()
        .map(|file| {
            file.path
                .file_name()
                .and_then(|name| name.to_str())
                .map(str::to_string)
                .expect("generated file has a name")
        })
        .collect::<Vec<_>>();
    files.sort();

    let expected_output = format!(
        "=== Branches ===\n*master\n\n=== Untracked Files ===\n{}\n\n",
        files.join("\n")
    );

    assert_eq!(vcs_stdout(repository_dir.path(), &["status"]), expected_output);
}
