use crate::common::command::{branch_tip, init_repository_dir, run_vcs_command, vcs_commit, vcs_stdout};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn ls_tree_lists_the_current_snapshot(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;

    let expected_output = "\
fe05bcdcdc4928012781a5f1a2a77cbb5398e106 1.txt
ad782ecdac770fc6eb9a62e44f90873fb97fb26b a/2.txt
b802f384302cb24fbab0a44997e820bf2e8507bb a/b/3.txt
";

    assert_eq!(vcs_stdout(repository_dir.path(), &["ls-tree"]), expected_output);
}

#[rstest]
fn ls_tree_lists_an_older_commit(init_repository_dir: TempDir) {
    let repository_dir = init_repository_dir;
    let root = repository_dir.path();
    let first_commit = branch_tip(root, "master");
    write_file(FileSpec::new(root.join("new.txt"), "new".to_string()));
    run_vcs_command(root, &["add", "new.txt"]).assert().success();
    vcs_commit(root, "Add new.txt").assert().success();

    let old_tree = vcs_stdout(root, &["ls-tree", &first_commit[..6]]);
    let new_tree = vcs_stdout(root, &["ls-tree"]);

    assert!(!old_tree.contains("new.txt"));
    assert!(new_tree.contains(" new.txt\n"));
}
