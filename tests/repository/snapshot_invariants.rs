use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::BTreeSet;
use vcs::areas::repository::Repository;
use vcs::artifacts::status::status_info::Status;
use vcs::error::VcsError;

const NAMES: [&str; 3] = ["a.txt", "b.txt", "dir/c.txt"];
const CONTENTS: [&str; 3] = ["x", "y", "z"];

#[derive(Debug, Clone)]
enum Operation {
    Write(usize, usize),
    Delete(usize),
    Add(usize),
    Remove(usize),
    Commit,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (0..NAMES.len(), 0..CONTENTS.len()).prop_map(|(name, content)| Operation::Write(name, content)),
        (0..NAMES.len()).prop_map(Operation::Delete),
        (0..NAMES.len()).prop_map(Operation::Add),
        (0..NAMES.len()).prop_map(Operation::Remove),
        Just(Operation::Commit),
    ]
}

/// User mistakes are expected while replaying random operations.
fn ignore_user_errors(result: anyhow::Result<()>) -> anyhow::Result<()> {
    match result {
        Err(error)
            if error
                .downcast_ref::<VcsError>()
                .is_some_and(VcsError::is_user_error) =>
        {
            Ok(())
        }
        other => other,
    }
}

fn apply(repository: &Repository, operation: &Operation) -> anyhow::Result<()> {
    let root = repository.path().to_path_buf();

    match operation {
        Operation::Write(name, content) => {
            let path = root.join(NAMES[*name]);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, CONTENTS[*content])?;
            Ok(())
        }
        Operation::Delete(name) => {
            let path = root.join(NAMES[*name]);
            if path.is_file() {
                std::fs::remove_file(path)?;
            }
            Ok(())
        }
        Operation::Add(name) => ignore_user_errors(repository.add(&[NAMES[*name].to_string()])),
        Operation::Remove(name) => {
            ignore_user_errors(repository.remove(&[NAMES[*name].to_string()]))
        }
        Operation::Commit => ignore_user_errors(repository.commit("snapshot", None)),
    }
}

/// Every blob the current snapshot references is in the object store.
fn assert_snapshot_is_complete(repository: &Repository) -> anyhow::Result<()> {
    for (path, oid) in repository.head_tree()?.entries() {
        assert!(repository.database().exists(oid), "blob for {path} is missing");
    }

    Ok(())
}

/// Status reports every path that differs from the last snapshot, once.
fn assert_status_partitions_changes(repository: &Repository) -> anyhow::Result<()> {
    let head_tree = repository.head_tree()?;
    let working_files = repository.workspace().list_files()?;

    let mut index = repository.index();
    index.rehydrate()?;
    let status = Status::new(repository).initialize(&index)?;

    let mut expected = working_files.iter().cloned().collect::<BTreeSet<_>>();
    expected.extend(index.paths().cloned());
    expected.extend(head_tree.paths().cloned());
    for path in &working_files {
        let unchanged = !index.contains(path)
            && head_tree.get(path) == Some(&repository.workspace().hash_file(path)?);
        if unchanged {
            expected.remove(path);
        }
    }

    let reported = status.changes().keys().cloned().collect::<BTreeSet<_>>();
    assert_eq!(reported, expected);

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn random_histories_keep_snapshot_invariants(operations in prop::collection::vec(operation(), 1..12)) {
        let dir = TempDir::new().unwrap();
        let repository = Repository::init(dir.path(), Box::new(std::io::sink())).unwrap();

        for operation in &operations {
            apply(&repository, operation).unwrap();
            assert_snapshot_is_complete(&repository).unwrap();
            assert_status_partitions_changes(&repository).unwrap();
        }
    }
}

#[test]
fn library_api_round_trip() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let repository = Repository::init(dir.path(), Box::new(std::io::sink()))?;
    std::fs::write(dir.path().join("a.txt"), "hello\n")?;

    repository.add(&["a.txt".to_string()])?;
    repository.commit("first", Some("Alice"))?;

    let head = repository.head_commit()?.expect("a commit was made");
    let commit = repository.database().parse_commit(&head)?;
    assert_eq!(commit.author(), "Alice");
    assert_eq!(commit.message(), "first");
    assert_eq!(commit.branch(), "master");
    assert_eq!(repository.commit_log().read_all()?, vec![head]);

    repository.branch(Some("feature"))?;
    repository.checkout_branch("feature")?;
    assert_eq!(repository.current_branch().as_ref(), "feature");

    Ok(())
}
