use crate::areas::workspace::Workspace;
use crate::artifacts::objects::tree::Tree;
use std::collections::BTreeSet;

/// Working paths a switch from `current` to `target` would clobber without
/// them being tracked by the current snapshot, sorted.
///
/// A target path is blocked by an untracked file at it, by untracked files
/// inside a directory at it, or by an untracked file where one of its parent
/// directories goes. A directory holding only tracked files is not in the way:
/// those files are deleted before the target is written.
pub fn untracked_in_the_way(
    current: &Tree,
    target: &Tree,
    workspace: &Workspace,
) -> anyhow::Result<Vec<String>> {
    let mut blocked = BTreeSet::new();

    for path in target.paths().filter(|path| !current.contains(path)) {
        if workspace.is_file(path) {
            blocked.insert(path.clone());
            continue;
        }

        blocked.extend(untracked_around(path, current, workspace)?);
    }

    Ok(blocked.into_iter().collect())
}

/// Untracked working files that writing a file at `path` would destroy: the
/// contents of a directory standing at `path`, or a file standing where one
/// of its parent directories goes.
pub fn untracked_around(
    path: &str,
    current: &Tree,
    workspace: &Workspace,
) -> anyhow::Result<Vec<String>> {
    if workspace.is_dir(path) {
        return Ok(workspace
            .list_files_under(path)?
            .into_iter()
            .filter(|file| !current.contains(file))
            .collect());
    }

    Ok(parent_dirs(path)
        .filter(|parent| !current.contains(parent) && workspace.is_file(parent))
        .map(str::to_string)
        .collect())
}

/// `"a/b/c.txt"` yields `"a"` then `"a/b"`.
fn parent_dirs(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices('/').map(move |(at, _)| &path[..at])
}
