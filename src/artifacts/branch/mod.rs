pub mod branch_name;
pub mod revision;

/// Git's ref-name restrictions; a branch name matching this is rejected.
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch created by `init` and checked out initially
pub const DEFAULT_BRANCH: &str = "master";

/// Shortest commit-address prefix accepted in place of a full address
pub const MIN_COMMIT_PREFIX_LENGTH: usize = 4;
