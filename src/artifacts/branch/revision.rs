use crate::areas::database::Database;
use crate::artifacts::branch::MIN_COMMIT_PREFIX_LENGTH;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::VcsError;

/// A commit (or, for plumbing, any object) named on the command line.
///
/// Supports two formats:
/// - Full addresses: 40 hexadecimal characters
/// - Abbreviated addresses: at least [`MIN_COMMIT_PREFIX_LENGTH`] hexadecimal
///   characters, resolved when exactly one candidate matches
///
/// # Examples
///
/// ```ignore
/// let commit_id = Revision::try_parse("f572d396")?.resolve_commit(repository.database())?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Address(ObjectId),
    Prefix(String),
}

impl Revision {
    /// Anything that is not (a prefix of) an address can never name a commit.
    pub fn try_parse(revision: &str) -> anyhow::Result<Revision> {
        let revision = revision.trim().to_ascii_lowercase();

        if revision.len() == OBJECT_ID_LENGTH && ObjectId::is_hex_prefix(&revision) {
            Ok(Revision::Address(ObjectId::try_parse(revision)?))
        } else if revision.len() >= MIN_COMMIT_PREFIX_LENGTH && ObjectId::is_hex_prefix(&revision)
        {
            Ok(Revision::Prefix(revision))
        } else {
            Err(VcsError::NoSuchCommit.into())
        }
    }

    /// Resolve to the address of an existing commit.
    ///
    /// Objects that are not commits never match, so a prefix shared by one
    /// commit and some blobs is not ambiguous.
    pub fn resolve_commit(&self, database: &Database) -> anyhow::Result<ObjectId> {
        match self {
            Revision::Address(oid) => {
                if database.exists(oid) && database.try_parse_commit(oid)?.is_some() {
                    Ok(oid.clone())
                } else {
                    Err(VcsError::NoSuchCommit.into())
                }
            }
            Revision::Prefix(prefix) => {
                let mut commits = Vec::new();
                for oid in database.find_objects_by_prefix(prefix)? {
                    if database.try_parse_commit(&oid)?.is_some() {
                        commits.push(oid);
                    }
                }

                match commits.len() {
                    0 => Err(VcsError::NoSuchCommit.into()),
                    1 => Ok(commits.remove(0)),
                    _ => Err(VcsError::AmbiguousCommit(prefix.clone()).into()),
                }
            }
        }
    }

    /// Resolve to the address of an existing object of any kind.
    pub fn resolve_object(&self, database: &Database) -> anyhow::Result<ObjectId> {
        match self {
            Revision::Address(oid) if database.exists(oid) => Ok(oid.clone()),
            Revision::Address(oid) => Err(VcsError::NoSuchObject(oid.to_string()).into()),
            Revision::Prefix(prefix) => {
                let mut matches = database.find_objects_by_prefix(prefix)?;

                match matches.len() {
                    0 => Err(VcsError::NoSuchObject(prefix.clone()).into()),
                    1 => Ok(matches.remove(0)),
                    _ => Err(VcsError::AmbiguousObject(prefix.clone()).into()),
                }
            }
        }
    }
}
