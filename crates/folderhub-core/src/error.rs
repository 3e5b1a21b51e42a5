//! Unified error types for FolderHub.
//!
//! Every fallible store operation returns a [`FolderError`] so that callers
//! can match on the exact failure condition and propagate with the `?`
//! operator.

use thiserror::Error;

/// The closed set of recoverable failure conditions raised by the folder
/// store.
///
/// All variants are expected, caller-visible conditions — none are
/// process-fatal, and retrying with unchanged inputs reproduces the same
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FolderError {
    /// The named folder does not exist anywhere in the store.
    #[error("folder does not exist")]
    FolderNotFound,
    /// The named folder exists but not under the queried organization.
    #[error("folder does not exist in the given org")]
    FolderNotInOrg,
    /// The move's source name matched no folder.
    #[error("source folder does not exist")]
    SourceFolderNotFound,
    /// The move's destination name matched no folder.
    #[error("destination folder does not exist")]
    DestinationFolderNotFound,
    /// Source and destination resolve to the same path.
    #[error("cannot move a folder to itself")]
    CannotMoveToSelf,
    /// The destination lies inside the source's own subtree.
    #[error("cannot move a folder to a child of itself")]
    CannotMoveToChild,
    /// Source and destination belong to different organizations.
    #[error("cannot move a folder to a different organization")]
    CannotMoveBetweenOrgs,
}
