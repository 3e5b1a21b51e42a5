//! The folder store driver.

use folderhub_entity::Folder;

/// Owns the authoritative, ordered folder collection.
///
/// Construction performs no validation; a malformed hierarchy is accepted
/// as-is and only checked at move time. All reads return owned clones, so
/// callers never alias store memory. Mutation requires `&mut self`, which
/// makes the at-most-one-writer rule a compile-time guarantee within safe
/// Rust; sharing across threads is the caller's responsibility (e.g. an
/// `RwLock<FolderDriver>`).
#[derive(Debug, Clone)]
pub struct FolderDriver {
    /// The ordered folder collection. Iteration order is the order the
    /// folders were supplied in, and every operation preserves it.
    pub(crate) folders: Vec<Folder>,
}

impl FolderDriver {
    /// Create a driver that takes ownership of the initial folders.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    /// The full folder collection, in store order.
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    /// Number of folders in the store.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Whether the store holds no folders.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}
