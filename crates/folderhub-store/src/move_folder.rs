//! The move engine: validated subtree relocation.
//!
//! Moving a folder rewrites the materialized path of the folder itself and
//! of every strict descendant. The rewrite is a single linear scan that
//! classifies each folder as the moved root, a descendant, or unaffected
//! by pure string comparison.

use tracing::info;

use folderhub_core::error::FolderError;
use folderhub_core::result::FolderResult;
use folderhub_entity::Folder;

use crate::driver::FolderDriver;

impl FolderDriver {
    /// Move the first folder named `name` (and its entire subtree) under
    /// the first folder named `dst`.
    ///
    /// Validation short-circuits in a fixed order: source exists,
    /// destination exists, not a self-move, destination not inside the
    /// source's subtree, same organization. No path is written until
    /// every check has passed, so a failed move leaves the store
    /// untouched.
    ///
    /// Returns the full mutated folder collection, in store order.
    pub fn move_folder(&mut self, name: &str, dst: &str) -> FolderResult<Vec<Folder>> {
        let src_idx = self
            .folders
            .iter()
            .position(|f| f.name == name)
            .ok_or(FolderError::SourceFolderNotFound)?;
        let dst_idx = self
            .folders
            .iter()
            .position(|f| f.name == dst)
            .ok_or(FolderError::DestinationFolderNotFound)?;

        let source = &self.folders[src_idx];
        let destination = &self.folders[dst_idx];

        if source.path == destination.path {
            return Err(FolderError::CannotMoveToSelf);
        }
        if destination.is_descendant_of(&source.path) {
            return Err(FolderError::CannotMoveToChild);
        }
        if source.org_id != destination.org_id {
            return Err(FolderError::CannotMoveBetweenOrgs);
        }

        let org_id = source.org_id;
        let old_path = source.path.clone();
        let new_path = format!("{}.{}", destination.path, source.name);

        self.folders[src_idx].path = new_path.clone();

        // Rewrite every descendant: strip the old parent prefix, keep the
        // relative suffix (which starts with '.').
        for folder in &mut self.folders {
            if folder.org_id == org_id && folder.is_descendant_of(&old_path) {
                folder.path = format!("{}{}", new_path, &folder.path[old_path.len()..]);
            }
        }

        info!(folder = name, %old_path, %new_path, "Folder moved");
        Ok(self.folders.clone())
    }
}
