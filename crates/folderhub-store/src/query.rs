//! Read-only store operations: organization filter and descendant listing.

use tracing::debug;

use folderhub_core::error::FolderError;
use folderhub_core::result::FolderResult;
use folderhub_core::types::OrgId;
use folderhub_entity::Folder;

use crate::driver::FolderDriver;

impl FolderDriver {
    /// All folders belonging to the given organization, in store order.
    ///
    /// Returns an empty vec (never an error) when the organization has no
    /// folders.
    pub fn get_folders_by_org_id(&self, org_id: OrgId) -> Vec<Folder> {
        let res: Vec<Folder> = self
            .folders
            .iter()
            .filter(|f| f.org_id == org_id)
            .cloned()
            .collect();

        debug!(%org_id, count = res.len(), "Filtered folders by org");
        res
    }

    /// All strict descendants of the named folder within the given
    /// organization, in store order.
    ///
    /// The name lookup takes the first match in store order irrespective
    /// of organization; the org check is then applied to that single
    /// match, which is what distinguishes [`FolderError::FolderNotFound`]
    /// from [`FolderError::FolderNotInOrg`]. A folder with no descendants
    /// yields an empty vec, not an error.
    pub fn get_all_child_folders(&self, org_id: OrgId, name: &str) -> FolderResult<Vec<Folder>> {
        let parent = self
            .folders
            .iter()
            .find(|f| f.name == name)
            .ok_or(FolderError::FolderNotFound)?;

        if parent.org_id != org_id {
            return Err(FolderError::FolderNotInOrg);
        }

        let parent_path = parent.path.as_str();
        let children: Vec<Folder> = self
            .folders
            .iter()
            .filter(|f| f.org_id == org_id && f.is_descendant_of(parent_path))
            .cloned()
            .collect();

        debug!(%org_id, name, parent_path, count = children.len(), "Collected child folders");
        Ok(children)
    }
}
