//! Folder entity model.

use serde::{Deserialize, Serialize};

use folderhub_core::types::OrgId;

/// A folder in an organization's hierarchy.
///
/// The hierarchy is encoded entirely in `path`: a dot-separated chain of
/// ancestor names ending in this folder's own `name`. A root folder's
/// path is just its name. Ancestor and descendant relationships are
/// answered by string-prefix comparison, never by following references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder name (the last path segment).
    pub name: String,
    /// Full materialized path (e.g., `alpha.bravo.charlie`).
    pub path: String,
    /// The organization this folder belongs to.
    pub org_id: OrgId,
}

impl Folder {
    /// Create a folder record.
    pub fn new(name: impl Into<String>, path: impl Into<String>, org_id: OrgId) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            org_id,
        }
    }

    /// Check if this is a root folder (its path is a single segment).
    pub fn is_root(&self) -> bool {
        self.path == self.name
    }

    /// The materialized path of this folder's parent, or `None` for roots.
    pub fn parent_path(&self) -> Option<&str> {
        self.path.rfind('.').map(|idx| &self.path[..idx])
    }

    /// Check whether this folder is a strict descendant of `ancestor_path`.
    ///
    /// True iff the path starts with `ancestor_path + "."`. The dot
    /// boundary rules out sibling prefixes (`alpha2` is not under
    /// `alpha`), and the strict-length requirement rules out the
    /// ancestor itself.
    pub fn is_descendant_of(&self, ancestor_path: &str) -> bool {
        self.path.len() > ancestor_path.len()
            && self.path.as_bytes()[ancestor_path.len()] == b'.'
            && self.path.starts_with(ancestor_path)
    }
}
