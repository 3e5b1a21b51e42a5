//! Folder tree structures for hierarchical display.
//!
//! Built from the flat materialized-path collection; parentage is derived
//! by comparing each folder's parent path against the paths present in
//! the input, since folders carry no parent references.

use serde::{Deserialize, Serialize};

use super::model::Folder;

/// A node in a folder tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder name.
    pub name: String,
    /// Full path.
    pub path: String,
    /// Number of direct child folders.
    pub child_count: u64,
    /// Child folder nodes.
    pub children: Vec<FolderNode>,
}

/// A complete folder tree built from a flat folder collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderTree {
    /// The root node(s) of the tree.
    pub roots: Vec<FolderNode>,
    /// Total number of folders in the tree.
    pub total_folders: u64,
}

impl FolderTree {
    /// Build a tree from a flat list of folders.
    ///
    /// A folder becomes a root when its parent path does not appear in
    /// the input, so orphaned subtrees are still rendered rather than
    /// silently dropped.
    pub fn build(folders: &[Folder]) -> Self {
        let roots: Vec<FolderNode> = folders
            .iter()
            .filter(|f| match f.parent_path() {
                None => true,
                Some(parent) => !folders.iter().any(|p| p.path == parent),
            })
            .map(|root| build_node(root, folders))
            .collect();

        Self {
            roots,
            total_folders: folders.len() as u64,
        }
    }
}

fn build_node(folder: &Folder, all_folders: &[Folder]) -> FolderNode {
    let children: Vec<FolderNode> = all_folders
        .iter()
        .filter(|f| f.parent_path() == Some(folder.path.as_str()))
        .map(|child| build_node(child, all_folders))
        .collect();

    FolderNode {
        name: folder.name.clone(),
        path: folder.path.clone(),
        child_count: children.len() as u64,
        children,
    }
}
