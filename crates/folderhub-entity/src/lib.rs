//! # folderhub-entity
//!
//! Domain entity models for FolderHub. The `Folder` struct is the sole
//! persistent entity; `FolderNode` is a derived, display-oriented tree
//! view built from the flat materialized-path collection.

pub mod folder;

pub use folder::{Folder, FolderNode, FolderTree};
