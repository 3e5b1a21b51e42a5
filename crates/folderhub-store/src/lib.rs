//! # folderhub-store
//!
//! The in-memory folder store: the single source of truth for an
//! organization-scoped folder hierarchy encoded as materialized paths.
//!
//! [`FolderDriver`] owns the ordered folder collection. Read operations
//! (`get_folders_by_org_id`, `get_all_child_folders`) answer membership
//! and descendant questions by string-prefix comparison; the one write
//! operation (`move_folder`) relocates a folder and its entire subtree,
//! rewriting every affected path in a single linear scan after all
//! validation has passed.

pub mod driver;
pub mod move_folder;
pub mod query;

pub use driver::FolderDriver;
