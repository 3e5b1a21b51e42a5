//! # folderhub-core
//!
//! Core crate for FolderHub. Contains typed identifiers, configuration
//! schemas, and the unified error system.
//!
//! This crate has **no** internal dependencies on other FolderHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::FolderError;
pub use result::FolderResult;
