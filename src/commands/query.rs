//! Read-only folder query commands.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use folderhub_core::types::OrgId;
use folderhub_entity::Folder;
use folderhub_store::FolderDriver;

use crate::output::{self, OutputFormat};

/// Arguments for the `list` command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Organization ID
    #[arg(short, long)]
    pub org: OrgId,
}

/// Arguments for the `children` command
#[derive(Debug, Args)]
pub struct ChildrenArgs {
    /// Organization ID
    #[arg(short, long)]
    pub org: OrgId,
    /// Name of the anchor folder
    pub name: String,
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct FolderRow {
    /// Name
    name: String,
    /// Path
    path: String,
    /// Organization
    org: String,
}

impl From<&Folder> for FolderRow {
    fn from(f: &Folder) -> Self {
        Self {
            name: f.name.clone(),
            path: f.path.clone(),
            org: f.org_id.to_string(),
        }
    }
}

/// Print all folders for an organization.
pub fn list(driver: &FolderDriver, args: &ListArgs, format: OutputFormat) -> anyhow::Result<()> {
    let folders = driver.get_folders_by_org_id(args.org);
    let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}

/// Print all descendants of a named folder.
pub fn children(
    driver: &FolderDriver,
    args: &ChildrenArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let folders = driver.get_all_child_folders(args.org, &args.name)?;
    let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}
