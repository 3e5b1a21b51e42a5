//! The `tree` command: render an organization's folder hierarchy.

use clap::Args;

use folderhub_core::types::OrgId;
use folderhub_entity::{FolderNode, FolderTree};
use folderhub_store::FolderDriver;

/// Arguments for the `tree` command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Organization ID
    #[arg(short, long)]
    pub org: OrgId,
}

/// Render the folder tree for an organization.
pub fn execute(driver: &FolderDriver, args: &TreeArgs) -> anyhow::Result<()> {
    let folders = driver.get_folders_by_org_id(args.org);
    let tree = FolderTree::build(&folders);

    if tree.roots.is_empty() {
        println!("No folders found for org {}.", args.org);
        return Ok(());
    }

    for root in &tree.roots {
        print_node(root, 0);
    }
    println!("{} folders total", tree.total_folders);
    Ok(())
}

fn print_node(node: &FolderNode, depth: usize) {
    let indent = "  ".repeat(depth);
    if depth == 0 {
        println!("{}/", node.name);
    } else {
        println!("{}├── {}/", indent, node.name);
    }
    for child in &node.children {
        print_node(child, depth + 1);
    }
}
