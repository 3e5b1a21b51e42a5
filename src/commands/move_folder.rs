//! The `move` command.

use clap::Args;

use folderhub_store::FolderDriver;

use crate::commands::query::FolderRow;
use crate::output::{self, OutputFormat};

/// Arguments for the `move` command
#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Name of the folder to move
    pub source: String,
    /// Name of the new parent folder
    pub destination: String,
}

/// Move a folder and print the resulting store.
pub fn execute(
    driver: &mut FolderDriver,
    args: &MoveArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let folders = driver.move_folder(&args.source, &args.destination)?;

    output::print_success(&format!(
        "Moved '{}' under '{}'",
        args.source, args.destination
    ));
    let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
    output::print_list(&rows, format);
    Ok(())
}
