//! CLI command definitions and dispatch.

pub mod move_folder;
pub mod query;
pub mod tree;

use std::path::Path;

use clap::{Parser, Subcommand};

use folderhub_core::config::AppConfig;
use folderhub_store::FolderDriver;

use crate::fixtures;
use crate::output::OutputFormat;

/// FolderHub — organization folder hierarchy tool
#[derive(Debug, Parser)]
#[command(name = "folderhub", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (reads config/default.toml plus
    /// config/<env>.toml when present)
    #[arg(short, long, default_value = "default")]
    pub env: String,

    /// Path to a JSON fixtures file (overrides the configured path)
    #[arg(long)]
    pub fixtures: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List folders belonging to an organization
    List(query::ListArgs),
    /// List all descendants of a named folder
    Children(query::ChildrenArgs),
    /// Move a folder (and its subtree) under a new parent
    Move(move_folder::MoveArgs),
    /// Render an organization's folder tree
    Tree(tree::TreeArgs),
}

impl Cli {
    /// Execute the CLI command.
    pub fn execute(&self, config: &AppConfig) -> anyhow::Result<()> {
        let mut driver = self.load_driver(config)?;

        match &self.command {
            Commands::List(args) => query::list(&driver, args, self.format),
            Commands::Children(args) => query::children(&driver, args, self.format),
            Commands::Move(args) => move_folder::execute(&mut driver, args, self.format),
            Commands::Tree(args) => tree::execute(&driver, args),
        }
    }

    /// Build a driver from the fixtures file named on the command line or
    /// in configuration.
    fn load_driver(&self, config: &AppConfig) -> anyhow::Result<FolderDriver> {
        let path = self.fixtures.as_deref().unwrap_or(&config.data.fixtures);
        let folders = fixtures::load_or_sample(Path::new(path))?;
        tracing::debug!(count = folders.len(), "Loaded initial folders");
        Ok(FolderDriver::new(folders))
    }
}
