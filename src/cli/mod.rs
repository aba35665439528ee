//! CLI module for marketgrid
//!
//! Command-line interface for the simulated marketplace catalog. Uses clap
//! for argument parsing and a structured command pattern: one Args/Command
//! pair per subcommand, dispatched from `Cli::execute`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod args;
pub mod commands;

pub use args::{parse_category_filter, parse_price, parse_sort_order};
use crate::data_paths::{DataPaths, DEFAULT_DATA_DIR};
use crate::logging::{init_logging, LoggingConfig};

use commands::browse::{BrowseArgs, BrowseCommand};
use commands::categories::{CategoriesArgs, CategoriesCommand};
use commands::export::{ExportArgs, ExportCommand};
use commands::item::{ItemArgs, ItemCommand};
use commands::version::{VersionArgs, VersionCommand};

#[derive(Parser)]
#[command(name = "marketgrid")]
#[command(version)]
#[command(about = "Browse a simulated AI marketplace catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Seed for reproducible catalog generation
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Data directory path (default: ./data)
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the catalog with search, category, sort and price filters
    Browse(BrowseArgs),

    /// Show one catalog item by id
    Item(ItemArgs),

    /// Show per-category item counts
    Categories(CategoriesArgs),

    /// Export a catalog snapshot to the data directory
    Export(ExportArgs),

    /// Show version information
    Version(VersionArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let data_paths = DataPaths::new(&self.data_dir);

        // Ensure all directories exist
        data_paths.ensure_directories()?;

        init_logging(LoggingConfig::new(data_paths.clone(), self.verbose))?;

        match self.command {
            Commands::Browse(args) => BrowseCommand::new(args).execute(self.seed, data_paths),
            Commands::Item(args) => ItemCommand::new(args).execute(self.seed, data_paths),
            Commands::Categories(args) => {
                CategoriesCommand::new(args).execute(self.seed, data_paths)
            }
            Commands::Export(args) => ExportCommand::new(args).execute(self.seed, data_paths),
            Commands::Version(args) => VersionCommand::new(args).execute(self.seed, data_paths),
        }
    }
}
