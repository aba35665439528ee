//! Categories command: per-category item counts for a generated catalog

use anyhow::Result;
use clap::Args;

use crate::data_paths::DataPaths;
use crate::display;

#[derive(Args, Clone)]
pub struct CategoriesArgs {}

pub struct CategoriesCommand {
    _args: CategoriesArgs,
}

impl CategoriesCommand {
    pub fn new(args: CategoriesArgs) -> Self {
        Self { _args: args }
    }

    pub fn execute(&self, seed: Option<u64>, _data_paths: DataPaths) -> Result<()> {
        let catalog = super::build_catalog(seed);
        let counts = catalog.category_counts();
        display::display_category_counts(&counts, catalog.len());
        Ok(())
    }
}
