//! Item command: look up one catalog item by id

use anyhow::Result;
use clap::Args;

use crate::data_paths::DataPaths;
use crate::display;
use crate::errors::CatalogError;

#[derive(Args, Clone)]
pub struct ItemArgs {
    /// Item id (1-based, as shown in the browse grid)
    pub id: u32,
}

pub struct ItemCommand {
    args: ItemArgs,
}

impl ItemCommand {
    pub fn new(args: ItemArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, seed: Option<u64>, _data_paths: DataPaths) -> Result<()> {
        let catalog = super::build_catalog(seed);

        let item = catalog
            .get(self.args.id)
            .ok_or(CatalogError::ItemNotFound(self.args.id))?;

        display::display_item_detail(item);
        Ok(())
    }
}
