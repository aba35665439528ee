//! Browse command: derive and render a catalog view

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use crate::catalog::{
    paged_view, Catalog, CategoryFilter, ItemView, SortOrder, ViewQuery, DEFAULT_PAGE_SIZE,
};
use crate::cli::{parse_category_filter, parse_price, parse_sort_order};
use crate::data_paths::DataPaths;
use crate::display;

#[derive(Args, Clone)]
pub struct BrowseArgs {
    /// Search text, matched case-insensitively against item names
    #[arg(long, default_value = "")]
    pub search: String,

    /// Category filter: "all" or one of the category labels
    #[arg(long, default_value = "all", value_parser = parse_category_filter)]
    pub category: CategoryFilter,

    /// Sort order: price-ascending or price-descending
    #[arg(long, default_value = "price-ascending", value_parser = parse_sort_order)]
    pub sort: SortOrder,

    /// Filter: minimum price (inclusive)
    #[arg(long, value_parser = parse_price)]
    pub min_price: Option<Decimal>,

    /// Filter: maximum price (inclusive)
    #[arg(long, value_parser = parse_price)]
    pub max_price: Option<Decimal>,

    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Items per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Emit the page as JSON view-models instead of a table
    #[arg(long)]
    pub json: bool,
}

pub struct BrowseCommand {
    args: BrowseArgs,
}

impl BrowseCommand {
    pub fn new(args: BrowseArgs) -> Self {
        Self { args }
    }

    pub fn execute(&self, seed: Option<u64>, _data_paths: DataPaths) -> Result<()> {
        let catalog = super::build_catalog(seed);

        let query = ViewQuery {
            search: self.args.search.clone(),
            category: self.args.category,
            sort: self.args.sort,
            min_price: self.args.min_price,
            max_price: self.args.max_price,
        };

        tracing::debug!(
            search = %query.search,
            category = %query.category,
            sort = %query.sort,
            "Deriving catalog view"
        );

        let page = paged_view(&catalog, &query, self.args.page, self.args.page_size);

        if self.args.json {
            let views: Vec<ItemView> = page.items.iter().copied().map(ItemView::from).collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
        } else {
            display::display_catalog_page(&page, &query);
        }

        Ok(())
    }
}
