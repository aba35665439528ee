//! Marketplace catalog engine
//!
//! Generation of the synthetic 200-item catalog plus the filter/sort/paginate
//! view derivation that the storefront grid renders.

mod generate;
mod item;
mod view;

pub use generate::{Catalog, CATALOG_SIZE, MAX_PRICE_CENTS, MIN_PRICE_CENTS};
pub use item::{CatalogItem, Category};
pub use view::{
    apply_view, paged_view, CategoryFilter, ItemView, SortOrder, ViewPage, ViewQuery,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
