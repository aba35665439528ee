pub mod catalog;
pub mod cli;
pub mod data_paths;
pub mod display;
pub mod errors;
pub mod logging;
pub mod types;

// Re-export the engine surface at the root level
pub use catalog::{apply_view, paged_view, Catalog, CatalogItem, Category, ViewQuery};
