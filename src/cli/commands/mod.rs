//! CLI Commands module
//!
//! Each command follows a consistent pattern with dedicated Args and Command
//! structs, dispatched from `Cli::execute`.

use crate::catalog::Catalog;

// Command modules
pub mod browse;
pub mod categories;
pub mod export;
pub mod item;
pub mod version;

/// Build the session catalog, seeded when the global --seed flag is set
pub(crate) fn build_catalog(seed: Option<u64>) -> Catalog {
    let catalog = match seed {
        Some(seed) => {
            tracing::info!(seed, "Generating seeded catalog");
            Catalog::seeded(seed)
        }
        None => Catalog::random(),
    };
    tracing::debug!(items = catalog.len(), "Catalog generated");
    catalog
}
