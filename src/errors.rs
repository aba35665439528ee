//! Typed errors for the catalog engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The text did not name any of the known marketplace categories
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// No item with this id exists in the generated catalog
    #[error("item #{0} not found in catalog")]
    ItemNotFound(u32),
}
