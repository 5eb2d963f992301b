//! Error types for the store and search layers.

use thiserror::Error;

/// Failures reported by a [`ProductStore`](crate::store::ProductStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another product already uses this name.
    #[error("The name '{0}' is already in use")]
    DuplicateName(String),
    /// A product type with this id already exists.
    #[error("Product type '{0}' already exists")]
    DuplicateProductType(String),
    /// The referenced product type is not registered.
    #[error("Product type '{0}' not found")]
    UnknownProductType(String),
    /// Field values fail validation.
    #[error("{0}")]
    Invalid(String),
    /// No product with this id.
    #[error("Product '{0}' not found")]
    NotFound(String),
    /// The backing source could not be read or written.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Failures reported by [`search_products`](crate::search::search_products).
#[derive(Debug, Error)]
pub enum SearchError {
    /// The combine selector is neither `AND` nor `OR`.
    #[error("Unsupported combine mode '{0}', expected AND or OR")]
    UnsupportedCombineMode(String),
    /// Enumerating the store failed; no partial result is returned.
    #[error("failed to read products: {0}")]
    StoreRead(#[source] StoreError),
}

/// Failures while loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid seed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("seed rejected by store: {0}")]
    Store(#[from] StoreError),
}
