//! # stock-core
//!
//! Product catalogue domain: products and product types, the store
//! abstraction that persists them, and the search machinery that composes
//! optional filter clauses into a single predicate.
//!
//! This crate has no async dependencies; the HTTP layer lives in `stock-server`.

/// Global configuration constants: limits and server defaults.
pub mod config;
/// Error types shared by the store and search layers.
pub mod error;
/// Core entity types: `Product`, `ProductType`, and `NewProduct`.
pub mod product;
/// Search: filter clauses, predicate composition, and execution over a store.
pub mod search;
/// Storage layer: the `ProductStore` trait, in-memory implementation, and seed loading.
pub mod store;

pub use error::{SearchError, SeedError, StoreError};
pub use product::{NewProduct, Product, ProductType};
