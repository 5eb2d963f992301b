//! stock-server: HTTP server for the product catalogue.
//!
//! Provides the REST API over a [`ProductStore`](stock_core::store::ProductStore).
//! Domain types, storage, and search composition live in `stock-core`.

/// REST API layer: Axum router, HTTP handlers, models, errors, metrics.
pub mod api;
