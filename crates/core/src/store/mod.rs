//! Storage layer: the `ProductStore` trait, its in-memory implementation, and
//! JSON seed loading.
//!
//! Every trait method is a single atomic operation against the backing source.
//! Enumeration returns products in the store's own order.

/// Thread-safe in-memory store.
pub mod memory;
/// Seed file loading (product types and products from JSON).
pub mod seed;

pub use memory::InMemoryStore;
pub use seed::{load_seed, Seed};

use crate::error::StoreError;
use crate::product::{NewProduct, Product, ProductType};
use std::sync::Arc;

/// Persistence collaborator for products and product types.
pub trait ProductStore: Send + Sync {
    /// Stores a new product. Fails on invalid fields, a duplicate name, or an
    /// unknown product type.
    fn create(&self, fields: NewProduct) -> Result<Arc<Product>, StoreError>;

    /// Fetches a product by id.
    fn get(&self, id: &str) -> Result<Option<Arc<Product>>, StoreError>;

    /// Replaces every field of an existing product, keeping its id and position.
    fn update(&self, id: &str, fields: NewProduct) -> Result<Arc<Product>, StoreError>;

    /// Removes a product. Returns `true` if it existed.
    fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Snapshot of all stored products in enumeration order.
    fn enumerate_all(&self) -> Result<Vec<Arc<Product>>, StoreError>;

    /// Registers a product type. Fails on invalid fields or an already registered id.
    fn create_product_type(&self, product_type: ProductType) -> Result<ProductType, StoreError>;

    /// Fetches a product type by id.
    fn get_product_type(&self, id: &str) -> Result<Option<ProductType>, StoreError>;

    /// All registered product types in registration order.
    fn list_product_types(&self) -> Result<Vec<ProductType>, StoreError>;

    /// Number of stored products.
    fn product_count(&self) -> Result<usize, StoreError>;

    /// Number of registered product types.
    fn product_type_count(&self) -> Result<usize, StoreError>;
}
