//! Seed file loading.
//!
//! A seed file is a JSON document with `product_types` and `products` arrays.
//! Product types are registered first so products can reference them by id.
//!
//! ```json
//! {
//!   "product_types": [{ "id": "A", "description": "Tools" }],
//!   "products": [{ "name": "Widget", "sale_price": 9.5, "product_type_id": "A" }]
//! }
//! ```

use crate::error::SeedError;
use crate::product::{NewProduct, ProductType};
use crate::store::ProductStore;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Parsed contents of a seed file.
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub product_types: Vec<ProductType>,
    #[serde(default)]
    pub products: Vec<NewProduct>,
}

/// Loads `path` into `store`. Returns `(product_types, products)` inserted.
///
/// Stops at the first entry the store rejects; entries before it stay stored.
pub fn load_seed(path: &Path, store: &dyn ProductStore) -> Result<(usize, usize), SeedError> {
    let bytes = fs::read(path)?;
    let seed: Seed = serde_json::from_slice(&bytes)?;

    let type_count = seed.product_types.len();
    for product_type in seed.product_types {
        store.create_product_type(product_type)?;
    }
    let product_count = seed.products.len();
    for product in seed.products {
        store.create(product)?;
    }

    tracing::info!(
        path = %path.display(),
        product_types = type_count,
        products = product_count,
        "Seed loaded"
    );
    Ok((type_count, product_count))
}
