//! In-memory product store.
//!
//! [`InMemoryStore`] keeps products and product types behind one `RwLock`,
//! together with the insertion order used for enumeration. Cloning the store
//! produces a new handle to the same shared data.

use crate::error::StoreError;
use crate::product::{NewProduct, Product, ProductType};
use crate::store::ProductStore;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Internal data for the store, protected by a `RwLock`.
#[derive(Debug, Default)]
struct StoreData {
    products: HashMap<String, Arc<Product>>,
    /// Product ids in insertion order.
    order: Vec<String>,
    product_types: HashMap<String, ProductType>,
    type_order: Vec<String>,
}

impl StoreData {
    fn resolve_type(&self, id: &str) -> Result<ProductType, StoreError> {
        self.product_types
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::UnknownProductType(id.to_string()))
    }

    /// Checks that no product other than `except` uses `name` (trimmed, case-insensitive).
    fn ensure_name_free(&self, name: &str, except: Option<&str>) -> Result<(), StoreError> {
        let wanted = name.trim().to_lowercase();
        let taken = self
            .products
            .values()
            .any(|p| Some(p.id.as_str()) != except && p.name.trim().to_lowercase() == wanted);
        if taken {
            return Err(StoreError::DuplicateName(name.to_string()));
        }
        Ok(())
    }
}

/// A thread-safe in-memory [`ProductStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    data: Arc<RwLock<StoreData>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

}

impl ProductStore for InMemoryStore {
    fn create(&self, fields: NewProduct) -> Result<Arc<Product>, StoreError> {
        fields.validate()?;
        let mut data = self.data.write();
        data.ensure_name_free(&fields.name, None)?;
        let product_type = data.resolve_type(&fields.product_type_id)?;
        let product = Arc::new(Product::new(fields, product_type));
        data.order.push(product.id.clone());
        data.products.insert(product.id.clone(), product.clone());
        tracing::debug!(product_id = %product.id, "Product stored");
        Ok(product)
    }

    fn get(&self, id: &str) -> Result<Option<Arc<Product>>, StoreError> {
        Ok(self.data.read().products.get(id).cloned())
    }

    fn update(&self, id: &str, fields: NewProduct) -> Result<Arc<Product>, StoreError> {
        fields.validate()?;
        let mut data = self.data.write();
        if !data.products.contains_key(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        data.ensure_name_free(&fields.name, Some(id))?;
        let product_type = data.resolve_type(&fields.product_type_id)?;
        let product = Arc::new(Product::with_id(id.to_string(), fields, product_type));
        data.products.insert(id.to_string(), product.clone());
        Ok(product)
    }

    fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut data = self.data.write();
        if data.products.remove(id).is_some() {
            data.order.retain(|existing| existing != id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn enumerate_all(&self) -> Result<Vec<Arc<Product>>, StoreError> {
        let data = self.data.read();
        Ok(data
            .order
            .iter()
            .filter_map(|id| data.products.get(id).cloned())
            .collect())
    }

    fn create_product_type(&self, product_type: ProductType) -> Result<ProductType, StoreError> {
        product_type.validate()?;
        let mut data = self.data.write();
        if data.product_types.contains_key(&product_type.id) {
            return Err(StoreError::DuplicateProductType(product_type.id));
        }
        data.type_order.push(product_type.id.clone());
        data.product_types
            .insert(product_type.id.clone(), product_type.clone());
        Ok(product_type)
    }

    fn get_product_type(&self, id: &str) -> Result<Option<ProductType>, StoreError> {
        Ok(self.data.read().product_types.get(id).cloned())
    }

    fn list_product_types(&self) -> Result<Vec<ProductType>, StoreError> {
        let data = self.data.read();
        Ok(data
            .type_order
            .iter()
            .filter_map(|id| data.product_types.get(id).cloned())
            .collect())
    }

    fn product_count(&self) -> Result<usize, StoreError> {
        Ok(self.data.read().products.len())
    }

    fn product_type_count(&self) -> Result<usize, StoreError> {
        Ok(self.data.read().product_types.len())
    }
}
