//! Request and response data transfer objects for the REST API.
//!
//! All types derive `Serialize` and/or `Deserialize` for JSON marshalling via Axum.
//! Conversions to and from the core entity types live here as well.

use serde::{Deserialize, Serialize};
use stock_core::{NewProduct, Product, ProductType};

/// Request body for `POST /api/product` and `PUT /api/product/:id`.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    #[serde(default)]
    pub cost_price: f64,
    #[serde(default)]
    pub sale_price: f64,
    #[serde(default)]
    pub stock: u32,
    pub product_type_id: String,
}

impl From<ProductRequest> for NewProduct {
    fn from(req: ProductRequest) -> Self {
        NewProduct {
            name: req.name.trim().to_string(),
            cost_price: req.cost_price,
            sale_price: req.sale_price,
            stock: req.stock,
            product_type_id: req.product_type_id.trim().to_string(),
        }
    }
}

/// Response body for product retrieval, creation, update, and search results.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub cost_price: f64,
    pub sale_price: f64,
    pub stock: u32,
    pub product_type_id: String,
    pub product_type_description: String,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            cost_price: product.cost_price,
            sale_price: product.sale_price,
            stock: product.stock,
            product_type_id: product.product_type.id.clone(),
            product_type_description: product.product_type.description.clone(),
        }
    }
}

/// Request body for `POST /api/product/search`.
///
/// `condition` is `AND` or `OR`; blank filters are ignored.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub name: Option<String>,
    pub product_type_id: Option<String>,
    pub condition: Option<String>,
}

/// Response body for product searches.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<ProductResponse>,
    pub count: usize,
}

/// Request body for `POST /api/product-type`.
#[derive(Debug, Deserialize)]
pub struct ProductTypeRequest {
    /// Caller-chosen id; a UUID is generated when omitted.
    pub id: Option<String>,
    pub description: String,
}

/// Response body for product type endpoints.
#[derive(Debug, Serialize)]
pub struct ProductTypeResponse {
    pub id: String,
    pub description: String,
}

impl From<ProductType> for ProductTypeResponse {
    fn from(product_type: ProductType) -> Self {
        Self {
            id: product_type.id,
            description: product_type.description,
        }
    }
}

/// Generic success message response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub product_count: usize,
    pub product_type_count: usize,
}
