//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use crate::api::metrics;
use crate::api::models::*;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Instant;
use stock_core::config;
use stock_core::search::{search_products, CombineMode, SearchCriteria};
use stock_core::store::ProductStore;
use stock_core::{NewProduct, ProductType};

/// Shared application state passed to every handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    pub prometheus_handle: PrometheusHandle,
    pub start_time: Instant,
}

fn validate_filter(field: &str, value: Option<&str>) -> Result<(), ApiError> {
    if value.is_some_and(|v| v.chars().count() > config::MAX_FILTER_LEN) {
        return Err(ApiError::BadRequest(format!(
            "{} filter exceeds {} characters",
            field,
            config::MAX_FILTER_LEN
        )));
    }
    Ok(())
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let counts = state
        .store
        .product_count()
        .and_then(|products| Ok((products, state.store.product_type_count()?)));
    let uptime = state.start_time.elapsed().as_secs();

    let (status_code, status, (product_count, product_type_count)) = match counts {
        Ok(counts) => (StatusCode::OK, "ok", counts),
        Err(e) => {
            tracing::warn!("Health check could not read store: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", (0, 0))
        }
    };

    (
        status_code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: uptime,
            product_count,
            product_type_count,
        }),
    )
}

/// `GET /metrics`
pub async fn metrics_endpoint(State(state): State<AppState>) -> String {
    state.prometheus_handle.render()
}

/// `POST /api/product`
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.store.create(NewProduct::from(req))?;

    metrics::record_write_operation("create");
    tracing::info!(product_id = %product.id, name = %product.name, "Product created");
    Ok(Json(ProductResponse::from(product.as_ref())))
}

/// `GET /api/product`
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = state.store.enumerate_all()?;
    Ok(Json(
        products
            .iter()
            .map(|p| ProductResponse::from(p.as_ref()))
            .collect(),
    ))
}

/// `GET /api/product/:id`
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state
        .store
        .get(&id)?
        .ok_or_else(|| ApiError::NotFound(format!("Product '{}' not found", id)))?;
    Ok(Json(ProductResponse::from(product.as_ref())))
}

/// `PUT /api/product/:id`
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product = state.store.update(&id, NewProduct::from(req))?;

    metrics::record_write_operation("update");
    tracing::info!(product_id = %id, "Product updated");
    Ok(Json(ProductResponse::from(product.as_ref())))
}

/// `DELETE /api/product/:id`
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if state.store.delete(&id)? {
        metrics::record_write_operation("delete");
        tracing::info!(product_id = %id, "Product deleted");
        Ok(Json(MessageResponse {
            message: format!("Product '{}' deleted", id),
        }))
    } else {
        Err(ApiError::NotFound(format!("Product '{}' not found", id)))
    }
}

/// `POST /api/product/search`
pub async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let condition = req
        .condition
        .ok_or_else(|| ApiError::BadRequest("condition is required (AND or OR)".into()))?;
    let mode: CombineMode = condition.parse()?;

    validate_filter("name", req.name.as_deref())?;
    validate_filter("product_type_id", req.product_type_id.as_deref())?;

    let criteria = SearchCriteria {
        name: req.name,
        product_type_id: req.product_type_id,
        mode,
    };
    let matches = search_products(state.store.as_ref(), &criteria)?;

    metrics::record_search_operation(mode);
    let results: Vec<ProductResponse> = matches
        .iter()
        .map(|p| ProductResponse::from(p.as_ref()))
        .collect();
    Ok(Json(SearchResponse {
        count: results.len(),
        results,
    }))
}

/// `POST /api/product-type`
pub async fn create_product_type(
    State(state): State<AppState>,
    Json(req): Json<ProductTypeRequest>,
) -> Result<Json<ProductTypeResponse>, ApiError> {
    let description = req.description.trim().to_string();
    let product_type = match req.id {
        Some(id) => ProductType::with_id(id.trim().to_string(), description),
        None => ProductType::new(description),
    };

    let created = state.store.create_product_type(product_type)?;

    metrics::record_write_operation("create_product_type");
    tracing::info!(product_type_id = %created.id, "Product type created");
    Ok(Json(ProductTypeResponse::from(created)))
}

/// `GET /api/product-type`
pub async fn list_product_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductTypeResponse>>, ApiError> {
    let types = state.store.list_product_types()?;
    Ok(Json(types.into_iter().map(ProductTypeResponse::from).collect()))
}

/// `GET /api/product-type/:id`
pub async fn get_product_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductTypeResponse>, ApiError> {
    let product_type = state
        .store
        .get_product_type(&id)?
        .ok_or_else(|| ApiError::NotFound(format!("Product type '{}' not found", id)))?;
    Ok(Json(ProductTypeResponse::from(product_type)))
}
