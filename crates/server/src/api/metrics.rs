//! Prometheus metrics recording and background collection.

use metrics::{counter, gauge, histogram};
use std::time::Duration;
use stock_core::search::CombineMode;
use stock_core::store::ProductStore;

/// Records HTTP request metrics. `route` is the matched route template.
pub fn record_request(method: &str, route: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];
    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Records a write operation metric.
pub fn record_write_operation(operation: &str) {
    counter!(
        "stock_operations_total",
        "operation" => operation.to_string()
    )
    .increment(1);
}

/// Records a search operation metric, labelled by combine mode.
pub fn record_search_operation(mode: CombineMode) {
    counter!("stock_search_total", "mode" => mode.to_string()).increment(1);
}

/// Updates the product and product type gauges.
pub fn update_store_metrics(store: &dyn ProductStore) {
    match store.product_count() {
        Ok(count) => gauge!("stock_products_total").set(count as f64),
        Err(e) => tracing::warn!("Could not collect product metrics: {}", e),
    }
    if let Ok(count) = store.product_type_count() {
        gauge!("stock_product_types_total").set(count as f64);
    }
}
