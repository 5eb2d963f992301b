//! Search execution over a [`ProductStore`] enumeration.

use crate::error::SearchError;
use crate::product::Product;
use crate::search::filter::{compose, CombineMode, FilterClause, Predicate};
use crate::store::ProductStore;
use std::borrow::Borrow;
use std::sync::Arc;

/// Driving values and combine mode for one product search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Case-insensitive substring of the product name.
    pub name: Option<String>,
    /// Case-insensitive substring of the product type id.
    pub product_type_id: Option<String>,
    pub mode: CombineMode,
}

fn product_name(product: &Product) -> &str {
    &product.name
}

fn product_type_id(product: &Product) -> &str {
    &product.product_type.id
}

/// Builds the predicate for `criteria`: products with a non-blank id, filtered
/// by the name clause then the product type clause.
pub fn product_predicate(criteria: &SearchCriteria) -> Predicate<Product> {
    let base: Predicate<Product> = Box::new(|product: &Product| !product.id.trim().is_empty());
    compose(
        base,
        vec![
            FilterClause::new(product_name, criteria.name.as_deref()),
            FilterClause::new(product_type_id, criteria.product_type_id.as_deref()),
        ],
        criteria.mode,
    )
}

/// Keeps the items of `source` accepted by `predicate`, in source order.
pub fn filter_matching<T, E>(predicate: &Predicate<T>, source: Vec<E>) -> Vec<E>
where
    E: Borrow<T>,
{
    source
        .into_iter()
        .filter(|item| predicate(Borrow::<T>::borrow(item)))
        .collect()
}

/// Runs a product search against `store`.
///
/// The store is enumerated exactly once. An enumeration failure is returned as
/// [`SearchError::StoreRead`] with no retry and no partial result.
pub fn search_products(
    store: &dyn ProductStore,
    criteria: &SearchCriteria,
) -> Result<Vec<Arc<Product>>, SearchError> {
    let predicate = product_predicate(criteria);
    let products = store.enumerate_all().map_err(SearchError::StoreRead)?;
    let scanned = products.len();
    let matches = filter_matching(&predicate, products);
    tracing::debug!(
        mode = %criteria.mode,
        scanned,
        matched = matches.len(),
        "Product search executed"
    );
    Ok(matches)
}
