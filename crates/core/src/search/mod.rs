//! Search primitives: filter clauses, predicate composition, and execution.
//!
//! A search request names up to two optional filters and one [`CombineMode`].
//! [`product_predicate`] folds the present filters into a single [`Predicate`],
//! and [`search_products`] applies it to the store's enumeration.

/// Predicate composition: filter clauses, combine modes, and the fold.
pub mod filter;
/// Applying a composed predicate to a store enumeration.
pub mod executor;

pub use executor::{filter_matching, product_predicate, search_products, SearchCriteria};
pub use filter::{compose, CombineMode, FilterClause, Predicate};
