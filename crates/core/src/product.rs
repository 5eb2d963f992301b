//! Core entity types for the product catalogue.
//!
//! A `Product` is a stored record with a unique string id, a name, pricing and
//! stock figures, and the `ProductType` (category) it belongs to.

use crate::config;
use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductType {
    /// Caller-chosen or generated identifier; matched by category search.
    pub id: String,
    pub description: String,
}

impl ProductType {
    /// Creates a product type with a random UUID id.
    pub fn new(description: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description,
        }
    }

    /// Creates a product type with a specific id.
    pub fn with_id(id: String, description: String) -> Self {
        Self { id, description }
    }

    /// Checks id and description lengths. Whitespace-only values count as empty.
    pub fn validate(&self) -> Result<(), StoreError> {
        check_len("Product type id", &self.id, config::MAX_PRODUCT_TYPE_ID_LEN)?;
        check_len("Description", &self.description, config::MAX_DESCRIPTION_LEN)
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), StoreError> {
    if value.trim().is_empty() || value.chars().count() > max {
        return Err(StoreError::Invalid(format!(
            "{} must be 1-{} characters",
            field, max
        )));
    }
    Ok(())
}

/// A stored product.
///
/// The embedded `product_type` is a copy of the registered [`ProductType`] taken
/// when the product was created or last updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4 string).
    pub id: String,
    pub name: String,
    pub cost_price: f64,
    pub sale_price: f64,
    pub stock: u32,
    pub product_type: ProductType,
}

/// Field values for creating or replacing a product.
///
/// The store resolves `product_type_id` against its registered product types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub cost_price: f64,
    #[serde(default)]
    pub sale_price: f64,
    #[serde(default)]
    pub stock: u32,
    pub product_type_id: String,
}

impl NewProduct {
    /// Checks the name, prices, and product type reference.
    pub fn validate(&self) -> Result<(), StoreError> {
        check_len("Name", &self.name, config::MAX_NAME_LEN)?;
        for (field, value) in [("cost_price", self.cost_price), ("sale_price", self.sale_price)] {
            if !value.is_finite() || value < 0.0 {
                return Err(StoreError::Invalid(format!(
                    "{} must be a finite, non-negative number",
                    field
                )));
            }
        }
        if self.product_type_id.trim().is_empty() {
            return Err(StoreError::Invalid("product_type_id is required".into()));
        }
        Ok(())
    }
}

impl Product {
    /// Builds a product with a random UUID from its field values and resolved type.
    pub fn new(fields: NewProduct, product_type: ProductType) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), fields, product_type)
    }

    /// Builds a product with a specific id.
    pub fn with_id(id: String, fields: NewProduct, product_type: ProductType) -> Self {
        Self {
            id,
            name: fields.name,
            cost_price: fields.cost_price,
            sale_price: fields.sale_price,
            stock: fields.stock,
            product_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, cost: f64, sale: f64, type_id: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            cost_price: cost,
            sale_price: sale,
            stock: 0,
            product_type_id: type_id.to_string(),
        }
    }

    #[test]
    fn test_valid_product() {
        assert!(fields("Widget", 0.0, 9.5, "A").validate().is_ok());
    }

    #[test]
    fn test_invalid_products() {
        let long = "x".repeat(config::MAX_NAME_LEN + 1);
        for bad in [
            fields("", 1.0, 1.0, "A"),
            fields("   ", 1.0, 1.0, "A"),
            fields(&long, 1.0, 1.0, "A"),
            fields("Widget", -5.0, 1.0, "A"),
            fields("Widget", 1.0, f64::NAN, "A"),
            fields("Widget", f64::INFINITY, 1.0, "A"),
            fields("Widget", 1.0, 1.0, "  "),
        ] {
            assert!(
                matches!(bad.validate(), Err(StoreError::Invalid(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_product_type_validation() {
        assert!(ProductType::with_id("A".into(), "Tools".into())
            .validate()
            .is_ok());
        assert!(ProductType::new("Generated".into()).validate().is_ok());
        for (id, description) in [("   ", "Tools"), ("A", ""), ("A", " \t")] {
            let product_type = ProductType::with_id(id.into(), description.into());
            assert!(matches!(
                product_type.validate(),
                Err(StoreError::Invalid(_))
            ));
        }
        let long_id = "x".repeat(config::MAX_PRODUCT_TYPE_ID_LEN + 1);
        assert!(ProductType::with_id(long_id, "Tools".into())
            .validate()
            .is_err());
    }
}
