//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Construction is the only place a product can be rejected; accessors and
/// rendering never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Price or name supplied at construction was unusable.
    #[error("invalid product data: {0}")]
    InvalidProductData(String),
}

impl CatalogError {
    pub fn invalid_product_data(msg: impl Into<String>) -> Self {
        Self::InvalidProductData(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_product_data_message_names_the_field() {
        let err = CatalogError::invalid_product_data("price must be finite");
        assert_eq!(err.to_string(), "invalid product data: price must be finite");
    }

    #[test]
    fn errors_compare_by_message() {
        assert_eq!(
            CatalogError::invalid_product_data("name cannot be empty"),
            CatalogError::InvalidProductData("name cannot be empty".to_string()),
        );
    }
}
