//! Simple factory for catalog products.
//!
//! The factory is the single place that knows which concrete variant backs a
//! [`Product`]. With one variant it is a pass-through; selection logic for new
//! variants belongs here.

use catalog_core::CatalogResult;

use crate::grocery::GroceryStoreProduct;
use crate::product::Product;

/// Stateless product factory.
pub struct ProductFactory;

impl ProductFactory {
    /// Build a product without exposing its concrete type.
    ///
    /// Stores the input as given; never fails.
    pub fn create_product(price: f64, name: impl Into<String>) -> Box<dyn Product> {
        let product = GroceryStoreProduct::new(price, name);
        tracing::debug!(name = %product.name(), price, "product created");
        Box::new(product)
    }

    /// Like [`ProductFactory::create_product`], but rejects a negative or
    /// non-finite price and a blank name with
    /// [`CatalogError::InvalidProductData`](catalog_core::CatalogError::InvalidProductData).
    pub fn try_create_product(
        price: f64,
        name: impl Into<String>,
    ) -> CatalogResult<Box<dyn Product>> {
        let product = GroceryStoreProduct::new(price, name);
        if let Err(err) = product.validate() {
            tracing::warn!(name = %product.name(), price, error = %err, "product rejected");
            return Err(err);
        }
        tracing::debug!(name = %product.name(), price, "product created");
        Ok(Box::new(product))
    }
}
