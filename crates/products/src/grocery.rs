//! Grocery-store variant of [`Product`].

use core::fmt;

use catalog_core::{CatalogError, CatalogResult, ValueObject};

use crate::product::Product;

/// A product sold by a grocery store.
///
/// Only reachable through [`ProductFactory`](crate::ProductFactory).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GroceryStoreProduct {
    price: f64,
    name: String,
}

impl GroceryStoreProduct {
    /// Stores `price` and `name` verbatim (no validation).
    pub(crate) fn new(price: f64, name: impl Into<String>) -> Self {
        Self {
            price,
            name: name.into(),
        }
    }

    /// Check the hardened construction rules: finite, non-negative price and
    /// a non-blank name.
    pub(crate) fn validate(&self) -> CatalogResult<()> {
        if !self.price.is_finite() {
            return Err(CatalogError::invalid_product_data("price must be finite"));
        }
        if self.price < 0.0 {
            return Err(CatalogError::invalid_product_data(
                "price cannot be negative",
            ));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::invalid_product_data("name cannot be empty"));
        }
        Ok(())
    }
}

impl ValueObject for GroceryStoreProduct {}

impl Product for GroceryStoreProduct {
    fn price(&self) -> f64 {
        self.price
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for GroceryStoreProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Product: {}, Price: {}", self.name, format_price(self.price))
    }
}

/// Format a price to two decimals, rounding half-up on its shortest decimal
/// form (`1.005` renders `1.01`, not the `1.00` its binary value gives).
fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return price.to_string();
    }

    // `Display` for f64 is the shortest round-trip form and never uses an exponent.
    let shortest = price.to_string();
    let (negative, magnitude) = match shortest.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, shortest.as_str()),
    };
    let (whole, fraction) = magnitude.split_once('.').unwrap_or((magnitude, ""));

    // Digits of the value in cents, truncated.
    let mut cents: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(core::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if fraction.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
        let mut i = cents.len();
        loop {
            if i == 0 {
                cents.insert(0, 1);
                break;
            }
            i -= 1;
            if cents[i] == 9 {
                cents[i] = 0;
            } else {
                cents[i] += 1;
                break;
            }
        }
    }

    let split = cents.len() - 2;
    let mut out = String::with_capacity(cents.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(cents[..split].iter().map(|d| char::from(b'0' + d)));
    out.push('.');
    out.extend(cents[split..].iter().map(|d| char::from(b'0' + d)));
    out
}
