//! Product capability: the read-only contract every catalog item satisfies.

use core::fmt;

/// Simple product catalog item.
///
/// Only `&self` methods are exposed, so a product cannot change once built.
/// The `Display` supertrait carries the human-readable rendering.
pub trait Product: fmt::Display + fmt::Debug + Send + Sync {
    /// Unit price.
    fn price(&self) -> f64;

    /// Display name.
    fn name(&self) -> &str;

    /// Human-readable rendering, identical to the `Display` output.
    fn render(&self) -> String {
        self.to_string()
    }
}
