//! Products catalog module.
//!
//! Callers build products through [`ProductFactory`] and only ever see the
//! [`Product`] capability; the concrete grocery-store variant is private to
//! this crate.

pub mod factory;
mod grocery;
pub mod product;

pub use factory::ProductFactory;
pub use product::Product;
