//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two catalog
/// entries with the same price and name are the same entry. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Shelf {
///     aisle: u32,
///     label: String,
/// }
///
/// impl ValueObject for Shelf {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
