//! Value object trait: equality by value, not identity.
//!
//! Inventory records have no identifier of their own. Two records with the
//! same name and counters are interchangeable, which is what lets the engine
//! hand out copies instead of references.

/// Marker trait for value objects.
///
/// Requires:
/// - **Clone**: snapshots are produced by cloning
/// - **PartialEq**: comparison is by attribute values
/// - **Debug**: values show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Item { name: String, sell_in: i32, quality: i32 }
///
/// impl ValueObject for Item {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
