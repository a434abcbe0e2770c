//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Item names are the main example in this workspace: two
/// `ItemName`s holding the same text refer to the same stock entry.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
