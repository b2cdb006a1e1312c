//! Value object trait: equality by value, not identity.
//!
//! Identifiers in this crate carry no identity of their own; two codes with the
//! same digits are the same code.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one from new inputs (e.g. encode a different payload).
///
/// The trait requires:
/// - **Copy**: codes are plain integers and cheap to pass around
/// - **Eq + Hash**: codes can be compared and used as map keys
/// - **Debug**: codes show up readably in logs and test failures
///
/// ```
/// use ean13_core::{Ean13, ValueObject};
///
/// fn same<V: ValueObject>(a: V, b: V) -> bool {
///     a == b
/// }
///
/// let a = Ean13::encode(5, Ean13::PRIVATE).unwrap();
/// let b: Ean13 = "2000000000053".parse().unwrap();
/// assert!(same(a, b));
/// ```
pub trait ValueObject: Copy + Eq + core::hash::Hash + core::fmt::Debug {}
