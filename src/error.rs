//! Error types for collection operations.
//!
//! Absence of a queried element is never reported through these types;
//! lookups return `Option` or `bool` instead. Errors are only produced when a
//! caller violates a precondition such as an index bound, and they are always
//! raised before the collection is modified.

/// Represents errors that can occur when accessing or mutating a
/// [`BinaryCollection`](crate::BinaryCollection).
///
/// # Examples
///
/// ```rust
/// use binary_collection::{BinaryCollection, CollectionError};
///
/// let mut collection = BinaryCollection::from(vec![3, 1, 2]);
/// assert_eq!(
///     collection.remove_at(3),
///     Err(CollectionError::IndexOutOfRange { index: 3, len: 3 })
/// );
/// assert_eq!(collection.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// An index was outside `[0, len)`.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The number of elements in the collection at the time of the call.
        len: usize,
    },
    /// A destination buffer was too small to receive the collection's elements.
    InsufficientCapacity {
        /// The number of slots the copy needed, counted from the start of the buffer.
        required: usize,
        /// The length of the destination buffer.
        available: usize,
    },
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => write!(
                formatter,
                "index {index} is out of the collection's range (len {len})"
            ),
            Self::InsufficientCapacity {
                required,
                available,
            } => write!(
                formatter,
                "destination holds {available} elements but {required} are required"
            ),
        }
    }
}

impl std::error::Error for CollectionError {}
