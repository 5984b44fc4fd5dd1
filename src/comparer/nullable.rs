use std::cmp::Ordering;

use super::BinaryComparer;

/// Lifts a comparer over `T` to a comparer over `Option<T>`.
///
/// A missing element (`None`) sorts before every present element, is equal
/// only to another `None`, and hashes to `0`. Present elements are handed to
/// the wrapped comparer.
///
/// # Examples
///
/// ```rust
/// use binary_collection::BinaryCollection;
/// use binary_collection::comparer::{DefaultComparer, NullableComparer};
///
/// let comparer = NullableComparer::new(DefaultComparer::<i32>::INSTANCE);
/// let collection =
///     BinaryCollection::from_vec_with_comparer(vec![Some(3), None, Some(1)], comparer);
///
/// assert_eq!(collection.as_slice(), &[None, Some(1), Some(3)]);
/// assert_eq!(collection.index_of(&None), Some(0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullableComparer<C>(C);

impl<C> NullableComparer<C> {
    /// Wraps `comparer`.
    #[inline]
    #[must_use]
    pub const fn new(comparer: C) -> Self {
        Self(comparer)
    }

    /// Returns the wrapped comparer.
    #[inline]
    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.0
    }
}

impl<T, C: BinaryComparer<T>> BinaryComparer<Option<T>> for NullableComparer<C> {
    fn compare(&self, left: &Option<T>, right: &Option<T>) -> Ordering {
        match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(left), Some(right)) => self.0.compare(left, right),
        }
    }

    fn equals(&self, left: &Option<T>, right: &Option<T>) -> bool {
        match (left, right) {
            (None, None) => true,
            (Some(left), Some(right)) => self.0.equals(left, right),
            _ => false,
        }
    }

    fn hash(&self, value: &Option<T>) -> u64 {
        value.as_ref().map_or(0, |value| self.0.hash(value))
    }
}
