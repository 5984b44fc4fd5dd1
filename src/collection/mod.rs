//! An always-sorted collection searched by binary search.
//!
//! This module provides [`BinaryCollection`], a contiguous store that keeps its
//! elements sorted according to a [`BinaryComparer`] and answers lookups by
//! binary searching for the band of order-equal elements, then filtering that
//! band with the comparer's equality.
//!
//! # Overview
//!
//! Unlike a set, the collection keeps every inserted element:
//!
//! - true duplicates (`equals` holds) coexist until
//!   [`remove_duplicates`](BinaryCollection::remove_duplicates) is called;
//! - order-equal but unequal elements always coexist.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity                          |
//! |---------------------|-------------------------------------|
//! | `len`, `get`, `at`  | O(1)                                |
//! | `insert`            | O(log n) search + O(n) shift        |
//! | `insert_all`        | O((n + m) log(n + m))               |
//! | `find`, `index_of`  | O(log n + b)                        |
//! | `find_all`          | O(log n + b), lazily                |
//! | `remove`            | O(log n + b) search + O(n) shift    |
//! | `remove_at`         | O(n)                                |
//! | `remove_duplicates` | O(n)                                |
//!
//! where `b` is the size of the order-equal band around the query.
//!
//! # Examples
//!
//! ```rust
//! use binary_collection::BinaryCollection;
//!
//! let mut collection = BinaryCollection::new();
//! collection.insert(3);
//! collection.insert(1);
//! collection.insert(2);
//! collection.insert(2);
//!
//! assert_eq!(collection.as_slice(), &[1, 2, 2, 3]);
//! assert_eq!(collection.index_of_all(&2).collect::<Vec<_>>(), vec![1, 2]);
//!
//! assert_eq!(collection.remove_duplicates(), 1);
//! assert_eq!(collection.as_slice(), &[1, 2, 3]);
//! ```

mod band;
mod debug_view;
mod iter;

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::ops::{Index, Range};

use crate::comparer::{BinaryComparer, DefaultComparer};
use crate::error::CollectionError;

pub use band::{MatchIndices, Matches};
pub use debug_view::DebugView;
pub use iter::Iter;

/// A collection that keeps its elements sorted by a comparer and finds them by
/// binary search.
///
/// The comparer is fixed at construction. After every public operation the
/// elements are sorted non-decreasingly by
/// [`compare`](BinaryComparer::compare); lookups rely on this.
///
/// It is a logic error for an element to be modified in such a way that its
/// ordering relative to any other element, as determined by the comparer,
/// changes while it is in the collection. This is normally only possible
/// through `Cell`, `RefCell`, global state, I/O, or unsafe code. The behavior
/// resulting from such a logic error is not specified (lookups may miss
/// elements), but it will not result in undefined behavior.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `C` - The comparer. Defaults to [`DefaultComparer<T>`], which requires
///   `T: Ord + Hash`.
///
/// # Examples
///
/// ```rust
/// use binary_collection::BinaryCollection;
/// use binary_collection::comparer::{BinaryComparer, hash_of};
/// use std::cmp::Ordering;
///
/// /// Orders (age, city) by age only; equal when both fields match.
/// struct ByAge;
///
/// impl BinaryComparer<(u32, &'static str)> for ByAge {
///     fn compare(&self, left: &(u32, &'static str), right: &(u32, &'static str)) -> Ordering {
///         left.0.cmp(&right.0)
///     }
///
///     fn equals(&self, left: &(u32, &'static str), right: &(u32, &'static str)) -> bool {
///         left == right
///     }
///
///     fn hash(&self, value: &(u32, &'static str)) -> u64 {
///         hash_of(value)
///     }
/// }
///
/// let people = BinaryCollection::from_vec_with_comparer(
///     vec![(25, "NY"), (30, "LA"), (25, "Chicago")],
///     ByAge,
/// );
///
/// let found: Vec<_> = people.find_all(&(25, "Chicago")).collect();
/// assert_eq!(found, vec![&(25, "Chicago")]);
/// ```
#[derive(Clone)]
pub struct BinaryCollection<T, C = DefaultComparer<T>> {
    items: Vec<T>,
    comparer: C,
}

impl<T: Ord + Hash> BinaryCollection<T> {
    /// Creates an empty collection ordered by `T`'s natural ordering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_collection::BinaryCollection;
    ///
    /// let collection: BinaryCollection<i32> = BinaryCollection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparer(DefaultComparer::INSTANCE)
    }

    /// Creates an empty collection with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparer(capacity, DefaultComparer::INSTANCE)
    }
}

impl<T, C: BinaryComparer<T>> BinaryCollection<T, C> {
    /// Creates an empty collection that uses `comparer`.
    #[inline]
    #[must_use]
    pub const fn with_comparer(comparer: C) -> Self {
        Self {
            items: Vec::new(),
            comparer,
        }
    }

    /// Creates an empty collection with room for at least `capacity` elements
    /// that uses `comparer`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_comparer(capacity: usize, comparer: C) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            comparer,
        }
    }

    /// Creates a collection from `items`, sorting them with `comparer`.
    ///
    /// The sort is stable: order-equal elements keep their relative order.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    #[must_use]
    pub fn from_vec_with_comparer(mut items: Vec<T>, comparer: C) -> Self {
        items.sort_by(|left, right| comparer.compare(left, right));
        let collection = Self { items, comparer };
        collection.debug_assert_sorted();
        collection
    }

    /// Creates a collection from the elements of `iter`, sorting them with
    /// `comparer`.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    #[must_use]
    pub fn from_iter_with_comparer<I>(iter: I, comparer: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec_with_comparer(iter.into_iter().collect(), comparer)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns the index range of the elements order-equal to `query`.
    ///
    /// When no element is order-equal the range is empty and starts at the
    /// position where `query` would be inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_collection::BinaryCollection;
    ///
    /// let collection = BinaryCollection::from(vec![1, 3, 3, 3, 5]);
    /// assert_eq!(collection.band(&3), 1..4);
    /// assert_eq!(collection.band(&4), 4..4);
    /// ```
    #[must_use]
    pub fn band(&self, query: &T) -> Range<usize> {
        band::locate_band(&self.items, &self.comparer, query)
    }

    /// Returns an iterator over the indices of all elements equal to `query`,
    /// in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_collection::BinaryCollection;
    ///
    /// let collection = BinaryCollection::from(vec![1, 2, 2, 3]);
    /// assert_eq!(collection.index_of_all(&2).collect::<Vec<_>>(), vec![1, 2]);
    /// assert_eq!(collection.index_of_all(&4).next(), None);
    /// ```
    #[must_use]
    pub fn index_of_all<'q>(&self, query: &'q T) -> MatchIndices<'_, 'q, T, C> {
        MatchIndices::new(&self.items, &self.comparer, query)
    }

    /// Returns an iterator over all elements equal to `query`, in storage order.
    #[must_use]
    pub fn find_all<'q>(&self, query: &'q T) -> Matches<'_, 'q, T, C> {
        Matches::new(&self.items, &self.comparer, query)
    }

    /// Returns the first element equal to `query`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_collection::BinaryCollection;
    ///
    /// let collection = BinaryCollection::from(vec!["b", "a"]);
    /// assert_eq!(collection.find(&"a"), Some(&"a"));
    /// assert_eq!(collection.find(&"c"), None);
    /// ```
    #[must_use]
    pub fn find(&self, query: &T) -> Option<&T> {
        self.find_all(query).next()
    }

    /// Returns the index of the first element equal to `query`, or `None` if
    /// there is none.
    #[must_use]
    pub fn index_of(&self, query: &T) -> Option<usize> {
        self.index_of_all(query).next()
    }

    /// Returns `true` if some element is equal to `query`.
    #[must_use]
    pub fn contains(&self, query: &T) -> bool {
        self.index_of(query).is_some()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Inserts `element` at its sorted position and returns that position.
    ///
    /// The element goes after every element already order-equal to it, so
    /// repeated inserts of order-equal elements keep their arrival order.
    ///
    /// # Complexity
    ///
    /// O(log n) search + O(n) shift.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_collection::BinaryCollection;
    ///
    /// let mut collection = BinaryCollection::from(vec![1, 2, 4]);
    /// assert_eq!(collection.insert(3), 2);
    /// assert_eq!(collection.insert(2), 2);
    /// assert_eq!(collection.as_slice(), &[1, 2, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, element: T) -> usize {
        let comparer = &self.comparer;
        let position = self
            .items
            .partition_point(|probe| comparer.compare(probe, &element) != Ordering::Greater);
        self.items.insert(position, element);

        tracing::trace!(position, len = self.items.len(), "inserted element");
        self.debug_assert_sorted();
        position
    }

    /// Appends every element of `elements`, then re-sorts the whole collection.
    ///
    /// Meant for batch loads, where one sort beats repeated shifting. The sort
    /// is stable, so the result equals inserting the elements one by one.
    ///
    /// # Complexity
    ///
    /// O((n + m) log(n + m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_collection::BinaryCollection;
    ///
    /// let mut collection = BinaryCollection::from(vec![5]);
    /// collection.insert_all([3, 9, 1]);
    /// assert_eq!(collection.as_slice(), &[1, 3, 5, 9]);
    /// ```
    pub fn insert_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        let previous_len = self.items.len();
        self.items.extend(elements);

        let comparer = &self.comparer;
        self.items.sort_by(|left, right| comparer.compare(left, right));

        tracing::debug!(
            added = self.items.len() - previous_len,
            len = self.items.len(),
            "bulk inserted elements"
        );
        self.debug_assert_sorted();
    }

    /// Removes the first element equal to `query` and returns it, or returns
    /// `None` if no element is equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_collection::BinaryCollection;
    ///
    /// let mut collection = BinaryCollection::from(vec![1, 2, 2]);
    /// assert_eq!(collection.remove(&2), Some(2));
    /// assert_eq!(collection.remove(&7), None);
    /// assert_eq!(collection.as_slice(), &[1, 2]);
    /// ```
    pub fn remove(&mut self, query: &T) -> Option<T> {
        let index = self.index_of(query)?;
        let removed = self.items.remove(index);

        tracing::trace!(index, len = self.items.len(), "removed element");
        self.debug_assert_sorted();
        Some(removed)
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len`; the
    /// collection is left unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.items.len() {
            return Err(CollectionError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let removed = self.items.remove(index);
        tracing::trace!(index, len = self.items.len(), "removed element at index");
        self.debug_assert_sorted();
        Ok(removed)
    }

    /// Drops every element that is a true duplicate of its predecessor,
    /// keeping the first of each run, and returns how many were dropped.
    ///
    /// Two elements are true duplicates only if they are order-equal *and*
    /// equal; order-equal neighbours that are not equal are kept. Survivors
    /// keep their relative order.
    ///
    /// # Complexity
    ///
    /// O(n), in place.
    pub fn remove_duplicates(&mut self) -> usize {
        let previous_len = self.items.len();
        let comparer = &self.comparer;
        self.items
            .dedup_by(|current, kept| comparer.is_same(current, kept));

        let removed = previous_len - self.items.len();
        tracing::debug!(removed, len = self.items.len(), "removed duplicates");
        self.debug_assert_sorted();
        removed
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        tracing::debug!(len = self.items.len(), "cleared collection");
        self.items.clear();
    }

    #[inline]
    fn debug_assert_sorted(&self) {
        debug_assert!(
            is_sorted_by_comparer(&self.items, &self.comparer),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
    }
}

#[cfg(feature = "rayon")]
impl<T: Send, C: BinaryComparer<T> + Sync> BinaryCollection<T, C> {
    /// Same as [`insert_all`](Self::insert_all), but sorts in parallel.
    ///
    /// The parallel sort is stable, so the result is identical to
    /// `insert_all`.
    pub fn par_insert_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        use rayon::slice::ParallelSliceMut;

        let previous_len = self.items.len();
        self.items.extend(elements);

        let comparer = &self.comparer;
        self.items
            .par_sort_by(|left, right| comparer.compare(left, right));

        tracing::debug!(
            added = self.items.len() - previous_len,
            len = self.items.len(),
            "bulk inserted elements in parallel"
        );
        self.debug_assert_sorted();
    }
}

impl<T, C> BinaryCollection<T, C> {
    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_collection::{BinaryCollection, CollectionError};
    ///
    /// let collection = BinaryCollection::from(vec![20, 10]);
    /// assert_eq!(collection.at(0), Ok(&10));
    /// assert_eq!(
    ///     collection.at(2),
    ///     Err(CollectionError::IndexOutOfRange { index: 2, len: 2 })
    /// );
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, CollectionError> {
        self.items.get(index).ok_or(CollectionError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Returns the smallest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the largest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the elements as a sorted slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the elements in sorted order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.items)
    }

    /// Returns the comparer the collection was built with.
    #[inline]
    #[must_use]
    pub const fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Returns `true` if this collection uses a comparer equal to `comparer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_collection::BinaryCollection;
    /// use binary_collection::comparer::DefaultComparer;
    ///
    /// let collection: BinaryCollection<i32> = BinaryCollection::new();
    /// assert!(collection.is_comparer(&DefaultComparer::INSTANCE));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_comparer(&self, comparer: &C) -> bool
    where
        C: PartialEq,
    {
        self.comparer == *comparer
    }

    /// Returns `true` if both collections use equal comparers.
    #[inline]
    #[must_use]
    pub fn has_same_comparer(&self, other: &Self) -> bool
    where
        C: PartialEq,
    {
        self.is_comparer(&other.comparer)
    }

    /// Clones the elements into `destination`, starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InsufficientCapacity`] if `destination` is
    /// shorter than `offset + len`; nothing is written in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binary_collection::BinaryCollection;
    ///
    /// let collection = BinaryCollection::from(vec![2, 1]);
    /// let mut buffer = [0; 4];
    /// collection.copy_to(&mut buffer, 1).unwrap();
    /// assert_eq!(buffer, [0, 1, 2, 0]);
    ///
    /// assert!(collection.copy_to(&mut buffer, 3).is_err());
    /// ```
    pub fn copy_to(&self, destination: &mut [T], offset: usize) -> Result<(), CollectionError>
    where
        T: Clone,
    {
        let required = offset.saturating_add(self.items.len());
        if required > destination.len() {
            return Err(CollectionError::InsufficientCapacity {
                required,
                available: destination.len(),
            });
        }

        destination[offset..required].clone_from_slice(&self.items);
        Ok(())
    }

    /// Returns a `Vec` with clones of the elements, in sorted order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Consumes the collection and returns its elements in sorted order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Returns an inspection view of the collection.
    #[inline]
    #[must_use]
    pub const fn debug_view(&self) -> DebugView<'_, T, C> {
        DebugView::new(self)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: Ord + Hash> Default for BinaryCollection<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Index<usize> for BinaryCollection<T, C> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryCollection<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BinaryCollection")
            .field("count", &self.items.len())
            .field("items", &self.items)
            .finish()
    }
}

impl<T: PartialEq, C: PartialEq> PartialEq for BinaryCollection<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.comparer == other.comparer && self.items == other.items
    }
}

impl<T: Eq, C: Eq> Eq for BinaryCollection<T, C> {}

impl<T: Ord + Hash> FromIterator<T> for BinaryCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with_comparer(iter, DefaultComparer::INSTANCE)
    }
}

impl<T: Ord + Hash> From<Vec<T>> for BinaryCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec_with_comparer(items, DefaultComparer::INSTANCE)
    }
}

impl<T: Ord + Hash, const N: usize> From<[T; N]> for BinaryCollection<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_vec_with_comparer(Vec::from(items), DefaultComparer::INSTANCE)
    }
}

impl<T, C: BinaryComparer<T>> Extend<T> for BinaryCollection<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryCollection<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for BinaryCollection<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, C> serde::Serialize for BinaryCollection<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct BinaryCollectionVisitor<T, C> {
    marker: std::marker::PhantomData<fn() -> (T, C)>,
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::de::Visitor<'de> for BinaryCollectionVisitor<T, C>
where
    T: serde::Deserialize<'de>,
    C: BinaryComparer<T> + Default,
{
    type Value = BinaryCollection<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(element) = access.next_element()? {
            items.push(element);
        }
        // Input order is not trusted; the comparer may differ from the writer's.
        Ok(BinaryCollection::from_vec_with_comparer(items, C::default()))
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::Deserialize<'de> for BinaryCollection<T, C>
where
    T: serde::Deserialize<'de>,
    C: BinaryComparer<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(BinaryCollectionVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Invariant Checks
// =============================================================================

fn is_sorted_by_comparer<T, C: BinaryComparer<T>>(items: &[T], comparer: &C) -> bool {
    items.is_sorted_by(|left, right| comparer.compare(left, right) != Ordering::Greater)
}

/// Message for the panic raised in debug builds when the sort order is broken.
const SORTED_INVARIANT_PANIC_MESSAGE: &str = "BinaryCollection invariant violated: elements must be sorted non-decreasingly by the comparer";

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::hash_of;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Resident {
        age: u32,
        city: &'static str,
    }

    const fn resident(age: u32, city: &'static str) -> Resident {
        Resident { age, city }
    }

    /// Orders by age, equal on age and city.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    struct ByAge;

    impl BinaryComparer<Resident> for ByAge {
        fn compare(&self, left: &Resident, right: &Resident) -> Ordering {
            left.age.cmp(&right.age)
        }

        fn equals(&self, left: &Resident, right: &Resident) -> bool {
            left.age == right.age && left.city == right.city
        }

        fn hash(&self, value: &Resident) -> u64 {
            hash_of(&(value.age, value.city))
        }
    }

    fn residents() -> BinaryCollection<Resident, ByAge> {
        BinaryCollection::from_vec_with_comparer(
            vec![
                resident(25, "NY"),
                resident(30, "LA"),
                resident(25, "Chicago"),
            ],
            ByAge,
        )
    }

    #[rstest]
    fn test_new_is_empty() {
        let collection: BinaryCollection<i32> = BinaryCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert_eq!(collection.first(), None);
    }

    #[rstest]
    fn test_with_capacity_reserves() {
        let collection: BinaryCollection<i32> = BinaryCollection::with_capacity(16);
        assert!(collection.is_empty());
        assert!(collection.items.capacity() >= 16);
    }

    #[rstest]
    fn test_construction_sorts_stably() {
        let collection = residents();
        assert_eq!(
            collection.as_slice(),
            &[
                resident(25, "NY"),
                resident(25, "Chicago"),
                resident(30, "LA")
            ]
        );
    }

    #[rstest]
    fn test_find_all_filters_band_by_equality() {
        let collection = residents();
        let found: Vec<&Resident> = collection.find_all(&resident(25, "Chicago")).collect();
        assert_eq!(found, vec![&resident(25, "Chicago")]);
    }

    #[rstest]
    fn test_lookup_results_outlive_temporary_query() {
        let collection = residents();
        let found: Vec<&Resident> = collection.find_all(&resident(25, "NY")).collect();
        let first = collection.find(&resident(30, "LA"));

        assert_eq!(found, vec![&resident(25, "NY")]);
        assert_eq!(first, Some(&resident(30, "LA")));
    }

    #[rstest]
    fn test_remove_at_keeps_order() {
        let mut collection = residents();
        assert_eq!(collection.remove_at(1), Ok(resident(25, "Chicago")));
        assert_eq!(
            collection.as_slice(),
            &[resident(25, "NY"), resident(30, "LA")]
        );
    }

    #[rstest]
    fn test_index_of_band_without_equal_element_is_none() {
        let collection = residents();
        assert_eq!(collection.band(&resident(25, "Boston")), 0..2);
        assert_eq!(collection.index_of(&resident(25, "Boston")), None);
        assert!(!collection.contains(&resident(25, "Boston")));
    }

    #[rstest]
    fn test_insert_appends_after_tie_band() {
        let mut collection = residents();
        let position = collection.insert(resident(25, "Boston"));

        assert_eq!(position, 2);
        assert_eq!(collection[2], resident(25, "Boston"));
        assert_eq!(collection.len(), 4);
    }

    #[rstest]
    #[case::front(0, 0)]
    #[case::between(15, 2)]
    #[case::back(99, 4)]
    fn test_insert_returns_sorted_position(#[case] value: i32, #[case] expected: usize) {
        let mut collection = BinaryCollection::from(vec![10, 20, 5, 30]);
        assert_eq!(collection.insert(value), expected);
        assert!(collection.as_slice().is_sorted());
    }

    #[rstest]
    fn test_insert_all_resorts() {
        let mut collection = BinaryCollection::from(vec![4, 8]);
        collection.insert_all(vec![6, 2, 10]);
        assert_eq!(collection.as_slice(), &[2, 4, 6, 8, 10]);
    }

    #[rstest]
    fn test_extend_uses_insert_all() {
        let mut collection = residents();
        collection.extend([resident(20, "Austin"), resident(25, "Denver")]);
        assert_eq!(collection.first(), Some(&resident(20, "Austin")));
        assert_eq!(collection.index_of(&resident(25, "Denver")), Some(3));
    }

    #[rstest]
    fn test_remove_first_match() {
        let mut collection = BinaryCollection::from_vec_with_comparer(
            vec![resident(25, "NY"), resident(25, "Chicago"), resident(25, "NY")],
            ByAge,
        );

        assert_eq!(collection.remove(&resident(25, "NY")), Some(resident(25, "NY")));
        assert_eq!(
            collection.as_slice(),
            &[resident(25, "Chicago"), resident(25, "NY")]
        );
    }

    #[rstest]
    fn test_remove_missing_leaves_collection() {
        let mut collection = residents();
        assert_eq!(collection.remove(&resident(40, "NY")), None);
        assert_eq!(collection.len(), 3);
    }

    #[rstest]
    fn test_remove_at_returns_element() {
        let mut collection = BinaryCollection::from(vec![3, 1, 2]);
        assert_eq!(collection.remove_at(1), Ok(2));
        assert_eq!(collection.as_slice(), &[1, 3]);
    }

    #[rstest]
    #[case::at_len(3)]
    #[case::far(usize::MAX)]
    fn test_remove_at_out_of_range(#[case] index: usize) {
        let mut collection = BinaryCollection::from(vec![3, 1, 2]);
        assert_eq!(
            collection.remove_at(index),
            Err(CollectionError::IndexOutOfRange { index, len: 3 })
        );
        assert_eq!(collection.as_slice(), &[1, 2, 3]);
    }

    #[rstest]
    fn test_remove_duplicates_keeps_order_equal_neighbours() {
        let mut collection = BinaryCollection::from_vec_with_comparer(
            vec![resident(25, "NY"), resident(25, "NY"), resident(25, "Chicago")],
            ByAge,
        );

        assert_eq!(collection.remove_duplicates(), 1);
        assert_eq!(
            collection.as_slice(),
            &[resident(25, "NY"), resident(25, "Chicago")]
        );
    }

    #[rstest]
    fn test_remove_duplicates_only_compares_with_last_kept() {
        // A duplicate separated from its twin by an unequal neighbour survives.
        let mut collection = BinaryCollection::from_vec_with_comparer(
            vec![resident(25, "NY"), resident(25, "Chicago"), resident(25, "NY")],
            ByAge,
        );
        assert_eq!(collection.remove_duplicates(), 0);
        assert_eq!(collection.len(), 3);
    }

    #[rstest]
    fn test_remove_duplicates_on_empty_is_noop() {
        let mut collection: BinaryCollection<i32> = BinaryCollection::new();
        assert_eq!(collection.remove_duplicates(), 0);
        assert!(collection.is_empty());
    }

    #[rstest]
    fn test_clear_empties() {
        let mut collection = residents();
        collection.clear();
        assert!(collection.is_empty());
        assert_eq!(collection.find(&resident(25, "NY")), None);
    }

    #[rstest]
    fn test_at_and_get() {
        let collection = residents();
        assert_eq!(collection.at(2), Ok(&resident(30, "LA")));
        assert_eq!(collection.get(3), None);
        assert_eq!(
            collection.at(3),
            Err(CollectionError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[rstest]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_out_of_range_panics() {
        let collection = residents();
        let _ = &collection[3];
    }

    #[rstest]
    fn test_copy_to_exact_buffer() {
        let collection = BinaryCollection::from(vec![3, 1, 2]);
        let mut buffer = [0; 3];
        assert_eq!(collection.copy_to(&mut buffer, 0), Ok(()));
        assert_eq!(buffer, [1, 2, 3]);
    }

    #[rstest]
    fn test_copy_to_small_buffer_writes_nothing() {
        let collection = BinaryCollection::from(vec![3, 1, 2]);
        let mut buffer = [0; 2];
        assert_eq!(
            collection.copy_to(&mut buffer, 0),
            Err(CollectionError::InsufficientCapacity {
                required: 3,
                available: 2
            })
        );
        assert_eq!(buffer, [0, 0]);
    }

    #[rstest]
    fn test_same_comparer() {
        let left = residents();
        let right: BinaryCollection<Resident, ByAge> = BinaryCollection::with_comparer(ByAge);
        assert!(left.is_comparer(&ByAge));
        assert!(left.has_same_comparer(&right));
    }

    #[rstest]
    fn test_iter_is_restartable() {
        let collection = BinaryCollection::from(vec![2, 1]);
        let first_pass: Vec<&i32> = collection.iter().collect();
        let second_pass: Vec<&i32> = collection.iter().collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(collection.iter().len(), 2);
        assert_eq!(collection.iter().rev().next(), Some(&2));
    }

    #[rstest]
    fn test_into_iter_owned() {
        let collection = BinaryCollection::from([3, 1, 2]);
        assert_eq!(collection.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_debug_shows_count_and_items() {
        let collection = BinaryCollection::from(vec![2, 1]);
        assert_eq!(
            format!("{collection:?}"),
            "BinaryCollection { count: 2, items: [1, 2] }"
        );
    }

    #[rstest]
    fn test_equality_considers_items() {
        let left = BinaryCollection::from(vec![1, 2]);
        let right: BinaryCollection<i32> = [2, 1].into_iter().collect();
        assert_eq!(left, right);
        assert_ne!(left, BinaryCollection::from(vec![1]));
    }

    #[rstest]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invariant violated")]
    fn test_broken_invariant_panics_in_debug() {
        let mut collection = BinaryCollection::from(vec![1, 2, 3]);
        collection.items.swap(0, 2);
        collection.insert(4);
    }

    #[rstest]
    #[cfg(feature = "rayon")]
    fn test_par_insert_all_matches_insert_all() {
        let mut sequential = residents();
        let mut parallel = residents();
        let extra = vec![
            resident(30, "Austin"),
            resident(25, "Denver"),
            resident(18, "Reno"),
        ];

        sequential.insert_all(extra.clone());
        parallel.par_insert_all(extra);
        assert_eq!(sequential, parallel);
    }
}
