//! Binary search followed by a scan of the order-equal band.
//!
//! Locating matches for a query runs in three steps:
//!
//! 1. Binary search the sorted slice with `compare` for *any* order-equal
//!    position. If there is none, there are no matches.
//! 2. Walk left and right from that position while neighbours stay
//!    order-equal to the query. This yields the band `[first, last]`.
//! 3. Inside the band, keep the indices whose element `equals` the query.
//!
//! Step 1 is O(log n). Step 2 is O(band size), which is expected to be small
//! relative to the whole collection. Step 3 is lazy.

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::ops::Range;

use crate::comparer::BinaryComparer;

/// Returns the band of elements order-equal to `query`.
///
/// When nothing is order-equal the range is empty and starts at the position
/// where `query` would be inserted.
pub(crate) fn locate_band<T, C>(items: &[T], comparer: &C, query: &T) -> Range<usize>
where
    C: BinaryComparer<T> + ?Sized,
{
    let hit = match items.binary_search_by(|probe| comparer.compare(probe, query)) {
        Ok(hit) => hit,
        Err(insertion_point) => return insertion_point..insertion_point,
    };

    let mut first = hit;
    while first > 0 && comparer.compare(&items[first - 1], query) == Ordering::Equal {
        first -= 1;
    }

    let mut last = hit;
    while last + 1 < items.len() && comparer.compare(&items[last + 1], query) == Ordering::Equal {
        last += 1;
    }

    first..last + 1
}

/// An iterator over the indices of elements equal to a query.
///
/// This `struct` is created by
/// [`BinaryCollection::index_of_all`](crate::BinaryCollection::index_of_all).
/// Indices are yielded in ascending order. The query is borrowed separately
/// from the collection, so it may be a temporary.
pub struct MatchIndices<'a, 'q, T, C: ?Sized> {
    items: &'a [T],
    comparer: &'a C,
    query: &'q T,
    band: Range<usize>,
}

impl<'a, 'q, T, C: BinaryComparer<T> + ?Sized> MatchIndices<'a, 'q, T, C> {
    pub(crate) fn new(items: &'a [T], comparer: &'a C, query: &'q T) -> Self {
        Self {
            band: locate_band(items, comparer, query),
            items,
            comparer,
            query,
        }
    }

    /// Returns the part of the order-equal band not yet scanned.
    #[must_use]
    pub fn remaining_band(&self) -> Range<usize> {
        self.band.clone()
    }
}

impl<T, C: BinaryComparer<T> + ?Sized> Iterator for MatchIndices<'_, '_, T, C> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let (items, comparer, query) = (self.items, self.comparer, self.query);
        self.band
            .by_ref()
            .find(|&index| comparer.equals(&items[index], query))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.band.len()))
    }
}

impl<T, C: BinaryComparer<T> + ?Sized> DoubleEndedIterator for MatchIndices<'_, '_, T, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (items, comparer, query) = (self.items, self.comparer, self.query);
        self.band
            .by_ref()
            .rfind(|&index| comparer.equals(&items[index], query))
    }
}

impl<T, C: BinaryComparer<T> + ?Sized> FusedIterator for MatchIndices<'_, '_, T, C> {}

impl<T, C: ?Sized> Clone for MatchIndices<'_, '_, T, C> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            comparer: self.comparer,
            query: self.query,
            band: self.band.clone(),
        }
    }
}

/// An iterator over the elements equal to a query.
///
/// This `struct` is created by
/// [`BinaryCollection::find_all`](crate::BinaryCollection::find_all).
/// Elements are yielded in storage order.
pub struct Matches<'a, 'q, T, C: ?Sized> {
    indices: MatchIndices<'a, 'q, T, C>,
}

impl<'a, 'q, T, C: BinaryComparer<T> + ?Sized> Matches<'a, 'q, T, C> {
    pub(crate) fn new(items: &'a [T], comparer: &'a C, query: &'q T) -> Self {
        Self {
            indices: MatchIndices::new(items, comparer, query),
        }
    }
}

impl<'a, T, C: BinaryComparer<T> + ?Sized> Iterator for Matches<'a, '_, T, C> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let items = self.indices.items;
        self.indices.next().map(|index| &items[index])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<T, C: BinaryComparer<T> + ?Sized> DoubleEndedIterator for Matches<'_, '_, T, C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let items = self.indices.items;
        self.indices.next_back().map(|index| &items[index])
    }
}

impl<T, C: BinaryComparer<T> + ?Sized> FusedIterator for Matches<'_, '_, T, C> {}

impl<T, C: ?Sized> Clone for Matches<'_, '_, T, C> {
    fn clone(&self) -> Self {
        Self {
            indices: self.indices.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::{DefaultComparer, hash_of};
    use rstest::rstest;

    /// Orders by tens digit, equal on the full value.
    struct Tens;

    impl BinaryComparer<u32> for Tens {
        fn compare(&self, left: &u32, right: &u32) -> Ordering {
            (left / 10).cmp(&(right / 10))
        }

        fn equals(&self, left: &u32, right: &u32) -> bool {
            left == right
        }

        fn hash(&self, value: &u32) -> u64 {
            hash_of(value)
        }
    }

    #[rstest]
    #[case::empty(&[], 5, 0..0)]
    #[case::below_range(&[10, 20], 5, 0..0)]
    #[case::above_range(&[10, 20], 35, 2..2)]
    #[case::gap(&[10, 30], 25, 1..1)]
    #[case::single(&[10, 20, 30], 25, 1..2)]
    #[case::whole_slice(&[21, 22, 23], 20, 0..3)]
    #[case::middle_band(&[5, 11, 12, 13, 14, 40], 19, 1..5)]
    fn test_locate_band(#[case] items: &[u32], #[case] query: u32, #[case] expected: Range<usize>) {
        assert_eq!(locate_band(items, &Tens, &query), expected);
    }

    #[rstest]
    fn test_band_expands_from_any_hit() {
        let items: Vec<u32> = (0..64).map(|value| 100 + value % 10).collect();
        let mut sorted = items.clone();
        sorted.sort_by(|left, right| Tens.compare(left, right));
        assert_eq!(locate_band(&sorted, &Tens, &105), 0..64);
    }

    #[rstest]
    fn test_match_indices_filters_by_equality() {
        let items = [11, 12, 12, 13, 12, 20];
        let indices: Vec<usize> = MatchIndices::new(&items, &Tens, &12).collect();
        assert_eq!(indices, vec![1, 2, 4]);
    }

    #[rstest]
    fn test_match_indices_band_without_equal_element() {
        let items = [11, 13, 15];
        assert_eq!(MatchIndices::new(&items, &Tens, &12).next(), None);
    }

    #[rstest]
    fn test_match_indices_reverse() {
        let items = [11, 12, 12, 13];
        let indices: Vec<usize> = MatchIndices::new(&items, &Tens, &12).rev().collect();
        assert_eq!(indices, vec![2, 1]);
    }

    #[rstest]
    fn test_match_indices_is_restartable_by_clone() {
        let items = [1, 2, 2, 3];
        let comparer = DefaultComparer::<u32>::INSTANCE;
        let mut indices = MatchIndices::new(&items, &comparer, &2);
        let snapshot = indices.clone();

        assert_eq!(indices.next(), Some(1));
        assert_eq!(indices.remaining_band(), 2..3);
        assert_eq!(snapshot.collect::<Vec<_>>(), vec![1, 2]);
    }

    #[rstest]
    fn test_match_indices_is_fused() {
        let items = [12];
        let mut indices = MatchIndices::new(&items, &Tens, &12);
        assert_eq!(indices.next(), Some(0));
        assert_eq!(indices.next(), None);
        assert_eq!(indices.next(), None);
    }

    #[rstest]
    fn test_matches_outlive_temporary_query() {
        let items = [11, 12, 12, 19];
        let matches: Vec<&u32> = Matches::new(&items, &Tens, &u32::from(12_u8)).collect();
        assert_eq!(matches, vec![&12, &12]);
    }

    #[rstest]
    fn test_matches_yields_elements() {
        let items = [11, 12, 12, 19];
        let matches: Vec<&u32> = Matches::new(&items, &Tens, &12).collect();
        assert_eq!(matches, vec![&12, &12]);
        assert_eq!(
            Matches::new(&items, &Tens, &19).next_back(),
            Some(&19)
        );
    }
}
