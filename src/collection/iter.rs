use std::iter::FusedIterator;

/// An iterator over the elements of a `BinaryCollection`, in storage order.
///
/// This `struct` is created by the [`iter`] method on
/// [`BinaryCollection`](crate::BinaryCollection). Calling [`iter`] again
/// starts a fresh pass.
///
/// [`iter`]: crate::BinaryCollection::iter
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self {
            inner: items.iter(),
        }
    }

    /// Returns the elements not yet yielded.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for Iter<'_, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_tuple("Iter").field(&self.as_slice()).finish()
    }
}
