use std::fmt;

use super::BinaryCollection;

/// A read-only snapshot helper for inspecting a collection in tooling.
///
/// `Display` renders the summary line (`Count = 3`); `Debug` renders the
/// elements directly as a list, without the collection's own wrapper.
/// The view has no effect on the collection.
///
/// # Examples
///
/// ```rust
/// use binary_collection::BinaryCollection;
///
/// let collection = BinaryCollection::from(vec![3, 1, 2]);
/// let view = collection.debug_view();
///
/// assert_eq!(view.to_string(), "Count = 3");
/// assert_eq!(format!("{view:?}"), "[1, 2, 3]");
/// assert_eq!(&*view.items(), &[1, 2, 3]);
/// ```
pub struct DebugView<'a, T, C> {
    collection: &'a BinaryCollection<T, C>,
}

impl<'a, T, C> DebugView<'a, T, C> {
    #[inline]
    pub(crate) const fn new(collection: &'a BinaryCollection<T, C>) -> Self {
        Self { collection }
    }

    /// Returns the number of elements in the viewed collection.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.collection.len()
    }

    /// Materializes the current contents as a fixed-size array.
    #[must_use]
    pub fn items(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.collection.as_slice().into()
    }
}

impl<T, C> fmt::Display for DebugView<'_, T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Count = {}", self.count())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for DebugView<'_, T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.collection.iter())
            .finish()
    }
}
