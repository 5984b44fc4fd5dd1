use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use static_assertions::{assert_eq_size, assert_impl_all};

use super::{BinaryComparer, hash_of};

/// A comparer that defers to the element type's natural `Ord`, `Eq` and `Hash`.
///
/// `DefaultComparer` carries no state, so every value of `DefaultComparer<T>`
/// is interchangeable with [`DefaultComparer::INSTANCE`]. Two collections of
/// the same element type that both use the default comparer therefore always
/// report the same comparer.
///
/// The marker is `Send + Sync + Copy` whatever `T` is.
///
/// # Examples
///
/// ```rust
/// use binary_collection::comparer::{BinaryComparer, DefaultComparer};
/// use std::cmp::Ordering;
///
/// let comparer = DefaultComparer::<i32>::INSTANCE;
/// assert_eq!(comparer.compare(&1, &2), Ordering::Less);
/// assert!(comparer.equals(&7, &7));
/// assert_eq!(comparer, DefaultComparer::new());
/// ```
pub struct DefaultComparer<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> DefaultComparer<T> {
    /// The process-wide default comparer for `T`.
    pub const INSTANCE: Self = Self(PhantomData);

    /// Returns the default comparer for `T`.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::INSTANCE
    }
}

impl<T: Ord + Hash + ?Sized> BinaryComparer<T> for DefaultComparer<T> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }

    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }

    #[inline]
    fn hash(&self, value: &T) -> u64 {
        hash_of(value)
    }
}

impl<T: ?Sized> Clone for DefaultComparer<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for DefaultComparer<T> {}

impl<T: ?Sized> Default for DefaultComparer<T> {
    #[inline]
    fn default() -> Self {
        Self::INSTANCE
    }
}

impl<T: ?Sized> PartialEq for DefaultComparer<T> {
    #[inline]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> Eq for DefaultComparer<T> {}

impl<T: ?Sized> fmt::Debug for DefaultComparer<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "DefaultComparer<{}>", std::any::type_name::<T>())
    }
}

assert_eq_size!(DefaultComparer<String>, ());
assert_impl_all!(DefaultComparer<std::rc::Rc<i32>>: Send, Sync, Copy, Default);
