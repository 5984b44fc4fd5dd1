//! Ordering-plus-equality comparers.
//!
//! A [`BinaryComparer`] pairs two relations over the same element type:
//!
//! - an **order** relation ([`compare`](BinaryComparer::compare)) that keeps a
//!   collection sorted and drives binary search, and
//! - an **equality** relation ([`equals`](BinaryComparer::equals)) that decides
//!   which of the order-equal elements are actually the same.
//!
//! The two relations may disagree. Two people can share an age bucket (and so
//! be *order-equal*) without being the same person. The only requirement is
//! that equality implies order-equality:
//!
//! ```text
//! equals(a, b)  ==>  compare(a, b) == Ordering::Equal
//! ```
//!
//! The converse need not hold. A comparer that violates this breaks lookups:
//! an equal element sitting outside the order-equal band is never found.
//!
//! # Provided Comparers
//!
//! - [`DefaultComparer`]: defers to `Ord`, `Eq` and `Hash`
//! - [`NullableComparer`]: lifts a comparer over `T` to `Option<T>`, with
//!   `None` sorting first
//!
//! # Examples
//!
//! ```rust
//! use binary_collection::comparer::{BinaryComparer, hash_of};
//! use std::cmp::Ordering;
//!
//! /// Orders words by length, treats them as equal ignoring ASCII case.
//! struct LengthThenCaseless;
//!
//! impl BinaryComparer<String> for LengthThenCaseless {
//!     fn compare(&self, left: &String, right: &String) -> Ordering {
//!         left.len().cmp(&right.len())
//!     }
//!
//!     fn equals(&self, left: &String, right: &String) -> bool {
//!         left.eq_ignore_ascii_case(right)
//!     }
//!
//!     fn hash(&self, value: &String) -> u64 {
//!         hash_of(&value.to_ascii_lowercase())
//!     }
//! }
//!
//! let comparer = LengthThenCaseless;
//! let (cat, dog) = ("cat".to_string(), "dog".to_string());
//! assert_eq!(comparer.compare(&cat, &dog), Ordering::Equal);
//! assert!(!comparer.equals(&cat, &dog));
//! assert!(comparer.is_same(&cat, &"CAT".to_string()));
//! ```

mod default;
mod hash_generator;
mod nullable;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

pub use default::DefaultComparer;
pub use hash_generator::{HashGenerator, HashMemo};
pub use nullable::NullableComparer;

/// A three-way comparison paired with an equality test and a hash.
///
/// # Contract
///
/// - `compare` is a total order over every element handed to it.
/// - `equals(a, b)` implies `compare(a, b) == Ordering::Equal`.
/// - `equals(a, b)` implies `hash(a) == hash(b)`.
///
/// None of these is enforced by the type system. Implementations must be pure:
/// the same arguments always give the same answer.
pub trait BinaryComparer<T: ?Sized> {
    /// Returns the order of `left` relative to `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Returns `true` if `left` and `right` are the same element.
    fn equals(&self, left: &T, right: &T) -> bool;

    /// Returns a hash of `value` consistent with [`equals`](Self::equals).
    fn hash(&self, value: &T) -> u64;

    /// Returns `true` only if `left` and `right` are both order-equal and equal.
    ///
    /// This is the notion of "true duplicate" used when compacting a
    /// collection: order-equal neighbours that are not equal survive.
    #[inline]
    fn is_same(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Equal && self.equals(left, right)
    }
}

impl<T: ?Sized, C: BinaryComparer<T> + ?Sized> BinaryComparer<T> for &C {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (**self).compare(left, right)
    }

    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        (**self).equals(left, right)
    }

    #[inline]
    fn hash(&self, value: &T) -> u64 {
        (**self).hash(value)
    }
}

/// Hashes `value` with the crate's default hasher.
///
/// This is `std`'s `DefaultHasher` with fixed keys, or `FxHasher` when the
/// `fxhash` feature is enabled. Either way the result is deterministic within
/// a build, which makes it suitable for comparers that order by hash.
///
/// # Examples
///
/// ```rust
/// use binary_collection::comparer::hash_of;
///
/// assert_eq!(hash_of(&(25, "CHICAGO")), hash_of(&(25, "CHICAGO")));
/// ```
#[must_use]
pub fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = new_hasher();
    value.hash(&mut hasher);
    hasher.finish()
}

#[cfg(not(feature = "fxhash"))]
#[inline]
fn new_hasher() -> std::hash::DefaultHasher {
    std::hash::DefaultHasher::new()
}

#[cfg(feature = "fxhash")]
#[inline]
fn new_hasher() -> rustc_hash::FxHasher {
    rustc_hash::FxHasher::default()
}
