use std::any::TypeId;
use std::cell::Cell;

/// An element that can compute its own hash through a given comparer.
///
/// The returned hash must agree with the comparer's equality: whenever the
/// comparer considers two elements equal, `hash_with` returns the same value
/// for both. Implementors usually forward to
/// [`BinaryComparer::hash`](super::BinaryComparer::hash) and cache the result
/// in a [`HashMemo`].
pub trait HashGenerator<C: ?Sized> {
    /// Returns a hash of `self` consistent with `comparer`.
    fn hash_with(&self, comparer: &C) -> u64;
}

/// Memoizes a hash together with the identity of the comparer that produced it.
///
/// The identity is the comparer's [`TypeId`]. Asking for a hash through a
/// comparer of a different type discards the cached value and recomputes it.
///
/// The memo lives inside the element and is not `Sync`; hashing the same
/// element from several threads needs external synchronization.
///
/// # Examples
///
/// ```rust
/// use binary_collection::comparer::HashMemo;
///
/// struct ByLength;
/// struct ByFirstByte;
///
/// let memo = HashMemo::new();
/// assert_eq!(memo.get_or_compute::<ByLength>(|| 5), 5);
/// // Same comparer type: served from the cache.
/// assert_eq!(memo.get_or_compute::<ByLength>(|| unreachable!()), 5);
/// // Different comparer type: recomputed.
/// assert_eq!(memo.get_or_compute::<ByFirstByte>(|| 7), 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HashMemo {
    slot: Cell<Option<(TypeId, u64)>>,
}

impl HashMemo {
    /// Creates an empty memo.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: Cell::new(None),
        }
    }

    /// Returns the cached hash for comparer type `C`, computing it with
    /// `compute` if the cache is empty or was filled by another comparer type.
    pub fn get_or_compute<C: ?Sized + 'static>(&self, compute: impl FnOnce() -> u64) -> u64 {
        let identity = TypeId::of::<C>();
        match self.slot.get() {
            Some((cached_identity, hash)) if cached_identity == identity => hash,
            _ => {
                let hash = compute();
                self.slot.set(Some((identity, hash)));
                hash
            }
        }
    }

    /// Returns the identity of the comparer type that filled the cache, if any.
    #[inline]
    #[must_use]
    pub fn cached_identity(&self) -> Option<TypeId> {
        self.slot.get().map(|(identity, _)| identity)
    }

    /// Drops the cached hash.
    #[inline]
    pub fn invalidate(&self) {
        self.slot.set(None);
    }
}
