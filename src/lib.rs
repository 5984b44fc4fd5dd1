//! # binary-collection
//!
//! An always-sorted collection that uses binary search both to place inserted
//! elements and to locate every element matching a query.
//!
//! ## Overview
//!
//! "Matching" is defined by a pluggable [`BinaryComparer`](comparer::BinaryComparer)
//! that pairs two relations:
//!
//! - an **order** relation that keeps the storage sorted and drives binary
//!   search;
//! - an **equality** relation that decides which order-equal elements are
//!   actually the same.
//!
//! A lookup binary-searches for the band of order-equal elements, then filters
//! that band by equality. The relations may disagree, so a band can hold
//! elements that tie on order but are different.
//!
//! - [`BinaryCollection`]: the sorted collection
//! - [`comparer`]: the comparer contract and ready-made comparers
//! - [`CollectionError`]: errors for out-of-range access
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`BinaryCollection`]
//! - `rayon`: parallel bulk insertion
//! - `fxhash`: use `FxHasher` for [`hash_of`](comparer::hash_of)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use binary_collection::prelude::*;
//!
//! let mut collection = BinaryCollection::from(vec![30, 10, 20]);
//! collection.insert(15);
//!
//! assert_eq!(collection.as_slice(), &[10, 15, 20, 30]);
//! assert_eq!(collection.index_of(&20), Some(2));
//! assert_eq!(collection.index_of(&25), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use binary_collection::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::BinaryCollection;
    pub use crate::comparer::{BinaryComparer, DefaultComparer, HashGenerator, NullableComparer};
    pub use crate::error::CollectionError;
}

pub mod collection;
pub mod comparer;
mod error;

pub use collection::BinaryCollection;
pub use error::CollectionError;
