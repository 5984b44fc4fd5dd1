//! Person record.

use std::fmt;

use binary_collection::comparer::{BinaryComparer, HashGenerator, HashMemo};

use crate::address::Address;

/// A person with an address.
///
/// A person caches the hash a comparer computes for it. Fields are read-only
/// after construction, so the cache only goes stale when a comparer of a
/// different type asks, and then it is recomputed.
///
/// # Examples
///
/// ```
/// use people_sample::{Address, Person};
///
/// let person = Person::new("John", "Smith", 25, Address::new("123 Main St", "New York", "NY", "10001"));
/// assert_eq!(person.full_name(), "John Smith");
/// assert_eq!(person.to_string(), "John Smith, 25 years old - New York, NY");
/// ```
#[derive(Clone, Debug)]
pub struct Person {
    first_name: String,
    last_name: String,
    age: u32,
    address: Address,
    hash_memo: HashMemo,
}

impl Person {
    /// Creates a new `Person`.
    #[must_use]
    pub fn new(first_name: &str, last_name: &str, age: u32, address: Address) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
            address,
            hash_memo: HashMemo::new(),
        }
    }

    /// Creates a nameless person that only carries the fields used for lookup.
    #[must_use]
    pub fn search_criteria(age: u32, city: &str) -> Self {
        Self::new("", "", age, Address::in_city(city))
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns `"<first> <last>"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the age in years.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Returns the address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }
}

impl<C: BinaryComparer<Person> + 'static> HashGenerator<C> for Person {
    fn hash_with(&self, comparer: &C) -> u64 {
        self.hash_memo.get_or_compute::<C>(|| comparer.hash(self))
    }
}

impl fmt::Display for Person {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}, {} years old - {}, {}",
            self.full_name(),
            self.age,
            self.address.city(),
            self.address.state()
        )
    }
}
