//! # People Sample Application
//!
//! A sample person directory built on binary-collection.
//!
//! ## Overview
//!
//! People are kept in a [`BinaryCollection`](binary_collection::BinaryCollection)
//! ordered by a hash of their age and city. Searching for "age 25 in Chicago"
//! binary-searches for the hash, then keeps only the people whose age and city
//! really match.
//!
//! ## Module Structure
//!
//! - `address`: Postal address
//! - `person`: Person record with a memoized comparer hash
//! - `comparer`: `PersonCityAgeComparer`
//! - `query`: Parsing `AGE:CITY` search queries
//! - `report`: Text rendering of the directory and of search results

#![forbid(unsafe_code)]

pub mod address;
pub mod comparer;
pub mod person;
pub mod query;
pub mod report;

pub use address::Address;
pub use comparer::PersonCityAgeComparer;
pub use person::Person;
pub use query::{SearchQuery, ValidationError};

use binary_collection::BinaryCollection;

/// A person directory ordered by city and age.
pub type Directory = BinaryCollection<Person, PersonCityAgeComparer>;

/// Returns the people loaded into the sample directory.
#[must_use]
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new("John", "Smith", 25, Address::new("123 Main St", "New York", "NY", "10001")),
        Person::new("Jane", "Doe", 30, Address::new("456 Oak Ave", "Los Angeles", "CA", "90210")),
        Person::new("Bob", "Johnson", 25, Address::new("789 Pine St", "New York", "NY", "10002")),
        Person::new("Alice", "Williams", 28, Address::new("321 Elm St", "Chicago", "IL", "60601")),
        Person::new("Charlie", "Brown", 25, Address::new("654 Maple Dr", "Chicago", "IL", "60602")),
        Person::new("Diana", "Wilson", 30, Address::new("987 Cedar Ln", "New York", "NY", "10003")),
        Person::new("Eve", "Davis", 25, Address::new("147 Birch Way", "Los Angeles", "CA", "90211")),
        Person::new("Frank", "Miller", 32, Address::new("258 Spruce St", "Chicago", "IL", "60603")),
        Person::new("Grace", "Taylor", 25, Address::new("369 Willow Ave", "New York", "NY", "10004")),
    ]
}

/// Builds the sample directory with a single bulk insert.
#[must_use]
pub fn sample_directory() -> Directory {
    let mut directory = Directory::with_comparer(PersonCityAgeComparer);
    directory.insert_all(sample_people());
    directory
}
