//! Comparer ordering people by city and age.

use std::cmp::Ordering;

use binary_collection::comparer::{BinaryComparer, hash_of};

use crate::person::Person;

/// Orders people by a hash of their age and upper-cased city; treats two
/// people as equal when they have the same age and their cities match
/// ignoring ASCII case.
///
/// Ordering by hash groups each (age, city) pair into one band. Distinct pairs
/// that collide share a band and are told apart by equality.
///
/// # Examples
///
/// ```
/// use binary_collection::comparer::BinaryComparer;
/// use people_sample::{Person, PersonCityAgeComparer};
/// use std::cmp::Ordering;
///
/// let comparer = PersonCityAgeComparer;
/// let chicago = Person::search_criteria(25, "Chicago");
/// let shouting = Person::search_criteria(25, "CHICAGO");
///
/// assert_eq!(comparer.compare(&chicago, &shouting), Ordering::Equal);
/// assert!(comparer.equals(&chicago, &shouting));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PersonCityAgeComparer;

impl BinaryComparer<Person> for PersonCityAgeComparer {
    fn compare(&self, left: &Person, right: &Person) -> Ordering {
        self.hash(left).cmp(&self.hash(right))
    }

    fn equals(&self, left: &Person, right: &Person) -> bool {
        left.age() == right.age()
            && left
                .address()
                .city()
                .eq_ignore_ascii_case(right.address().city())
    }

    fn hash(&self, value: &Person) -> u64 {
        hash_of(&(value.age(), value.address().city().to_ascii_uppercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::same(25, "Chicago", 25, "Chicago", true)]
    #[case::case_insensitive(25, "new york", 25, "New York", true)]
    #[case::different_city(25, "Chicago", 25, "New York", false)]
    #[case::different_age(25, "Chicago", 28, "Chicago", false)]
    fn test_equals(
        #[case] left_age: u32,
        #[case] left_city: &str,
        #[case] right_age: u32,
        #[case] right_city: &str,
        #[case] expected: bool,
    ) {
        let left = Person::search_criteria(left_age, left_city);
        let right = Person::search_criteria(right_age, right_city);
        assert_eq!(PersonCityAgeComparer.equals(&left, &right), expected);
    }

    #[rstest]
    fn test_equal_people_are_order_equal() {
        let left = Person::search_criteria(30, "los angeles");
        let right = Person::search_criteria(30, "Los Angeles");
        assert_eq!(PersonCityAgeComparer.compare(&left, &right), Ordering::Equal);
        assert_eq!(
            PersonCityAgeComparer.hash(&left),
            PersonCityAgeComparer.hash(&right)
        );
    }

    #[rstest]
    fn test_names_do_not_affect_order() {
        let named = Person::new("Ann", "Lee", 25, crate::Address::in_city("Chicago"));
        let nameless = Person::search_criteria(25, "Chicago");
        assert!(PersonCityAgeComparer.is_same(&named, &nameless));
    }
}
