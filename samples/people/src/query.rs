//! Parsing of `AGE:CITY` search queries.

use std::str::FromStr;

use thiserror::Error;

use crate::person::Person;

/// Struct representing a validation error
///
/// Holds a field name and error message.
///
/// # Examples
///
/// ```
/// use people_sample::ValidationError;
///
/// let error = ValidationError::new("age", "Must be a whole number");
/// assert_eq!(error.to_string(), "age: Must be a whole number");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field_name}: {message}")]
pub struct ValidationError {
    /// Name of the field where the error occurred
    pub field_name: String,
    /// Error message
    pub message: String,
}

impl ValidationError {
    /// Creates a new `ValidationError`
    #[must_use]
    pub fn new(field_name: &str, message: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            message: message.to_string(),
        }
    }
}

/// A search for people of a given age living in a given city.
///
/// # Examples
///
/// ```
/// use people_sample::SearchQuery;
///
/// let query: SearchQuery = "25:New York".parse().unwrap();
/// assert_eq!(query.age(), 25);
/// assert_eq!(query.city(), "New York");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    age: u32,
    city: String,
}

impl SearchQuery {
    /// Creates a new `SearchQuery`.
    #[must_use]
    pub fn new(age: u32, city: &str) -> Self {
        Self {
            age,
            city: city.to_string(),
        }
    }

    /// Returns the age searched for.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Returns the city searched for.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the nameless person used as the lookup key.
    #[must_use]
    pub fn to_criteria(&self) -> Person {
        Person::search_criteria(self.age, &self.city)
    }
}

impl FromStr for SearchQuery {
    type Err = ValidationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (age, city) = input
            .split_once(':')
            .ok_or_else(|| ValidationError::new("query", "Must be in the form AGE:CITY"))?;

        let age = age
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::new("age", "Must be a whole number"))?;

        let city = city.trim();
        if city.is_empty() {
            return Err(ValidationError::new("city", "Must not be empty"));
        }

        Ok(Self::new(age, city))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("25:Chicago", 25, "Chicago")]
    #[case(" 30 : Los Angeles ", 30, "Los Angeles")]
    #[case("0:X", 0, "X")]
    fn test_parse_valid(#[case] input: &str, #[case] age: u32, #[case] city: &str) {
        assert_eq!(input.parse::<SearchQuery>(), Ok(SearchQuery::new(age, city)));
    }

    #[rstest]
    #[case::missing_separator("25 Chicago", "query")]
    #[case::negative_age("-1:Chicago", "age")]
    #[case::text_age("old:Chicago", "age")]
    #[case::empty_city("25:  ", "city")]
    fn test_parse_invalid(#[case] input: &str, #[case] field_name: &str) {
        let error = input.parse::<SearchQuery>().unwrap_err();
        assert_eq!(error.field_name, field_name);
    }

    #[rstest]
    fn test_to_criteria() {
        let criteria = SearchQuery::new(28, "Chicago").to_criteria();
        assert_eq!(criteria.age(), 28);
        assert_eq!(criteria.address().city(), "Chicago");
    }
}
