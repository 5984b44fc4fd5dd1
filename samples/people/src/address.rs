//! Postal address.

use std::fmt;

/// A postal address. Only the city takes part in directory lookups.
///
/// # Examples
///
/// ```
/// use people_sample::Address;
///
/// let address = Address::new("123 Main St", "New York", "NY", "10001");
/// assert_eq!(address.city(), "New York");
/// assert_eq!(address.to_string(), "123 Main St, New York, NY 10001");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    street: String,
    city: String,
    state: String,
    zip_code: String,
}

impl Address {
    /// Creates a new `Address`.
    #[must_use]
    pub fn new(street: &str, city: &str, state: &str, zip_code: &str) -> Self {
        Self {
            street: street.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip_code: zip_code.to_string(),
        }
    }

    /// Creates an address that only carries a city, for use in search queries.
    #[must_use]
    pub fn in_city(city: &str) -> Self {
        Self::new("", city, "", "")
    }

    /// Returns the street.
    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Returns the city.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the state.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the zip code.
    #[must_use]
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }
}

impl fmt::Display for Address {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.zip_code
        )
    }
}
