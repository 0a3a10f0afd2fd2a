//! City identifier type.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid city identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city identifier: {reason}")]
pub struct InvalidCity {
    reason: &'static str,
}

/// An opaque city identifier.
///
/// The planner never interprets a city beyond equality and hashing, so any
/// non-empty string works ("LHR", "London", "city-42"). The name is shared
/// behind an `Arc` so cloning a city into every search state is cheap.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::City;
///
/// let lhr = City::parse("LHR").unwrap();
/// assert_eq!(lhr.as_str(), "LHR");
///
/// // Empty identifiers are rejected
/// assert!(City::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct City(Arc<str>);

impl City {
    /// Parse a city identifier from a string.
    ///
    /// The input must contain at least one non-whitespace character.
    pub fn parse(s: &str) -> Result<Self, InvalidCity> {
        if s.trim().is_empty() {
            return Err(InvalidCity {
                reason: "must not be empty",
            });
        }

        Ok(City(Arc::from(s)))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for City {
    type Error = InvalidCity;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        City::parse(&s)
    }
}

impl From<City> for String {
    fn from(city: City) -> Self {
        city.0.to_string()
    }
}

impl fmt::Debug for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City({})", self.as_str())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Za-z][A-Za-z0-9 -]{0,15}") {
            let city = City::parse(&s).unwrap();
            prop_assert_eq!(city.as_str(), s.as_str());
        }

        /// Whitespace-only strings are always rejected
        #[test]
        fn whitespace_rejected(s in "[ \t\n]{0,8}") {
            prop_assert!(City::parse(&s).is_err());
        }
    }
}
