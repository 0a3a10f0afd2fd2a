//! Domain error types.
//!
//! These errors represent validation failures in flight data and
//! itineraries. They are distinct from search and I/O errors.

use super::{City, Fare};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Fare below zero
    #[error("flight {origin} -> {destination} has negative fare {fare}")]
    NegativeFare {
        origin: City,
        destination: City,
        fare: Fare,
    },

    /// Fare is NaN or infinite
    #[error("flight {origin} -> {destination} has a non-finite fare")]
    NonFiniteFare { origin: City, destination: City },

    /// Flight does not arrive strictly after it departs
    #[error("flight {origin} -> {destination} departs at {departure} but arrives at {arrival}")]
    NonChronological {
        origin: City,
        destination: City,
        departure: i64,
        arrival: i64,
    },

    /// Consecutive legs don't share a city
    #[error("legs do not connect: arrived at {0} but next leg leaves from {1}")]
    LegsNotChained(City, City),

    /// A flight at a given input position failed validation
    #[error("flight #{index} is invalid: {source}")]
    InvalidFlight {
        index: usize,
        #[source]
        source: Box<DomainError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(s: &str) -> City {
        City::parse(s).unwrap()
    }

    #[test]
    fn error_display() {
        let err = DomainError::NegativeFare {
            origin: city("AMS"),
            destination: city("BER"),
            fare: Fare::new(-10.0),
        };
        assert_eq!(err.to_string(), "flight AMS -> BER has negative fare -10.00");

        let err = DomainError::NonFiniteFare {
            origin: city("AMS"),
            destination: city("BER"),
        };
        assert_eq!(err.to_string(), "flight AMS -> BER has a non-finite fare");

        let err = DomainError::NonChronological {
            origin: city("AMS"),
            destination: city("BER"),
            departure: 300,
            arrival: 250,
        };
        assert_eq!(
            err.to_string(),
            "flight AMS -> BER departs at 300 but arrives at 250"
        );

        let err = DomainError::LegsNotChained(city("BER"), city("CPH"));
        assert_eq!(
            err.to_string(),
            "legs do not connect: arrived at BER but next leg leaves from CPH"
        );
    }

    #[test]
    fn invalid_flight_wraps_source() {
        use std::error::Error;

        let inner = DomainError::NonFiniteFare {
            origin: city("AMS"),
            destination: city("BER"),
        };
        let err = DomainError::InvalidFlight {
            index: 3,
            source: Box::new(inner.clone()),
        };
        assert_eq!(
            err.to_string(),
            "flight #3 is invalid: flight AMS -> BER has a non-finite fare"
        );
        assert_eq!(err.source().map(|s| s.to_string()), Some(inner.to_string()));
    }
}
