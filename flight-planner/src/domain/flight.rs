//! Flight record type.

use serde::{Deserialize, Serialize};

use super::{City, DomainError, Fare};

/// A single scheduled flight.
///
/// Times are integer minutes since an arbitrary epoch shared by the whole
/// schedule; the planner never interprets them as calendar times.
///
/// Construction performs no validation, so a graph can be built from raw
/// schedule data as-is. Call [`Flight::validate`] (or build the graph with
/// `RouteGraph::validated`) to reject malformed records up front.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::{City, Fare, Flight};
///
/// let flight = Flight::new(
///     City::parse("LHR").unwrap(),
///     City::parse("CDG").unwrap(),
///     600,
///     675,
///     Fare::new(89.0),
/// );
///
/// assert_eq!(flight.duration(), 75);
/// assert!(flight.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    origin: City,
    destination: City,
    departure: i64,
    arrival: i64,
    fare: Fare,
}

impl Flight {
    /// Creates a flight record.
    pub fn new(origin: City, destination: City, departure: i64, arrival: i64, fare: Fare) -> Self {
        Self {
            origin,
            destination,
            departure,
            arrival,
            fare,
        }
    }

    /// Returns the city this flight leaves from.
    pub fn origin(&self) -> &City {
        &self.origin
    }

    /// Returns the city this flight lands at.
    pub fn destination(&self) -> &City {
        &self.destination
    }

    /// Returns the departure time in minutes.
    pub fn departure(&self) -> i64 {
        self.departure
    }

    /// Returns the arrival time in minutes.
    pub fn arrival(&self) -> i64 {
        self.arrival
    }

    /// Returns the ticket price.
    pub fn fare(&self) -> Fare {
        self.fare
    }

    /// Returns the time in the air, in minutes.
    ///
    /// Negative or zero for malformed flights. Saturates at the `i64` bounds.
    pub fn duration(&self) -> i64 {
        self.arrival.saturating_sub(self.departure)
    }

    /// Checks that the flight is physically sensible.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The fare is NaN or infinite
    /// - The fare is negative
    /// - The flight does not arrive strictly after it departs
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.fare.amount().is_finite() {
            return Err(DomainError::NonFiniteFare {
                origin: self.origin.clone(),
                destination: self.destination.clone(),
            });
        }

        if self.fare.amount() < 0.0 {
            return Err(DomainError::NegativeFare {
                origin: self.origin.clone(),
                destination: self.destination.clone(),
                fare: self.fare,
            });
        }

        if self.arrival <= self.departure {
            return Err(DomainError::NonChronological {
                origin: self.origin.clone(),
                destination: self.destination.clone(),
                departure: self.departure,
                arrival: self.arrival,
            });
        }

        Ok(())
    }
}
