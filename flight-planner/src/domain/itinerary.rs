//! Itinerary types.
//!
//! An `Itinerary` is the answer to a route query: the flights to take, in
//! order, from the start city to the end city.

use serde::Serialize;

use super::{City, DomainError, Fare, Flight};

/// An ordered sequence of flights forming one journey.
///
/// # Invariants
///
/// - Consecutive legs connect (destination of one = origin of next)
///
/// The empty itinerary is allowed: it is the answer when the start city is
/// already the destination. Its arrival time is defined as 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    legs: Vec<Flight>,
}

impl Itinerary {
    /// Constructs an itinerary from legs, checking that they chain.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a leg's destination differs from the next leg's origin.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::{City, Fare, Flight, Itinerary};
    ///
    /// let a = City::parse("A").unwrap();
    /// let b = City::parse("B").unwrap();
    /// let c = City::parse("C").unwrap();
    ///
    /// let legs = vec![
    ///     Flight::new(a.clone(), b.clone(), 100, 200, Fare::new(50.0)),
    ///     Flight::new(b.clone(), c.clone(), 230, 300, Fare::new(30.0)),
    /// ];
    /// let itinerary = Itinerary::new(legs).unwrap();
    ///
    /// assert_eq!(itinerary.flight_count(), 2);
    /// assert_eq!(itinerary.total_fare(), Fare::new(80.0));
    /// assert_eq!(itinerary.arrival_time(), 300);
    /// assert_eq!(itinerary.origin(), Some(&a));
    /// assert_eq!(itinerary.destination(), Some(&c));
    /// ```
    pub fn new(legs: Vec<Flight>) -> Result<Self, DomainError> {
        for window in legs.windows(2) {
            let arrived = window[0].destination();
            let leaving = window[1].origin();
            if arrived != leaving {
                return Err(DomainError::LegsNotChained(arrived.clone(), leaving.clone()));
            }
        }

        Ok(Itinerary { legs })
    }

    /// The zero-flight itinerary.
    pub fn empty() -> Self {
        Itinerary { legs: Vec::new() }
    }

    /// Builds an itinerary from legs the planner has already chained.
    pub(crate) fn from_chained(legs: Vec<Flight>) -> Self {
        debug_assert!(
            legs.windows(2)
                .all(|w| w[0].destination() == w[1].origin())
        );
        Itinerary { legs }
    }

    /// Returns the flights in travel order.
    pub fn legs(&self) -> &[Flight] {
        &self.legs
    }

    /// Consumes the itinerary, returning its flights.
    pub fn into_legs(self) -> Vec<Flight> {
        self.legs
    }

    /// Returns the number of flights.
    pub fn flight_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns true if no flights are needed.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Returns the sum of all leg fares.
    pub fn total_fare(&self) -> Fare {
        self.legs.iter().map(Flight::fare).sum()
    }

    /// Returns the arrival time of the last leg, or 0 for the empty itinerary.
    pub fn arrival_time(&self) -> i64 {
        self.legs.last().map(Flight::arrival).unwrap_or(0)
    }

    /// Returns the departure time of the first leg.
    pub fn departure_time(&self) -> Option<i64> {
        self.legs.first().map(Flight::departure)
    }

    /// Returns the city the first leg leaves from.
    pub fn origin(&self) -> Option<&City> {
        self.legs.first().map(Flight::origin)
    }

    /// Returns the city the last leg lands at.
    pub fn destination(&self) -> Option<&City> {
        self.legs.last().map(Flight::destination)
    }

    /// Returns the layover, in minutes, at each change of plane. Saturates at
    /// the `i64` bounds.
    pub fn layovers(&self) -> impl Iterator<Item = i64> + '_ {
        self.legs
            .windows(2)
            .map(|w| w[1].departure().saturating_sub(w[0].arrival()))
    }

    /// Returns the shortest layover, or `None` for fewer than two legs.
    pub fn shortest_layover(&self) -> Option<i64> {
        self.layovers().min()
    }
}
