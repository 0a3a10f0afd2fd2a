//! Route graph: flights indexed by origin city.
//!
//! The graph is built once from a flight list and never mutated, so a
//! single `RouteGraph` can back any number of concurrent searches.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{City, DomainError, Flight};

/// Index of a flight in the graph's flight list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightId(pub usize);

/// Flights grouped by the city they depart from.
///
/// Flights sharing an origin keep their input order, so searches that
/// break ties by discovery order are reproducible.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    flights: Vec<Flight>,
    departures: HashMap<City, Vec<FlightId>>,
    /// Every flight lands strictly after it departs.
    chronological: bool,
    /// Every fare is finite and not negative.
    fares_valid: bool,
}

impl RouteGraph {
    /// Build the graph without validating any flight.
    ///
    /// Malformed flights are indexed like any other; searches over them
    /// stay well-defined but may return nonsensical itineraries.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::{City, Fare, Flight};
    /// use flight_planner::planner::RouteGraph;
    ///
    /// let a = City::parse("A").unwrap();
    /// let b = City::parse("B").unwrap();
    /// let graph = RouteGraph::new(vec![
    ///     Flight::new(a.clone(), b.clone(), 100, 200, Fare::new(50.0)),
    /// ]);
    ///
    /// assert_eq!(graph.departures_from(&a).count(), 1);
    /// assert_eq!(graph.departures_from(&b).count(), 0);
    /// ```
    pub fn new(flights: impl IntoIterator<Item = Flight>) -> Self {
        let flights: Vec<Flight> = flights.into_iter().collect();
        let mut departures: HashMap<City, Vec<FlightId>> = HashMap::new();
        let mut chronological = true;
        let mut fares_valid = true;

        for (idx, flight) in flights.iter().enumerate() {
            departures
                .entry(flight.origin().clone())
                .or_default()
                .push(FlightId(idx));
            chronological &= flight.arrival() > flight.departure();
            fares_valid &= flight.fare().is_valid();
        }

        debug!(
            flights = flights.len(),
            origins = departures.len(),
            chronological,
            fares_valid,
            "Route graph built"
        );

        Self {
            flights,
            departures,
            chronological,
            fares_valid,
        }
    }

    /// Build the graph, rejecting the first malformed flight.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidFlight`] carrying the input position of
    /// the first flight whose fare is negative or non-finite, or which does
    /// not land after it departs.
    pub fn validated(flights: impl IntoIterator<Item = Flight>) -> Result<Self, DomainError> {
        let flights: Vec<Flight> = flights.into_iter().collect();

        for (index, flight) in flights.iter().enumerate() {
            flight
                .validate()
                .map_err(|source| DomainError::InvalidFlight {
                    index,
                    source: Box::new(source),
                })?;
        }

        Ok(Self::new(flights))
    }

    /// Returns the flight with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this graph.
    pub fn flight(&self, id: FlightId) -> &Flight {
        &self.flights[id.0]
    }

    /// Returns all flights in input order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Returns the flights leaving `city`, in input order.
    ///
    /// Cities with no outbound flights yield nothing.
    pub fn departures_from<'a>(
        &'a self,
        city: &City,
    ) -> impl Iterator<Item = (FlightId, &'a Flight)> + use<'a> {
        self.departures
            .get(city)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&id| (id, &self.flights[id.0]))
    }

    /// Returns true if any flight leaves `city`.
    pub fn has_departures(&self, city: &City) -> bool {
        self.departures.contains_key(city)
    }

    /// Returns the number of flights.
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Returns true if the graph has no flights.
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Returns the number of cities with at least one departure.
    pub fn origin_count(&self) -> usize {
        self.departures.len()
    }

    /// Returns true if every flight lands strictly after it departs.
    ///
    /// On such a graph arrival times strictly increase along any itinerary.
    pub fn is_chronological(&self) -> bool {
        self.chronological
    }

    /// Returns true if every fare is finite and not negative.
    pub fn has_valid_fares(&self) -> bool {
        self.fares_valid
    }
}
