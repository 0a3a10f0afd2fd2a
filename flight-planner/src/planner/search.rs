//! Route search over the flight graph.
//!
//! All three queries run the same traversal: start at the origin with no
//! flights taken, repeatedly take a state off the frontier, record it if it
//! completes the query, then extend it by every admissible departure. The
//! queries differ only in the frontier order and in what counts as a better
//! completion (see [`Objective`]).

use tracing::{debug, trace, warn};

use crate::domain::{City, Fare, Flight, Itinerary};

use super::config::SearchConfig;
use super::dominance::DominanceIndex;
use super::frontier::Frontier;
use super::graph::{FlightId, RouteGraph};
use super::rank::{Objective, Score};
use super::trail::Trail;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// The arrival window is empty
    #[error("invalid time window: earliest arrival {earliest} is after latest arrival {latest}")]
    InvalidWindow { earliest: i64, latest: i64 },

    /// The expansion budget ran out before the search could conclude
    #[error("search gave up after expanding {expanded} states")]
    Exhausted {
        expanded: usize,
        /// Best completion seen before giving up. Not necessarily optimal.
        best_so_far: Option<Itinerary>,
    },
}

/// Request for a route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// City to leave from.
    pub start: City,

    /// City to reach.
    pub end: City,

    /// Earliest acceptable arrival. Also the earliest time any leg may
    /// depart, including the first.
    pub earliest_arrival: i64,

    /// Latest acceptable arrival.
    pub latest_arrival: i64,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(start: City, end: City, earliest_arrival: i64, latest_arrival: i64) -> Self {
        Self {
            start,
            end,
            earliest_arrival,
            latest_arrival,
        }
    }

    /// Validate the search request.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.earliest_arrival > self.latest_arrival {
            return Err(SearchError::InvalidWindow {
                earliest: self.earliest_arrival,
                latest: self.latest_arrival,
            });
        }

        Ok(())
    }

    /// Returns true if `time` lies inside the arrival window.
    pub fn window_contains(&self, time: i64) -> bool {
        (self.earliest_arrival..=self.latest_arrival).contains(&time)
    }

    /// Check if a state completes this request.
    fn completed_by(&self, state: &SearchState) -> bool {
        state.city == self.end && self.window_contains(state.arrival)
    }
}

/// Result of a route search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// The best itinerary, or `None` if no route satisfies the request.
    pub itinerary: Option<Itinerary>,

    /// Number of states whose departures were explored.
    pub states_expanded: usize,

    /// Number of states skipped because they could not lead anywhere better.
    pub states_pruned: usize,
}

/// A partial itinerary on the frontier.
#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    /// Current city.
    pub(crate) city: City,

    /// Flights taken so far.
    pub(crate) trail: Trail,

    /// Arrival time at this city; 0 before the first flight.
    pub(crate) arrival: i64,

    /// Sum of fares so far.
    pub(crate) fare: Fare,
}

impl SearchState {
    /// The state of a traveller who has not flown yet.
    pub(crate) fn initial(city: City) -> Self {
        Self {
            city,
            trail: Trail::empty(),
            arrival: 0,
            fare: Fare::ZERO,
        }
    }

    /// The state after also taking `flight`.
    fn extend(&self, id: FlightId, flight: &Flight) -> Self {
        Self {
            city: flight.destination().clone(),
            trail: self.trail.push(id),
            arrival: flight.arrival(),
            fare: self.fare + flight.fare(),
        }
    }

    pub(crate) fn score(&self) -> Score {
        Score {
            flights: self.trail.len(),
            fare: self.fare,
            arrival: self.arrival,
        }
    }
}

/// Route planner over a shared, read-only flight graph.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::{City, Fare, Flight};
/// use flight_planner::planner::{Planner, RouteGraph, SearchConfig};
///
/// let city = |s: &str| City::parse(s).unwrap();
/// let graph = RouteGraph::new(vec![
///     Flight::new(city("A"), city("B"), 100, 200, Fare::new(50.0)),
///     Flight::new(city("B"), city("C"), 230, 300, Fare::new(30.0)),
///     Flight::new(city("A"), city("C"), 100, 400, Fare::new(100.0)),
/// ]);
/// let config = SearchConfig::default();
/// let planner = Planner::new(&graph, &config);
///
/// let cheapest = planner.cheapest_route(&city("A"), &city("C"), 0, 500).unwrap().unwrap();
/// assert_eq!(cheapest.flight_count(), 2);
/// assert_eq!(cheapest.total_fare(), Fare::new(80.0));
///
/// let direct = planner
///     .least_flights_earliest_route(&city("A"), &city("C"), 0, 500)
///     .unwrap()
///     .unwrap();
/// assert_eq!(direct.flight_count(), 1);
/// ```
pub struct Planner<'a> {
    graph: &'a RouteGraph,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a RouteGraph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Fewest flights, breaking ties by earliest arrival.
    ///
    /// Returns `Ok(None)` if no itinerary arrives inside `[t1, t2]`.
    pub fn least_flights_earliest_route(
        &self,
        start: &City,
        end: &City,
        t1: i64,
        t2: i64,
    ) -> Result<Option<Itinerary>, SearchError> {
        self.route(start, end, t1, t2, Objective::LeastFlightsEarliest)
    }

    /// Lowest total fare.
    ///
    /// Returns `Ok(None)` if no itinerary arrives inside `[t1, t2]`.
    pub fn cheapest_route(
        &self,
        start: &City,
        end: &City,
        t1: i64,
        t2: i64,
    ) -> Result<Option<Itinerary>, SearchError> {
        self.route(start, end, t1, t2, Objective::Cheapest)
    }

    /// Fewest flights, breaking ties by lowest total fare.
    ///
    /// Returns `Ok(None)` if no itinerary arrives inside `[t1, t2]`.
    pub fn least_flights_cheapest_route(
        &self,
        start: &City,
        end: &City,
        t1: i64,
        t2: i64,
    ) -> Result<Option<Itinerary>, SearchError> {
        self.route(start, end, t1, t2, Objective::LeastFlightsCheapest)
    }

    fn route(
        &self,
        start: &City,
        end: &City,
        t1: i64,
        t2: i64,
        objective: Objective,
    ) -> Result<Option<Itinerary>, SearchError> {
        let request = SearchRequest::new(start.clone(), end.clone(), t1, t2);
        self.search(&request, objective)
            .map(|outcome| outcome.itinerary)
    }

    /// Search for the best itinerary under `objective`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the request's window is empty, or if more than
    /// `max_expansions` states would need expanding.
    pub fn search(
        &self,
        request: &SearchRequest,
        objective: Objective,
    ) -> Result<SearchOutcome, SearchError> {
        request.validate()?;

        // Arrival times only grow along a chronological schedule, so nothing
        // past the window can come back into it.
        let prune_past_window = self.config.prune_past_window && self.graph.is_chronological();
        let fares_valid = self.graph.has_valid_fares();

        let mut frontier = Frontier::for_objective(objective);
        let mut dominance = DominanceIndex::new();
        let mut best: Option<(Score, Trail)> = None;
        let mut states_expanded = 0;
        let mut states_pruned = 0;

        frontier.push(SearchState::initial(request.start.clone()));

        while let Some(state) = frontier.pop() {
            let score = state.score();

            if let Some((best_score, _)) = &best
                && objective.exhausted(&score, best_score, fares_valid)
            {
                break;
            }

            if request.completed_by(&state)
                && objective.improves(&score, best.as_ref().map(|(s, _)| s))
            {
                trace!(
                    flights = score.flights,
                    fare = %score.fare,
                    arrival = score.arrival,
                    "New best completion"
                );
                best = Some((score, state.trail.clone()));
            }

            if prune_past_window && state.arrival > request.latest_arrival {
                states_pruned += 1;
                continue;
            }

            if self.config.prune_dominated
                && !state.trail.is_empty()
                && dominance.dominated_or_record(&state.city, state.arrival, objective.cost(&score))
            {
                states_pruned += 1;
                continue;
            }

            if states_expanded >= self.config.max_expansions {
                warn!(
                    %objective,
                    start = %request.start,
                    end = %request.end,
                    expanded = states_expanded,
                    frontier = frontier.len(),
                    "Route search exhausted its expansion budget"
                );
                return Err(SearchError::Exhausted {
                    expanded: states_expanded,
                    best_so_far: best.map(|(_, trail)| self.itinerary(&trail)),
                });
            }
            states_expanded += 1;

            trace!(
                city = %state.city,
                flights = score.flights,
                arrival = state.arrival,
                "Expanding state"
            );

            for (id, flight) in self.graph.departures_from(&state.city) {
                if self.admissible(&state, flight, request) {
                    frontier.push(state.extend(id, flight));
                }
            }
        }

        debug!(
            %objective,
            start = %request.start,
            end = %request.end,
            states_expanded,
            states_pruned,
            labels = dominance.len(),
            found = best.is_some(),
            "Route search complete"
        );

        Ok(SearchOutcome {
            itinerary: best.map(|(_, trail)| self.itinerary(&trail)),
            states_expanded,
            states_pruned,
        })
    }

    /// Check whether `flight` can be the next leg after `state`.
    fn admissible(&self, state: &SearchState, flight: &Flight, request: &SearchRequest) -> bool {
        let departure = flight.departure();

        if departure < request.earliest_arrival || departure < state.arrival {
            return false;
        }

        // The first leg has no connection to make
        state.trail.is_empty()
            || departure >= state.arrival.saturating_add(self.config.min_connection_mins)
    }

    fn itinerary(&self, trail: &Trail) -> Itinerary {
        let legs = trail
            .to_vec()
            .into_iter()
            .map(|id| self.graph.flight(id).clone())
            .collect();
        Itinerary::from_chained(legs)
    }
}
