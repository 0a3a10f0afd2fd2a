//! Ranking rules for the three route objectives.
//!
//! Every objective answers the same questions about a search state: how
//! urgently to explore it, whether it beats the best completion so far,
//! and whether anything still on the frontier could beat that best.

use std::fmt;

use crate::domain::Fare;

/// What "best route" means for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Objective {
    /// Fewest flights; among those, earliest arrival.
    LeastFlightsEarliest,
    /// Lowest total fare.
    Cheapest,
    /// Fewest flights; among those, lowest total fare.
    LeastFlightsCheapest,
}

/// Summary of a partial itinerary used for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Number of flights taken.
    pub flights: usize,
    /// Sum of their fares.
    pub fare: Fare,
    /// Arrival time at the current city (0 before the first flight).
    pub arrival: i64,
}

/// Accumulated cost under an objective, compared lexicographically.
///
/// Lower is better. Adding the same flights to two states adds the same
/// amount to both components, so the order between them is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CostKey {
    flights: usize,
    fare: Fare,
}

impl Objective {
    /// Returns the cost of a state under this objective.
    ///
    /// Components the objective ignores are zeroed.
    pub fn cost(self, score: &Score) -> CostKey {
        match self {
            Objective::LeastFlightsEarliest => CostKey {
                flights: score.flights,
                fare: Fare::ZERO,
            },
            Objective::Cheapest => CostKey {
                flights: 0,
                fare: score.fare,
            },
            Objective::LeastFlightsCheapest => CostKey {
                flights: score.flights,
                fare: score.fare,
            },
        }
    }

    /// Returns true if `candidate` should replace `best` as the answer.
    ///
    /// Replacement requires a strict improvement, so among equally good
    /// completions the first one found is kept.
    pub fn improves(self, candidate: &Score, best: Option<&Score>) -> bool {
        let Some(best) = best else {
            return true;
        };

        match self {
            Objective::LeastFlightsEarliest => {
                candidate.flights < best.flights
                    || (candidate.flights == best.flights && candidate.arrival < best.arrival)
            }
            Objective::Cheapest => candidate.fare < best.fare,
            Objective::LeastFlightsCheapest => {
                candidate.flights < best.flights
                    || (candidate.flights == best.flights && candidate.fare < best.fare)
            }
        }
    }

    /// Returns true if no state explored from `next` onwards can improve on
    /// `best`.
    ///
    /// `next` must be the state about to be taken off the frontier, which
    /// holds states in non-decreasing cost order. For [`Objective::Cheapest`]
    /// this relies on fares never being negative, so `fares_valid` must
    /// reflect the whole graph.
    pub fn exhausted(self, next: &Score, best: &Score, fares_valid: bool) -> bool {
        match self {
            // Same flight count can still arrive earlier.
            Objective::LeastFlightsEarliest => next.flights > best.flights,
            Objective::Cheapest => fares_valid && next.fare >= best.fare,
            Objective::LeastFlightsCheapest => self.cost(next) >= self.cost(best),
        }
    }

    /// Returns true if the frontier is first-in first-out rather than a
    /// priority queue.
    pub fn explores_breadth_first(self) -> bool {
        matches!(self, Objective::LeastFlightsEarliest)
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Objective::LeastFlightsEarliest => "least flights, earliest arrival",
            Objective::Cheapest => "cheapest",
            Objective::LeastFlightsCheapest => "least flights, cheapest",
        };
        f.write_str(name)
    }
}
