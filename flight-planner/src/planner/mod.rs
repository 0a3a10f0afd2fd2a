//! Route planner over a flight graph.
//!
//! This module answers: "which flights get me from this city to that one,
//! landing inside my arrival window?" under three notions of best route:
//! fewest flights then earliest arrival, lowest fare, and fewest flights
//! then lowest fare.
//!
//! Every leg must depart no earlier than the window opens, and consecutive
//! legs need a minimum connection time (20 minutes by default).

mod config;
mod dominance;
mod frontier;
mod graph;
mod rank;
mod search;
mod trail;


pub use config::SearchConfig;
pub use graph::{FlightId, RouteGraph};
pub use rank::{CostKey, Objective, Score};
pub use search::{Planner, SearchError, SearchOutcome, SearchRequest};
