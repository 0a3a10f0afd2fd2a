//! Flight itinerary planner.
//!
//! Given a list of scheduled flights, finds itineraries between two cities
//! that land inside an arrival window, optimising for fewest flights,
//! lowest fare, or fewest flights then lowest fare.

pub mod domain;
pub mod planner;
pub mod schedule;
