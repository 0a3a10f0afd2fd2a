//! Domain types for the flight planner.
//!
//! Flights are accepted as-is so that raw schedules can be searched without
//! preprocessing; validation is available but opt-in. Itineraries, by
//! contrast, always chain: every leg leaves from where the previous one
//! landed.

mod city;
mod error;
mod fare;
mod flight;
mod itinerary;

pub use city::{City, InvalidCity};
pub use error::DomainError;
pub use fare::Fare;
pub use flight::Flight;
pub use itinerary::Itinerary;
