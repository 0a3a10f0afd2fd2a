//! Flight schedule loading.
//!
//! Schedules are JSON arrays of flight records:
//!
//! ```json
//! [
//!   {"origin": "A", "destination": "B", "departure": 100, "arrival": 200, "fare": 50.0}
//! ]
//! ```

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::domain::{DomainError, Flight};
use crate::planner::RouteGraph;

/// Errors that can occur when loading a schedule.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Reading the schedule failed
    #[error("failed to read schedule {path}: {message}")]
    Io { path: String, message: String },

    /// Schedule is not a valid JSON flight list
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A flight failed validation in strict mode
    #[error(transparent)]
    InvalidFlight(#[from] DomainError),
}

/// Parse flights from a JSON string, without validating them.
///
/// # Examples
///
/// ```
/// use flight_planner::schedule::parse_flights;
///
/// let flights = parse_flights(
///     r#"[{"origin":"A","destination":"B","departure":100,"arrival":200,"fare":50.0}]"#,
/// )
/// .unwrap();
///
/// assert_eq!(flights.len(), 1);
/// assert_eq!(flights[0].destination().as_str(), "B");
/// ```
pub fn parse_flights(json: &str) -> Result<Vec<Flight>, ScheduleError> {
    Ok(serde_json::from_str(json)?)
}

/// Read flights from any reader, without validating them.
pub fn read_flights(reader: impl Read) -> Result<Vec<Flight>, ScheduleError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load flights from a schedule file, without validating them.
pub fn load_flights(path: impl AsRef<Path>) -> Result<Vec<Flight>, ScheduleError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| ScheduleError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let flights = parse_flights(&contents)?;
    debug!(path = %path.display(), flights = flights.len(), "Loaded schedule");
    Ok(flights)
}

/// Load a schedule file straight into a route graph.
///
/// With `strict` set, the first malformed flight aborts loading; otherwise
/// flights are indexed as-is.
pub fn load_graph(path: impl AsRef<Path>, strict: bool) -> Result<RouteGraph, ScheduleError> {
    let flights = load_flights(path)?;

    if strict {
        Ok(RouteGraph::validated(flights)?)
    } else {
        Ok(RouteGraph::new(flights))
    }
}
