//! Persistent flight sequences for search states.
//!
//! Branches of a search share long prefixes. A `Trail` is a reference-counted
//! cons list, so extending it allocates one node and leaves every other
//! branch's view untouched.

use std::rc::Rc;

use super::graph::FlightId;

/// The flights taken so far by one search state, newest last.
#[derive(Debug, Clone, Default)]
pub(crate) struct Trail(Option<Rc<TrailNode>>);

#[derive(Debug)]
struct TrailNode {
    flight: FlightId,
    prev: Trail,
    len: usize,
}

impl Trail {
    /// The trail of a state that has not flown yet.
    pub(crate) fn empty() -> Self {
        Trail(None)
    }

    /// Returns a new trail with `flight` appended.
    pub(crate) fn push(&self, flight: FlightId) -> Self {
        Trail(Some(Rc::new(TrailNode {
            flight,
            prev: self.clone(),
            len: self.len() + 1,
        })))
    }

    pub(crate) fn len(&self) -> usize {
        self.0.as_ref().map_or(0, |node| node.len)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the flights in travel order.
    pub(crate) fn to_vec(&self) -> Vec<FlightId> {
        let mut flights = Vec::with_capacity(self.len());
        let mut cursor = self;
        while let Some(node) = &cursor.0 {
            flights.push(node.flight);
            cursor = &node.prev;
        }
        flights.reverse();
        flights
    }
}

impl Drop for Trail {
    // Unlink iteratively so long trails cannot overflow the stack.
    fn drop(&mut self) {
        while let Some(node) = self.0.take() {
            match Rc::try_unwrap(node) {
                Ok(mut node) => self.0 = node.prev.0.take(),
                // Another trail still holds the rest
                Err(_) => break,
            }
        }
    }
}
