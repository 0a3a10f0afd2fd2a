//! Dominance pruning for search states.
//!
//! A state is dominated if an already-expanded state stands at the same
//! city, arrived no later, and cost no more. Anything reachable from the
//! dominated state is reachable from the dominating one at least as
//! cheaply, so the dominated state need not be expanded.

use std::collections::HashMap;

use crate::domain::City;

use super::rank::CostKey;

#[derive(Debug, Clone, Copy)]
struct Label {
    arrival: i64,
    cost: CostKey,
}

impl Label {
    fn dominates(&self, other: &Label) -> bool {
        self.arrival <= other.arrival && self.cost <= other.cost
    }
}

/// Non-dominated labels of expanded states, per city.
#[derive(Debug, Default)]
pub(crate) struct DominanceIndex {
    labels: HashMap<City, Vec<Label>>,
}

impl DominanceIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns true if a recorded state dominates this one.
    ///
    /// Otherwise records this state, dropping any labels it dominates in
    /// turn, and returns false.
    pub(crate) fn dominated_or_record(&mut self, city: &City, arrival: i64, cost: CostKey) -> bool {
        let candidate = Label { arrival, cost };
        let labels = self.labels.entry(city.clone()).or_default();

        if labels.iter().any(|existing| existing.dominates(&candidate)) {
            return true;
        }

        labels.retain(|existing| !candidate.dominates(existing));
        labels.push(candidate);
        false
    }

    /// Returns the number of labels currently kept.
    pub(crate) fn len(&self) -> usize {
        self.labels.values().map(Vec::len).sum()
    }
}
