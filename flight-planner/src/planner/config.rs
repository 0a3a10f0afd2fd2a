//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum time between landing and the next departure (minutes).
    /// Connections tighter than this are rejected. Not applied to the
    /// first leg of an itinerary.
    pub min_connection_mins: i64,

    /// Maximum number of search states to expand before giving up.
    /// Cyclic schedules can otherwise keep a query running indefinitely.
    pub max_expansions: usize,

    /// Skip expanding a state when an already-expanded state at the same
    /// city arrived no later at no greater cost.
    pub prune_dominated: bool,

    /// Skip expanding states that arrive after the window closes. Only
    /// takes effect on schedules where every flight lands after it departs.
    pub prune_past_window: bool,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        min_connection_mins: i64,
        max_expansions: usize,
        prune_dominated: bool,
        prune_past_window: bool,
    ) -> Self {
        Self {
            min_connection_mins,
            max_expansions,
            prune_dominated,
            prune_past_window,
        }
    }

    /// Returns a copy with a different minimum connection time.
    pub fn with_min_connection(mut self, minutes: i64) -> Self {
        self.min_connection_mins = minutes;
        self
    }

    /// Returns a copy with a different expansion budget.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Returns a copy with all pruning disabled.
    ///
    /// The search then visits exactly the states an exhaustive traversal
    /// would, up to the expansion budget.
    pub fn exhaustive(mut self) -> Self {
        self.prune_dominated = false;
        self.prune_past_window = false;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_connection_mins: 20,
            max_expansions: 1_000_000,
            prune_dominated: true,
            prune_past_window: true,
        }
    }
}
