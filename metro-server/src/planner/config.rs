//! Search configuration for the route planner.

/// Multiplier applied to the distance of an edge that changes line.
pub const TRANSFER_COST_FACTOR: f64 = 2.0;

/// Fixed cost (km) added to every line change.
pub const TRANSFER_PENALTY_KM: f64 = 0.5;

/// Configuration parameters for route search.
///
/// The distance heuristic stays admissible only while every edge costs at
/// least its physical distance, i.e. `transfer_cost_factor >= 1` and
/// `transfer_penalty_km >= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Multiplier on the distance of a line-changing edge.
    pub transfer_cost_factor: f64,

    /// Flat penalty (km) added to a line-changing edge.
    pub transfer_penalty_km: f64,

    /// Maximum number of states to expand before giving up.
    /// `None` searches until the frontier is exhausted.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        transfer_cost_factor: f64,
        transfer_penalty_km: f64,
        max_expansions: Option<usize>,
    ) -> Self {
        Self {
            transfer_cost_factor,
            transfer_penalty_km,
            max_expansions,
        }
    }

    /// Cost of travelling `distance_km` along one edge.
    pub fn edge_cost(&self, distance_km: f64, changes_line: bool) -> f64 {
        if changes_line {
            distance_km * self.transfer_cost_factor + self.transfer_penalty_km
        } else {
            distance_km
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            transfer_cost_factor: TRANSFER_COST_FACTOR,
            transfer_penalty_km: TRANSFER_PENALTY_KM,
            max_expansions: None,
        }
    }
}
