//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::planner::Route;

/// Query for `/api/find_route`.
///
/// Fields are optional so a missing parameter can be reported as a
/// readable 400 rather than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct FindRouteRequest {
    /// Start station name
    pub start: Option<String>,

    /// Destination station name
    pub end: Option<String>,

    /// Line the route must arrive on
    pub end_line: Option<String>,
}

impl FindRouteRequest {
    /// Start and end station, if both are present and non-empty.
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        let start = self.start.as_deref().filter(|s| !s.is_empty())?;
        let end = self.end.as_deref().filter(|s| !s.is_empty())?;
        Some((start, end))
    }

    /// Required end line; an empty value means no requirement.
    pub fn end_line(&self) -> Option<&str> {
        self.end_line.as_deref().filter(|s| !s.is_empty())
    }
}

/// A found route.
#[derive(Debug, Serialize)]
pub struct FindRouteResponse {
    /// Station names from start to end
    pub path: Vec<String>,

    /// Itinerary lines for display
    pub details: Vec<String>,

    /// Total route cost
    pub distance: f64,

    /// Number of line changes
    pub transfers: usize,
}

impl FindRouteResponse {
    /// Create from a planner route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            path: route.stations.clone(),
            details: route.itinerary_text(),
            distance: route.total_cost,
            transfers: route.transfer_count,
        }
    }
}

/// Query for `/api/search_stations`.
#[derive(Debug, Default, Deserialize)]
pub struct StationSearchRequest {
    /// Part of a station name
    #[serde(default)]
    pub query: String,

    /// Maximum results (default 20, capped at 50)
    pub limit: Option<usize>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
