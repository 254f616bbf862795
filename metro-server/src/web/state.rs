//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::planner::SearchConfig;
use crate::stations::StationNames;

/// Shared application state.
///
/// Everything here is read-only after startup; each request runs its own
/// search over the shared network.
#[derive(Clone)]
pub struct AppState {
    /// Station graph and transfer rules
    pub network: Arc<Network>,

    /// Station name lookup for autocomplete
    pub station_names: Arc<StationNames>,

    /// Route planner configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, station_names: StationNames, config: SearchConfig) -> Self {
        Self {
            network: Arc::new(network),
            station_names: Arc::new(station_names),
            config: Arc::new(config),
        }
    }
}
