use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_server::config::ServerConfig;
use metro_server::dataset::Dataset;
use metro_server::stations::StationNames;
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Fail fast if the network can't be loaded
    let dataset = match Dataset::load(&config.data_dir) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!(data_dir = %config.data_dir.display(), "failed to load dataset: {e}");
            return ExitCode::FAILURE;
        }
    };

    let network = dataset.to_network();
    info!(
        stations = network.graph.len(),
        edges = network.graph.edge_count(),
        transfers = network.transfers.len(),
        "network ready"
    );

    let state = AppState::new(
        network,
        StationNames::from_records(&dataset.stations),
        config.search_config(),
    );
    let app = create_router(state, &Dataset::stations_path(&config.data_dir));

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Metro route planner listening on http://{}", config.bind_addr);
    info!("  GET /                   - Route form");
    info!("  GET /health             - Health check");
    info!("  GET /api/search_stations?query=...");
    info!("  GET /api/find_route?start=...&end=...&end_line=...");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
