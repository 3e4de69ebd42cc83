use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_server::config::ServerConfig;
use metro_server::network::load_network;
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("metro_server=info,tower_http=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // A broken dataset still serves pages, which report the load error.
    let network = load_network(&config.data_path);
    if let Err(e) = &network {
        error!("failed to load metro network: {e}");
    }

    let state = AppState::new(network, config.planner, config.map_path);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("could not bind {}: {e}", config.bind_addr);
            return ExitCode::FAILURE;
        }
    };

    info!("Metro Route Finder listening on http://{}", config.bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
