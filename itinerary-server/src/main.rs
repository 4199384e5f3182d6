use itinerary_server::config::{DEFAULT_LOG_FILTER, ServerConfig};
use itinerary_server::logging::init_logging;
use itinerary_server::web::{AppState, create_router};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // No usable filter from the environment, so log with the default
            init_logging(DEFAULT_LOG_FILTER);
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    init_logging(&config.log_filter);

    let addr = config.addr;
    info!(max_segments = config.max_segments, "loaded configuration");

    // Build app state
    let state = AppState::new(config);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "itinerary server listening");
    info!("  GET  /health     - Health check");
    info!("  POST /calculate  - Resolve a flight path");

    axum::serve(listener, app).await?;
    Ok(())
}
