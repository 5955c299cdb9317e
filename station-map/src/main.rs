use std::error::Error;

use station_map::config::AppConfig;
use station_map::map::MapConfig;
use station_map::stops::fetch_stations;
use station_map::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;

    if config.api_key.is_none() {
        error!("Google Maps API key is missing. Set GOOGLE_MAPS_API_KEY to show the map.");
    }

    // Fetch once; a failure leaves the map without station markers
    info!(source = %config.stops_source, "loading station data");
    let stations = fetch_stations(&config.stops_source, &config.stop_client).await;

    let state = AppState::new(config.api_key, MapConfig::melbourne(), stations);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Station map listening on http://{}", config.bind_addr);
    info!("  GET  /              - Map page");
    info!("  GET  /health        - Health check");
    info!("  GET  /api/map       - Map view and theme");
    info!("  GET  /api/stations  - Station markers");

    axum::serve(listener, app).await?;
    Ok(())
}
