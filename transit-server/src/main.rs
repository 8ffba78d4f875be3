use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use transit_server::cache::{CacheConfig, CachedDirectionsClient};
use transit_server::directions::{DirectionsClient, DirectionsConfig};
use transit_server::intercity::{ScheduleConfig, balkan_catalog};
use transit_server::rewards::RewardsStore;
use transit_server::stops::korce_stops;
use transit_server::web::{AppState, create_router};

/// Default balance file location.
const DEFAULT_REWARDS_PATH: &str = "data/rewards.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Get the directions API key from the environment
    let api_key = std::env::var("GOOGLE_MAPS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: GOOGLE_MAPS_API_KEY not set. Route requests will fail.");
        String::new()
    });

    // Create the directions client
    let directions_config = DirectionsConfig::new(api_key);
    let directions_client =
        DirectionsClient::new(directions_config).expect("Failed to create directions client");

    // Create cached client
    let cache_config = CacheConfig::default();
    let cached_directions = CachedDirectionsClient::new(directions_client, &cache_config);

    // Static reference data
    let catalog = balkan_catalog();
    let stops = korce_stops();
    println!(
        "Loaded {} intercity destinations and {} local stops",
        catalog.len(),
        stops.len()
    );

    // Board configuration
    let schedule_config = ScheduleConfig::default();

    // Open the rewards store
    let rewards_path =
        std::env::var("TRANSIT_REWARDS_PATH").unwrap_or_else(|_| DEFAULT_REWARDS_PATH.to_string());
    let rewards = RewardsStore::load(rewards_path);

    // Build app state
    let state = AppState::new(cached_directions, catalog, stops, schedule_config, rewards);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr: SocketAddr = std::env::var("TRANSIT_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    println!("Transit server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health              - Health check");
    println!("  GET  /api/intercity/board - Intercity departure board");
    println!("  GET  /api/stops           - Local stop directory");
    println!("  POST /api/route/plan      - Plan a route");
    println!("  POST /api/route/compare   - Compare travel modes");
    println!("  GET  /api/rewards         - Points balance");
    println!("  POST /api/rewards/award   - Award points");
    println!("  POST /api/rewards/redeem  - Redeem points");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
