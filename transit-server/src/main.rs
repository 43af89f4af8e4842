use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use transit_server::config::AppConfig;
use transit_server::domain::SystemClock;
use transit_server::planner::TravelFinder;
use transit_server::store::{JsonDataSource, NetworkStore};
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Read configuration from the environment (fail fast if incomplete)
    let config = AppConfig::from_env().expect("Failed to read configuration");

    // Load the dataset (fail fast if unreadable)
    let source = JsonDataSource::new(&config.routes_path, &config.stations_path);
    let store =
        Arc::new(NetworkStore::new(Box::new(source)).expect("Failed to load network data"));

    let snapshot = store.snapshot();
    println!(
        "Loaded {} routes and {} stations",
        snapshot.routes.len(),
        snapshot.stations.len()
    );

    // Spawn background task to reload the data files periodically, so
    // dataset edits are picked up without a restart
    if !config.reload_interval.is_zero() {
        let reload_store = store.clone();
        let period = config.reload_interval;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                match reload_store.refresh() {
                    Ok((routes, stations)) => {
                        println!("Reloaded network data: {routes} routes, {stations} stations")
                    }
                    Err(e) => eprintln!("Failed to reload network data: {e}"),
                }
            }
        });
    }

    // Build app state
    let finder = TravelFinder::new(store.clone(), Box::new(SystemClock));
    let state = AppState::new(store, finder);

    // Create router
    let app = create_router(state);

    // Bind and serve
    println!("Transit Trip Planner listening on http://{}", config.listen_addr);
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                 - Health check");
    println!("  GET  /route/find             - Find itineraries between two stations");
    println!("  GET  /route/all              - List all routes");
    println!("  GET  /route/by_name/:name    - Search routes by name");
    println!("  GET  /station/all            - List all stations");
    println!("  GET  /station/by_name/:name  - Search stations by name");

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
