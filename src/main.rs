use catalog_seeder::{Config, setup_database};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let config = Config::new_from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "catalog_seeder=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let report = setup_database(config.database_path()).await;

    match &report.seed {
        Some(seed) => match serde_json::to_string(seed) {
            Ok(json) => info!("Database setup finished: {}", json),
            Err(e) => warn!("Database setup finished, report unavailable: {}", e),
        },
        None => warn!("Database setup finished without seeding"),
    }
}
