use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::nba::NbaClient;

mod averages;
mod config;
mod error;
mod models;
mod nba;
mod routes;
mod season;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("Invalid server configuration");

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting NBA live stats api...");
    tracing::debug!("{:?}", config);

    let client = NbaClient::new(&config.live_base_url, &config.stats_base_url)
        .expect("Failed to build NBA http client");

    tracing::info!(
        "Upstream live data at {}, stats at {}",
        config.live_base_url,
        config.stats_base_url
    );

    let addr = config.addr();
    let app = routes::router(client);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
