//! Yard API server - binary entry point

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use yard_api::api::http::create_router;
use yard_api::api::state::AppState;
use yard_api::config::Config;
use yard_api::yard::YardDb;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = Arc::new(YardDb::new());
    db.seed();
    let (patios, zonas, motos) = db.counts();
    tracing::info!(patios, zonas, motos, "yard store ready");

    let state = Arc::new(AppState::new(db, config.clone()));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "yard-api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
