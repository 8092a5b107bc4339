//! services/api/src/bin/api.rs

use api_lib::{
    adapters::JsonFileMoodStore,
    config::Config,
    error::ApiError,
    web::{build_router, state::AppState},
};
use mood_tracker_core::ports::MoodStore;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Open the Mood Store ---
    let store = Arc::new(JsonFileMoodStore::new(config.moods_path.clone()));
    let existing = store.list().await?;
    info!(
        "Using mood file {} ({} entries on record)",
        store.path().display(),
        existing.len()
    );

    // --- 3. Build the Shared AppState & Router ---
    let app_state = Arc::new(AppState {
        store,
        config: config.clone(),
    });
    let app = build_router(app_state)?;

    // --- 4. Start the Server ---
    info!("Mood Tracker API running on http://{}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
