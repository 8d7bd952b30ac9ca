//! Postpilot Server
//!
//! HTTP proxy between the browser extension and the generation provider.
//! Hosts the content generation endpoints, the scheduling store, and the
//! extension message dispatcher.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod message;

use config::ServerConfig;
use handlers::{create_router, AppState};
use postpilot_content::{ContentEngine, EngineConfig};
use postpilot_domain::traits::TextGenerator;
use postpilot_llm::gemini::{GeminiProvider, API_KEY_ENV};
use postpilot_store::SqliteStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Storage initialization error
    #[error("Storage error: {0}")]
    Store(#[from] postpilot_store::PersistenceError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the shared application state from configuration
pub fn build_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    let api_key = match &config.gemini.api_key {
        Some(key) => key.clone(),
        None => std::env::var(API_KEY_ENV)
            .unwrap_or_else(|_| "default-key-for-development".to_string()),
    };

    let provider = GeminiProvider::new(api_key, config.gemini.model.clone())
        .with_retry_delay(Duration::from_millis(config.gemini.retry_delay_ms));
    let generator: Arc<dyn TextGenerator> = Arc::new(provider);

    let engine = Arc::new(ContentEngine::new(
        generator.clone(),
        EngineConfig::default(),
    ));
    let store = Arc::new(Mutex::new(SqliteStore::new(&config.database_path)?));

    Ok(AppState {
        engine,
        generator,
        store,
        storage: Arc::new(Mutex::new(HashMap::new())),
    })
}

/// Start the HTTP server
///
/// Loads configuration, initializes the provider, engine, and store, and
/// starts the axum server.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Postpilot server");
    info!("Bind address: {}", config.bind_addr());
    info!("Database path: {}", config.database_path);
    info!("Generation model: {}", config.gemini.model);

    let state = build_state(&config)?;
    let app = create_router(state);

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_state_from_test_config() {
        let config = ServerConfig::default_test_config();
        let state = build_state(&config).unwrap();
        assert!(state.storage.lock().unwrap().is_empty());
    }
}
