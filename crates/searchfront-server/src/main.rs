//! searchfront server
//!
//! HTTP front end for an embeddable enterprise search widget: serves the
//! widget page, mints short-lived signed tokens, and proxies free-text
//! queries to the hosted search backend.

mod config;
mod error;
mod server;

use std::sync::Arc;

use tracing::{error, info};

use searchfront_client::{DiscoveryClient, TokenIssuer};
use searchfront_common::ServiceAccountKey;

use crate::config::ServerConfig;
use crate::server::AppState;

/// Initializes structured logging with tracing.
///
/// Supports two output formats via the `SEARCHFRONT_LOG_FORMAT` environment
/// variable:
/// - `json`: machine-readable JSON logs
/// - `pretty`: human-readable formatted logs (default)
///
/// Log level is controlled via `RUST_LOG`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let format = std::env::var("SEARCHFRONT_LOG_FORMAT")
        .unwrap_or_else(|_| "pretty".to_string())
        .to_lowercase();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("searchfront_server=info,tower_http=info"));

    match format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().with_env_filter(filter).with_target(true).init();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting searchfront server");

    // Configuration and credentials load exactly once; failures here must
    // stop the process.
    let config = match ServerConfig::load() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!("Failed to load configuration: {e}");
            return Err(e.into());
        }
    };

    let key = match ServiceAccountKey::from_path(&config.credentials_path) {
        Ok(key) => key,
        Err(e) => {
            error!("Failed to load service-account credentials: {e:#}");
            return Err(e);
        }
    };

    info!("Loaded credentials for {}", key.client_email);

    // Parsing the signing key here means malformed key material fails at
    // boot, never on a request path.
    let issuer = match TokenIssuer::new(&key) {
        Ok(issuer) => Arc::new(issuer),
        Err(e) => {
            error!("Failed to validate signing key: {e}");
            return Err(e.into());
        }
    };

    let backend = Arc::new(DiscoveryClient::new(
        &config.project_id,
        &config.location,
        &config.data_store_id,
        Arc::clone(&issuer),
    )?);

    info!("Forwarding searches to {}", backend.serving_config());

    let state = AppState {
        config: Arc::clone(&config),
        issuer,
        backend,
    };

    let bind_addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Server running at http://{bind_addr}");

    axum::serve(listener, server::router(state)).await?;

    Ok(())
}
