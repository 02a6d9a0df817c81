//! HTTP surface: routes, handlers, and shared state.
//!
//! Three public routes plus a liveness probe. Handlers share read-only state
//! constructed once at boot; concurrent requests need no coordination.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use searchfront_client::{SearchBackend, TokenIssuer};
use searchfront_common::SearchResponse;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Widget page template; the config id placeholder is substituted per
/// request.
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// Shared read-only state, constructed once at boot.
#[derive(Clone)]
pub struct AppState {
    /// Deployment configuration.
    pub config: Arc<ServerConfig>,
    /// Widget token issuer; key material validated at boot.
    pub issuer: Arc<TokenIssuer>,
    /// The hosted search backend.
    pub backend: Arc<dyn SearchBackend>,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/token", get(token))
        .route("/api_search", post(api_search))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ApiSearchRequest {
    #[serde(default)]
    query: Option<String>,
}

#[derive(Debug, Serialize)]
struct TokenBody {
    token: String,
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
}

/// `GET /` - the widget page, parameterized by the deployment's config id.
async fn home(State(state): State<AppState>) -> Html<String> {
    Html(INDEX_TEMPLATE.replace("{{widget_config_id}}", &state.config.widget_config_id))
}

/// `GET /token` - a fresh short-lived widget token.
///
/// The token itself is never logged.
async fn token(State(state): State<AppState>) -> Result<Json<TokenBody>, ServerError> {
    let token = state
        .issuer
        .issue()
        .map_err(|e| ServerError::Internal(format!("token signing failed: {e}")))?;

    Ok(Json(TokenBody { token }))
}

/// `POST /api_search` - forwards the query to the search backend.
///
/// A missing body, an unparseable body, and an empty query all map to the
/// same 400 response; the backend is never called in those cases.
async fn api_search(
    State(state): State<AppState>,
    body: Result<Json<ApiSearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ServerError> {
    let query = match body {
        Ok(Json(request)) => request.query.unwrap_or_default(),
        Err(_) => String::new(),
    };

    let query = query.trim();
    if query.is_empty() {
        return Err(ServerError::MissingQuery);
    }

    let response = state.backend.search(query).await?;

    tracing::info!(results = response.results.len(), "search completed");

    Ok(Json(response))
}

/// `GET /api/health` - liveness probe.
async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}
