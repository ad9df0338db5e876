//! HTTP surface of the generation service.
//!
//! A single POST route drives the orchestrator; CORS is permissive because
//! the endpoint is called straight from the browser-side workspace UI.

mod dto;

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderName, Method, StatusCode, header};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::app::{AppContext, GenerateRequest, generate_system_prompt};
use crate::domain::{AppConfig, AppError};

pub use dto::GenerateResponse;

/// Shared state: configuration only. Clients are wired per request, matching
/// the per-invocation behavior of the hosted function this service replaces.
#[derive(Clone)]
pub struct ServerState {
    config: Arc<AppConfig>,
}

/// Build the service router.
pub fn router(config: AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    Router::new()
        .route("/generate-system-prompt", post(generate))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ServerState { config: Arc::new(config) })
}

/// Bind and serve until shutdown.
pub async fn run(config: AppConfig, host: &str, port: u16) -> Result<(), AppError> {
    let app = router(config);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("copydrive listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn generate(
    State(state): State<ServerState>,
    Json(request): Json<GenerateRequest>,
) -> (StatusCode, Json<GenerateResponse>) {
    let config = state.config.clone();

    // The orchestrator and its clients are blocking (reqwest::blocking);
    // keep them off the async workers.
    let result = tokio::task::spawn_blocking(move || {
        let ctx = AppContext::from_config(&config)?;
        generate_system_prompt(&ctx, &request)
    })
    .await;

    match result {
        Ok(Ok(generated)) => (StatusCode::OK, Json(GenerateResponse::success(&generated))),
        Ok(Err(error)) => {
            tracing::error!(%error, "system prompt generation failed");
            (status_for(&error), Json(GenerateResponse::failure(&error)))
        }
        Err(join_error) => {
            tracing::error!(%join_error, "generation task aborted");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenerateResponse::failure_message("generation task aborted")),
            )
        }
    }
}

fn status_for(error: &AppError) -> StatusCode {
    if error.is_auth_shaped() { StatusCode::UNAUTHORIZED } else { StatusCode::INTERNAL_SERVER_ERROR }
}
