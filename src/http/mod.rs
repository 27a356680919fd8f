/// HTTP API for the user service
///
/// Routes:
/// - `POST /users`    create a user (201 + record)
/// - `GET /user/:id`  fetch a user (200 + record)
/// - `PATCH /user/:id` partial update (200 + updated record)
/// - `GET /health`    liveness probe
mod users;

pub use users::*;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::services::UserService;

/// Shared HTTP server state
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
}

/// Build the HTTP router with all user endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/users", post(users::create_user))
        .route("/user/:id", get(users::get_user))
        .route("/user/:id", patch(users::update_user))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Start the HTTP server
pub async fn start_http_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = build_router(state);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Starting HTTP API server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(crate::shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    Ok(())
}
