/// User Service Library
///
/// Minimal user-management backend: create/read/update for a single `users`
/// table, exposed over HTTP (axum) and gRPC (tonic).
///
/// ## Modules
///
/// - `config`: Service configuration
/// - `db`: Database repository (users)
/// - `error`: Error types
/// - `grpc`: gRPC server implementation
/// - `http`: HTTP router and handlers
/// - `models`: Data models
/// - `services`: Business logic (validation, timestamp assignment)
/// - `validators`: Input validation
pub mod config;
pub mod db;
pub mod error;
pub mod grpc;
pub mod http;
pub mod models;
pub mod services;
pub mod validators;

// Re-export commonly used types
pub use error::{Result, UserError};
pub use services::UserService;

use tracing::info;

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }

    info!("Shutting down gracefully...");
}
