/// User Service Main Entry Point
///
/// Starts the HTTP and gRPC servers with:
/// - PostgreSQL connection pool
/// - Idempotent schema migration
/// - Graceful shutdown on Ctrl+C / SIGTERM
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use user_service::{
    config::Settings,
    db::PgUserRepository,
    grpc::start_grpc_server,
    http::{start_http_server, AppState},
    services::UserService,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "user_service=info,info".into()),
        )
        .with_target(false)
        .json()
        .init();

    info!("Starting User Service");

    // Load configuration
    let settings = Settings::load().context("Failed to load configuration")?;
    info!("Configuration loaded successfully");

    // Initialize database connection pool
    let db_pool = PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .acquire_timeout(Duration::from_secs(settings.database.acquire_timeout))
        .connect(&settings.database.url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    info!(
        "Database pool initialized with {} max connections",
        settings.database.max_connections
    );

    // Run database migrations (creates the users table if absent)
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .context("Failed to run database migrations")?;
    info!("Database migrations completed");

    // Wire up the service: repository -> service -> transports
    let repo = Arc::new(PgUserRepository::new(db_pool));
    let users = UserService::new(repo);

    let http_state = AppState {
        users: users.clone(),
    };
    let http_host = settings.server.host.clone();
    let http_port = settings.server.http_port;
    let http_handle =
        tokio::spawn(async move { start_http_server(http_state, &http_host, http_port).await });

    let grpc_host = settings.server.host.clone();
    let grpc_port = settings.server.grpc_port;
    let grpc_handle =
        tokio::spawn(async move { start_grpc_server(users, &grpc_host, grpc_port).await });

    let (http_result, grpc_result) = tokio::try_join!(http_handle, grpc_handle)
        .context("Server task panicked")?;
    http_result.context("HTTP server error")?;
    grpc_result.context("gRPC server error")?;

    info!("User service shutdown complete");

    Ok(())
}
