/// gRPC transport for the user service
pub mod server;

pub use server::UserGrpcServer;

use tonic::transport::Server;
use tracing::info;

use crate::services::UserService;

// Generated protobuf types
pub mod users {
    pub mod v1 {
        tonic::include_proto!("users.v1");
    }
}

use users::v1::user_service_server::UserServiceServer;

/// Start the gRPC server
pub async fn start_grpc_server(users: UserService, host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{}:{}", host, port).parse()?;

    info!("Starting gRPC server on {}", addr);

    Server::builder()
        .add_service(UserServiceServer::new(UserGrpcServer::new(users)))
        .serve_with_shutdown(addr, crate::shutdown_signal())
        .await?;

    Ok(())
}
