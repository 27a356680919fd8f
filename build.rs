// Build script for user-service
// Compiles user_service.proto for gRPC server and client code generation
fn main() {
    println!("cargo:rerun-if-changed=proto/user_service.proto");

    // Client code is also generated for integration tests
    tonic_build::configure()
        .compile_well_known_types(false)
        .extern_path(".google.protobuf.Timestamp", "::prost_types::Timestamp")
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/user_service.proto"], &["proto"])
        .expect("Failed to compile user_service.proto");
}
