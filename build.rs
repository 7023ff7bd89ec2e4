fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::env::set_var(
        "PROTOC",
        protoc_bin_vendored::protoc_bin_path().expect("vendored protoc binary"),
    );
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/project.proto"], &["proto/"])?;
    Ok(())
}
