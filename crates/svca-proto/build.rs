fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Vendored protoc so the build does not depend on a system install.
    let protoc_path = protoc_bin_vendored::protoc_bin_path()?;
    unsafe {
        std::env::set_var("PROTOC", protoc_path);
    }
    let include_path = protoc_bin_vendored::include_path()?;
    unsafe {
        std::env::set_var("PROTOC_INCLUDE", include_path.as_os_str());
    }

    println!("cargo:rerun-if-changed=proto/svc_a_demo.proto");

    // The server half is only used by in-process test servers.
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(
            &["proto/svc_a_demo.proto"],
            &["proto", &include_path.to_string_lossy()],
        )?;
    Ok(())
}
