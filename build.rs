use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(quiet_logging)");

    // Pick the log configuration based on build profile
    let profile = env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());

    if profile == "release" {
        // Warnings and errors only
        println!("cargo:rustc-cfg=quiet_logging");
    }

    println!("cargo:rerun-if-env-changed=PROFILE");
}
