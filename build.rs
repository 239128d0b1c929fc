fn main() {
    // Capture the current timestamp as the build time
    let now = chrono::Utc::now();

    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    // Footer copyright
    println!("cargo:rustc-env=BUILD_YEAR={}", now.format("%Y"));

    println!("cargo:rerun-if-changed=build.rs");
}
