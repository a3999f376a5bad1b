fn main() {
    // VERSION is injected by release builds. Fall back to the crate version.
    let version =
        std::env::var("VERSION").unwrap_or_else(|_| format!("v{}", env!("CARGO_PKG_VERSION")));
    println!("cargo:rustc-env=VERSION={}", version);
    println!("cargo:rerun-if-env-changed=VERSION");
}
