//! Build script for spyglass-core
//!
//! This script checks the toolchain before compilation.
//!
//! ## Requirements
//!
//! - **Rust**: 1.82.0 or newer (`Option::is_none_or`)

fn main()
{
    // Check minimum Rust version
    if let Ok(rustc_version) = rustc_version::version() {
        // Nightlies report a pre-release of the same version, so only compare major.minor
        if (rustc_version.major, rustc_version.minor) < (1, 82) {
            panic!("spyglass-core requires Rust 1.82.0 or newer, found {rustc_version}");
        }
    } else {
        // If we can't get version (e.g., in some build environments), just warn
        println!("cargo:warning=could not verify Rust version");
    }
}
