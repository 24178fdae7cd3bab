//! Build-time information
//!
//! Metadata captured by `vergen` in the build script.

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., x86_64-unknown-linux-gnu)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Rust channel (stable, beta, or nightly)
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Short version tag: `{crate version}+{target_triple}-opt{opt_level}`
pub fn version_string() -> String {
    format!(
        "{}+{}-opt{}",
        env!("CARGO_PKG_VERSION"),
        CARGO_TARGET_TRIPLE,
        CARGO_OPT_LEVEL
    )
}

/// Multi-line build summary
pub fn detailed_info() -> String {
    format!(
        "Built: {}\nTarget: {}\nOptimization: {}\nRustc: {} ({})",
        BUILD_TIMESTAMP, CARGO_TARGET_TRIPLE, CARGO_OPT_LEVEL, RUSTC_SEMVER, RUSTC_CHANNEL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_names_target_and_opt_level() {
        let version = version_string();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version.contains(CARGO_TARGET_TRIPLE));
        assert!(version.ends_with(&format!("-opt{}", CARGO_OPT_LEVEL)));
    }
}
