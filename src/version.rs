//! Version and build information.

/// Crate version from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash, when the build ran inside a checkout.
pub const GIT_HASH: Option<&str> = option_env!("PLAN_PREFLIGHT_GIT_HASH");

/// Build date, set by the build script.
pub const BUILD_DATE: Option<&str> = option_env!("PLAN_PREFLIGHT_BUILD_DATE");

/// rustc version used for the build.
pub const RUSTC_VERSION: Option<&str> = option_env!("PLAN_PREFLIGHT_RUSTC_VERSION");

/// Human-readable build info string.
pub fn get_build_info() -> String {
    let mut info = format!("plan-preflight {}", VERSION);
    if let Some(hash) = GIT_HASH {
        info.push_str(&format!(" ({})", hash));
    }
    if let Some(date) = BUILD_DATE {
        info.push_str(&format!("\nbuilt: {}", date));
    }
    if let Some(rustc) = RUSTC_VERSION {
        info.push_str(&format!("\n{}", rustc));
    }
    info
}
