//! Build script for plan-preflight.
//!
//! Embeds version metadata (git hash, build date, rustc version) for the
//! `version` subcommand.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    if let Some(hash) = get_git_hash() {
        println!("cargo:rustc-env=PLAN_PREFLIGHT_GIT_HASH={}", hash);
    }

    if let Some(date) = get_build_date() {
        println!("cargo:rustc-env=PLAN_PREFLIGHT_BUILD_DATE={}", date);
    }

    if let Some(version) = get_rustc_version() {
        println!("cargo:rustc-env=PLAN_PREFLIGHT_RUSTC_VERSION={}", version);
    }
}

/// Current git commit hash (short form), when building from a checkout.
fn get_git_hash() -> Option<String> {
    run_trimmed("git", &["rev-parse", "--short", "HEAD"])
}

/// Build date in ISO 8601.
fn get_build_date() -> Option<String> {
    run_trimmed("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"])
}

fn get_rustc_version() -> Option<String> {
    run_trimmed("rustc", &["--version"])
}

fn run_trimmed(cmd: &str, args: &[&str]) -> Option<String> {
    Command::new(cmd).args(args).output().ok().and_then(|out| {
        if out.status.success() {
            String::from_utf8(out.stdout).ok().map(|s| s.trim().to_string())
        } else {
            None
        }
    })
}
