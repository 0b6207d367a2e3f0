//! Build script for ppt-screenshot.
//!
//! Embeds the commit hash and build date shown by `--version`. Both can be
//! overridden with `PPTSHOT_COMMIT_HASH` and `PPTSHOT_BUILD_DATE`.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-env-changed=PPTSHOT_COMMIT_HASH");
    println!("cargo:rerun-if-env-changed=PPTSHOT_BUILD_DATE");

    let commit = env::var("PPTSHOT_COMMIT_HASH")
        .ok()
        .or_else(get_git_hash)
        .unwrap_or_else(|| "dev".to_string());
    let date = env::var("PPTSHOT_BUILD_DATE")
        .ok()
        .or_else(get_build_date)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=PPTSHOT_COMMIT={}", commit);
    println!("cargo:rustc-env=PPTSHOT_DATE={}", date);
}

/// Get the current git commit hash (short form)
fn get_git_hash() -> Option<String> {
    command_output("git", &["rev-parse", "--short", "HEAD"])
}

/// Get the current build date in ISO 8601 format
fn get_build_date() -> Option<String> {
    command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"])
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
