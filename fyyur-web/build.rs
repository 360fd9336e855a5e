//! Stamps the binary with where and how it was built.
//!
//! Exposed to the crate as `FYYUR_COMMIT`, `FYYUR_BUILT_AT` (UTC) and
//! `FYYUR_PROFILE`; both the start-up log and `/health` report them.

use std::path::Path;
use std::process::Command;

fn commit() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=10"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    (!described.is_empty()).then(|| described.to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let head = Path::new("../.git/HEAD");
    if head.exists() {
        println!("cargo:rerun-if-changed={}", head.display());
    }

    let commit = commit().unwrap_or_else(|| "untracked".into());
    let built_at = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".into());

    for (key, value) in [
        ("FYYUR_COMMIT", commit),
        ("FYYUR_BUILT_AT", built_at.to_string()),
        ("FYYUR_PROFILE", profile),
    ] {
        println!("cargo:rustc-env={}={}", key, value);
    }
}
