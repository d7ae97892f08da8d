//! Generates `build_info.rs` with the package version, commit and build date.

use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

fn git_commit() -> String {
    let from_git = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    env::var("GLIMMERING_BUILD_COMMIT")
        .ok()
        .or(from_git)
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() -> io::Result<()> {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    let commit = git_commit();
    let date = env::var("GLIMMERING_BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    fs::write(
        Path::new(&out_dir).join("build_info.rs"),
        format!(
            "pub const VERSION: &str = {:?};\npub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
            version, commit, date
        ),
    )?;

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=GLIMMERING_BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=GLIMMERING_BUILD_DATE");
    Ok(())
}
