// build.rs - Build information for the optional-lookup binary

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    generate_build_info();
}

fn generate_build_info() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("build_info.rs");

    let git_hash = get_git_hash().unwrap_or_else(|| "unknown".to_string());
    let build_time = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let version = env::var("CARGO_PKG_VERSION").unwrap();
    let long_version = format!("{} ({} {})", version, git_hash, build_time);

    let build_info = format!(
        r#"
pub const GIT_HASH: &str = "{}";
pub const BUILD_TIME: &str = "{}";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const LONG_VERSION: &str = "{}";
"#,
        git_hash, build_time, long_version
    );

    fs::write(dest_path, build_info).unwrap();
}

fn get_git_hash() -> Option<String> {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
            } else {
                None
            }
        })
}
