//! Version details baked in by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string for `--version`.
pub fn version_line() -> String {
    format!("glimmering {} ({}, built {})", VERSION, BUILD_COMMIT, BUILD_DATE)
}
