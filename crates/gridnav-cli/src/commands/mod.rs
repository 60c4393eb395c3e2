//! CLI command modules

pub mod compare;
pub mod config;
pub mod plan;
pub mod render;
pub mod train;

use std::path::{Path, PathBuf};

/// Resolve an output file: explicit flag, else `<output_dir>/<default_name>`
pub fn output_file(explicit: Option<PathBuf>, output_dir: &Path, default_name: &str) -> PathBuf {
    explicit.unwrap_or_else(|| output_dir.join(default_name))
}
