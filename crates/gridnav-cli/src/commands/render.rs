//! Grid rendering

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use gridnav_cli::{pipeline, Config};
use gridnav_core::path::{is_contiguous, read_path_file};

#[derive(Args)]
pub struct RenderArgs {
    /// Overlay a path file ("x,y" per line)
    #[arg(short, long, conflicts_with = "astar")]
    path: Option<PathBuf>,

    /// Overlay the A* path
    #[arg(long)]
    astar: bool,
}

pub fn run(args: RenderArgs, config: &Config) -> Result<()> {
    let grid = config.grid.to_grid()?;

    let path = match args.path {
        Some(file) => {
            let path = read_path_file(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            if !is_contiguous(&grid, &path) {
                tracing::warn!("{} is not a contiguous path on this grid", file.display());
            }
            path
        }
        None if args.astar => pipeline::plan(&grid).path,
        None => Vec::new(),
    };

    println!("{}", grid.render(&path));
    Ok(())
}
