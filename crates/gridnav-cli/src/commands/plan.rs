//! A* planning command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use gridnav_cli::{pipeline, Config};
use gridnav_core::path::write_path_file;
use gridnav_core::Coordinate;

#[derive(Args)]
pub struct PlanArgs {
    /// Override the start cell ("x,y")
    #[arg(long)]
    start: Option<Coordinate>,

    /// Override the goal cell ("x,y")
    #[arg(long)]
    goal: Option<Coordinate>,

    /// Path file to write (default: <output_dir>/astar_path.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the grid with the path drawn on it
    #[arg(long)]
    render: bool,
}

pub fn run(args: PlanArgs, config: &Config) -> Result<()> {
    let mut grid = config.grid.to_grid()?;
    if args.start.is_some() || args.goal.is_some() {
        let start = args.start.unwrap_or(grid.start());
        let goal = args.goal.unwrap_or(grid.goal());
        grid = grid.with_endpoints(start, goal)?;
    }

    let result = pipeline::plan(&grid);

    let file = super::output_file(args.output, &config.general.output_dir, "astar_path.txt");
    write_path_file(&file, &result.path)
        .with_context(|| format!("Failed to write {}", file.display()))?;

    if result.found() {
        println!(
            "A* path: {} steps, {} nodes expanded",
            result.steps(),
            result.nodes_expanded
        );
    } else {
        println!("A* path: no path from {} to {}", grid.start(), grid.goal());
    }
    println!("Saved: {}", file.display());

    if args.render {
        println!("\n{}", grid.render(&result.path));
    }

    Ok(())
}
