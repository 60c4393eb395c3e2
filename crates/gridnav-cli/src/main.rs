//! gridnav CLI - plan, train, and compare grid navigators
//!
//! Paths are written to the configured output directory as `x,y` lines.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::too_many_lines)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridnav_cli::Config;

mod commands;

use commands::{compare, config, plan, render, train};

#[derive(Parser)]
#[command(name = "gridnav")]
#[command(author, version, about = "gridnav - A* and Q-learning on 2D grids", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (overrides GRIDNAV_CONFIG and ./gridnav.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan the shortest path with A*
    Plan(plan::PlanArgs),

    /// Train a Q-learning agent and extract its greedy path
    Train(train::TrainArgs),

    /// Compare the A* path against the learned path
    Compare(compare::CompareArgs),

    /// Draw the grid, optionally with a path
    Render(render::RenderArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(config::ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `config init` must work even when the existing file is broken
    let loaded = match &cli.command {
        Commands::Config(_) => None,
        _ => Some(Config::load(cli.config.as_deref())?),
    };

    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        loaded
            .as_ref()
            .map_or_else(|| "info".to_string(), |c| c.general.log_level.clone())
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "gridnav={log_level},gridnav_core={log_level},\
                     gridnav_rl={log_level},gridnav_cli={log_level}"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if loaded.is_some() {
        match Config::resolve_path(cli.config.as_deref()) {
            Some(path) => info!("Loaded config from: {}", path.display()),
            None => info!("No config file found, using defaults"),
        }
    }

    match (cli.command, loaded) {
        (Commands::Config(cmd), _) => config::run(cmd, cli.config.as_deref()),
        (Commands::Plan(args), Some(cfg)) => plan::run(args, &cfg),
        (Commands::Train(args), Some(cfg)) => train::run(args, &cfg),
        (Commands::Compare(args), Some(cfg)) => compare::run(args, &cfg),
        (Commands::Render(args), Some(cfg)) => render::run(args, &cfg),
        (_, None) => anyhow::bail!("configuration was not loaded"),
    }
}
