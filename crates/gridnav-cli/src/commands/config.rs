//! Configuration management commands

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;

use gridnav_cli::Config;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Initialize configuration file
    Init {
        /// Where to write (default: ./gridnav.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn run(cmd: ConfigCommands, explicit: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(explicit),
        ConfigCommands::Init { output, force } => init(output, force),
    }
}

fn show(explicit: Option<&Path>) -> Result<()> {
    let config = Config::load(explicit)?;
    println!("Effective Configuration");
    println!("=======================\n");
    println!("{}", config.to_toml_string()?);
    Ok(())
}

fn init(output: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = output.unwrap_or_else(|| PathBuf::from("gridnav.toml"));

    if config_path.exists() && !force {
        println!("Configuration file already exists: {}", config_path.display());
        println!("Use --force to overwrite");
        return Ok(());
    }

    let contents = Config::default().to_toml_string()?;
    std::fs::write(&config_path, contents)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created configuration file: {}", config_path.display());

    Ok(())
}
