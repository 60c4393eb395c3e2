//! Q-learning training command

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use gridnav_cli::{pipeline, Config};
use gridnav_core::path::{path_length, write_path_file};

#[derive(Args)]
pub struct TrainArgs {
    /// Number of training episodes (overrides training.episodes)
    #[arg(short, long)]
    episodes: Option<usize>,

    /// Agent seed (overrides agent.seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Path file to write (default: <output_dir>/qlearn_path.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also dump the learned Q-table as JSON
    #[arg(long)]
    q_table: Option<PathBuf>,

    /// Print the grid with the learned path drawn on it
    #[arg(long)]
    render: bool,
}

pub fn run(args: TrainArgs, config: &Config) -> Result<()> {
    let mut config = config.clone();
    if let Some(episodes) = args.episodes {
        config.training.episodes = episodes;
    }
    if let Some(seed) = args.seed {
        config.agent.seed = seed;
    }

    let grid = config.grid.to_grid()?;
    let run = pipeline::train(&config, grid)?;

    let file = super::output_file(args.output, &config.general.output_dir, "qlearn_path.txt");
    write_path_file(&file, &run.greedy.path)
        .with_context(|| format!("Failed to write {}", file.display()))?;

    println!(
        "Trained {} episodes: success rate {:.1}%, mean reward (last 100) {:.2}",
        run.stats.episodes,
        run.stats.success_rate() * 100.0,
        run.stats.mean_reward_last(100)
    );
    if run.greedy.reached_goal {
        println!("Q-learning path: {} steps", path_length(&run.greedy.path));
    } else if run.greedy.stuck {
        println!(
            "Q-learning path: stuck after {} steps",
            path_length(&run.greedy.path)
        );
    } else {
        println!(
            "Q-learning path: goal not reached within {} steps",
            config.training.greedy_max_steps
        );
    }
    println!("Saved: {}", file.display());

    if let Some(table_file) = args.q_table {
        if let Some(parent) = table_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = run.agent.q_table().to_json()?;
        std::fs::write(&table_file, json)
            .with_context(|| format!("Failed to write {}", table_file.display()))?;
        println!("Saved: {}", table_file.display());
    }

    if args.render {
        println!("\n{}", run.agent.environment().grid().render(&run.greedy.path));
    }

    Ok(())
}
