//! A* versus Q-learning comparison

use anyhow::Result;
use clap::Args;

use gridnav_cli::{pipeline, Config};

#[derive(Args)]
pub struct CompareArgs {
    /// Emit the comparison as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: CompareArgs, config: &Config) -> Result<()> {
    let comparison = pipeline::compare(config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    match comparison.optimal_steps {
        Some(steps) => println!("A* path:         {steps} steps"),
        None => println!("A* path:         no path"),
    }
    if comparison.learned_reached_goal {
        println!("Q-learning path:  {} steps", comparison.learned_steps);
    } else {
        println!(
            "Q-learning path:  goal not reached ({} steps taken)",
            comparison.learned_steps
        );
    }
    if let Some(slack) = comparison.slack() {
        println!("Extra steps:     {slack}");
    }

    Ok(())
}
