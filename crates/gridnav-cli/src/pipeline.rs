//! Planning and training runs driven by a [`Config`]

use anyhow::{Context, Result};
use tracing::info;

use gridnav_core::path::path_length;
use gridnav_core::{AStarPlanner, Grid, PlanResult};
use gridnav_rl::{GreedyPath, GridEnvironment, QLearningAgent, TrainingStats};

use crate::config::Config;

/// Result of a training run
pub struct TrainingRun {
    pub agent: QLearningAgent,
    pub stats: TrainingStats,
    pub greedy: GreedyPath,
}

/// Optimal versus learned path lengths on the same grid
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Comparison {
    /// A* step count, `None` when the goal is unreachable
    pub optimal_steps: Option<usize>,
    pub learned_steps: usize,
    pub learned_reached_goal: bool,
}

impl Comparison {
    /// Extra steps taken by the learned path; `None` unless both reached the goal
    pub fn slack(&self) -> Option<usize> {
        match (self.optimal_steps, self.learned_reached_goal) {
            (Some(optimal), true) => Some(self.learned_steps.saturating_sub(optimal)),
            _ => None,
        }
    }
}

pub fn plan(grid: &Grid) -> PlanResult {
    let result = AStarPlanner::new(grid).plan_with_stats();
    if result.found() {
        info!(
            "A* path: {} steps ({} nodes expanded)",
            result.steps(),
            result.nodes_expanded
        );
    } else {
        info!("A* found no path from {} to {}", grid.start(), grid.goal());
    }
    result
}

pub fn train(config: &Config, grid: Grid) -> Result<TrainingRun> {
    let env = GridEnvironment::new(grid, config.environment.clone())
        .context("Failed to build learning environment")?;
    let mut agent = QLearningAgent::new(env, config.agent.clone())
        .context("Failed to build Q-learning agent")?
        .with_log_every(config.training.log_every);

    let stats = agent.train(
        config.training.episodes,
        config.training.max_steps_per_episode,
    );
    let greedy = agent
        .derive_greedy_path_detailed(None, config.training.greedy_max_steps)
        .context("Failed to derive greedy path")?;

    info!(
        "Learned path: {} steps, reached goal: {}",
        path_length(&greedy.path),
        greedy.reached_goal
    );

    Ok(TrainingRun {
        agent,
        stats,
        greedy,
    })
}

pub fn compare(config: &Config) -> Result<Comparison> {
    let grid = config.grid.to_grid()?;
    let planned = plan(&grid);
    let run = train(config, grid)?;

    Ok(Comparison {
        optimal_steps: planned.found().then(|| planned.steps()),
        learned_steps: path_length(&run.greedy.path),
        learned_reached_goal: run.greedy.reached_goal,
    })
}
