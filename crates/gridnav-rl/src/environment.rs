//! Learning environment - a step-based interaction surface over a grid

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use gridnav_core::{Grid, GridError, Result};

use crate::state::{Action, Reward, State};

/// Environment configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Reward added on every step
    #[serde(default = "default_step_penalty")]
    pub step_penalty: Reward,

    /// Reward added when the goal is entered
    #[serde(default = "default_goal_reward")]
    pub goal_reward: Reward,

    /// Reward added when the move hits a wall, an obstacle, or the edge
    #[serde(default = "default_invalid_penalty")]
    pub invalid_penalty: Reward,

    /// Episode truncation limit; `None` means `4 * width * height`
    #[serde(default)]
    pub max_steps: Option<usize>,

    /// Seed for the environment's own generator
    #[serde(default = "default_env_seed")]
    pub seed: u64,
}

fn default_step_penalty() -> Reward {
    -1.0
}
fn default_goal_reward() -> Reward {
    100.0
}
fn default_invalid_penalty() -> Reward {
    -5.0
}
fn default_env_seed() -> u64 {
    42
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            step_penalty: default_step_penalty(),
            goal_reward: default_goal_reward(),
            invalid_penalty: default_invalid_penalty(),
            max_steps: None,
            seed: default_env_seed(),
        }
    }
}

impl EnvConfig {
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Effective step limit for `grid`
    pub fn resolved_max_steps(&self, grid: &Grid) -> usize {
        self.max_steps
            .unwrap_or_else(|| 4 * grid.width() * grid.height())
    }
}

/// Result of a single `step`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub state: State,
    pub reward: Reward,
    /// Goal reached or step limit hit
    pub done: bool,
    pub reached_goal: bool,
    /// Step limit hit (may coincide with `reached_goal`)
    pub truncated: bool,
    /// False when the move was refused and the agent stayed put
    pub moved: bool,
}

/// Grid world with a fixed 4-action space
pub struct GridEnvironment {
    grid: Grid,
    config: EnvConfig,
    max_steps: usize,
    state: State,
    steps: usize,
    rng: ChaCha8Rng,
}

impl GridEnvironment {
    /// Create a new environment positioned on the grid's start
    pub fn new(grid: Grid, config: EnvConfig) -> Result<Self> {
        let max_steps = config.resolved_max_steps(&grid);
        if max_steps == 0 {
            return Err(GridError::InvalidParameter {
                name: "max_steps",
                value: 0.0,
            });
        }

        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let state = grid.start();

        Ok(Self {
            grid,
            config,
            max_steps,
            state,
            steps: 0,
            rng,
        })
    }

    /// Environment with default rewards and step limit
    pub fn with_defaults(grid: Grid) -> Result<Self> {
        Self::new(grid, EnvConfig::default())
    }

    /// Back to the grid's start with a zeroed step counter
    pub fn reset(&mut self) -> State {
        self.state = self.grid.start();
        self.steps = 0;
        self.state
    }

    pub fn step(&mut self, action: Action) -> StepOutcome {
        let previous = self.state;
        let candidate = previous
            .offset(action.direction())
            .filter(|c| self.grid.in_bounds(c) && self.grid.passable(c));

        let mut reward = self.config.step_penalty;
        match candidate {
            Some(next) => self.state = next,
            None => reward += self.config.invalid_penalty,
        }

        self.steps += 1;

        let reached_goal = self.state == self.grid.goal();
        if reached_goal {
            reward += self.config.goal_reward;
        }
        let truncated = self.steps >= self.max_steps;

        trace!(
            "step {}: {} --{}--> {} reward={}",
            self.steps,
            previous,
            action,
            self.state,
            reward
        );

        StepOutcome {
            state: self.state,
            reward,
            done: reached_goal || truncated,
            reached_goal,
            truncated,
            moved: self.state != previous,
        }
    }

    /// Step with a raw action index; indices outside `0..4` are rejected
    pub fn step_index(&mut self, action: usize) -> Result<StepOutcome> {
        Ok(self.step(Action::try_from_index(action)?))
    }

    /// Place the agent on `state` without touching the step counter
    pub fn set_state(&mut self, state: State) -> Result<()> {
        self.grid.check_endpoint("state", state)?;
        self.state = state;
        Ok(())
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn action_space_n(&self) -> usize {
        Action::action_space_size()
    }

    /// `(width, height)`
    pub fn observation_shape(&self) -> (usize, usize) {
        (self.grid.width(), self.grid.height())
    }

    /// The environment's own seeded generator, for scenario randomisation
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}
