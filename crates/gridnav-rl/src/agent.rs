//! Tabular Q-learning agent
//!
//! Learns a Q-table through online, one-step temporal-difference updates
//! while interacting with a [`GridEnvironment`], then reads a greedy path
//! off the table.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use gridnav_core::{GridError, Result};

use crate::environment::GridEnvironment;
use crate::experience::{TrainingStats, Transition};
use crate::state::{Action, Reward, State};
use crate::table::QTable;

/// Learning hyperparameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Learning rate, in (0, 1]
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Discount factor, in (0, 1]
    #[serde(default = "default_gamma")]
    pub gamma: f64,

    /// Exploration probability, in [0, 1]
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Seed for the agent's own generator
    #[serde(default = "default_agent_seed")]
    pub seed: u64,
}

fn default_alpha() -> f64 {
    0.5
}
fn default_gamma() -> f64 {
    0.95
}
fn default_epsilon() -> f64 {
    0.1
}
fn default_agent_seed() -> u64 {
    123
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            gamma: default_gamma(),
            epsilon: default_epsilon(),
            seed: default_agent_seed(),
        }
    }
}

impl AgentConfig {
    pub fn validate(&self) -> Result<()> {
        let unit = |name: &'static str, value: f64, allow_zero: bool| {
            let ok = if allow_zero {
                (0.0..=1.0).contains(&value)
            } else {
                value > 0.0 && value <= 1.0
            };
            if ok {
                Ok(())
            } else {
                Err(GridError::InvalidParameter { name, value })
            }
        };
        unit("alpha", self.alpha, false)?;
        unit("gamma", self.gamma, false)?;
        unit("epsilon", self.epsilon, true)
    }
}

/// Outcome of a greedy rollout
#[derive(Debug, Clone, PartialEq)]
pub struct GreedyPath {
    /// Visited cells, starting with the start cell
    pub path: Vec<State>,
    pub reached_goal: bool,
    /// Every action was refused at the last cell
    pub stuck: bool,
}

/// Q-learning agent owning its environment, table, and generator
pub struct QLearningAgent {
    env: GridEnvironment,
    table: QTable,
    config: AgentConfig,
    rng: ChaCha8Rng,
    log_every: usize,
}

impl QLearningAgent {
    /// Create a new agent with a zeroed Q-table sized from the environment
    pub fn new(env: GridEnvironment, config: AgentConfig) -> Result<Self> {
        config.validate()?;

        let (width, height) = env.observation_shape();
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        Ok(Self {
            env,
            table: QTable::new(width, height),
            config,
            rng,
            log_every: 100,
        })
    }

    /// Episode interval between progress log lines (0 disables them)
    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    /// Epsilon-greedy selection
    ///
    /// Exploits by picking uniformly among all actions tied for the row
    /// maximum, so an all-zero row does not favour any direction.
    pub fn choose_action(&mut self, state: State) -> Action {
        if self.rng.gen::<f64>() < self.config.epsilon {
            return Action::ALL
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(Action::Up);
        }

        let best = self.table.best_actions(state);
        match best.choose(&mut self.rng) {
            Some(action) => *action,
            None => self.table.argmax(state),
        }
    }

    /// One-step TD update; returns the TD error
    ///
    /// `Q[s,a] += alpha * (reward + gamma * max_a' Q[s',a'] - Q[s,a])`
    pub fn learn(
        &mut self,
        state: State,
        action: Action,
        reward: Reward,
        next_state: State,
    ) -> f64 {
        let best_next = self.table.max_value(next_state);
        let current = self.table.get(state, action);
        let td_error = reward + self.config.gamma * best_next - current;
        self.table
            .set(state, action, current + self.config.alpha * td_error);
        td_error
    }

    /// Learn from a recorded transition
    pub fn learn_from(&mut self, transition: &Transition) -> f64 {
        self.learn(
            transition.state,
            transition.action,
            transition.reward,
            transition.next_state,
        )
    }

    /// Run `episodes` episodes of online Q-learning
    ///
    /// Each episode ends when the environment reports done or after
    /// `max_steps_per_episode` steps, whichever comes first.
    pub fn train(&mut self, episodes: usize, max_steps_per_episode: usize) -> TrainingStats {
        info!(
            "Training for {} episodes (alpha={}, gamma={}, epsilon={})",
            episodes, self.config.alpha, self.config.gamma, self.config.epsilon
        );

        let mut stats = TrainingStats::default();

        for episode in 0..episodes {
            let mut state = self.env.reset();
            let mut episode_reward = 0.0;
            let mut length = 0;
            let mut reached_goal = false;

            for _ in 0..max_steps_per_episode {
                let action = self.choose_action(state);
                let outcome = self.env.step(action);
                self.learn(state, action, outcome.reward, outcome.state);

                episode_reward += outcome.reward;
                length += 1;
                state = outcome.state;

                if outcome.done {
                    reached_goal = outcome.reached_goal;
                    break;
                }
            }

            stats.record_episode(episode_reward, length, reached_goal);

            if self.log_every > 0 && (episode + 1) % self.log_every == 0 {
                info!(
                    "Episode {}/{}: mean reward {:.2}, mean length {:.1}, success rate {:.2}",
                    episode + 1,
                    episodes,
                    stats.mean_reward_last(self.log_every),
                    stats.mean_length_last(self.log_every),
                    stats.success_rate()
                );
            }
        }

        info!(
            "Training complete: {} steps, goal reached in {}/{} episodes",
            stats.total_steps, stats.goals_reached, stats.episodes
        );

        stats
    }

    /// Greedy rollout from `start` (the grid's start when `None`)
    pub fn derive_greedy_path(
        &mut self,
        start: Option<State>,
        max_steps: usize,
    ) -> Result<Vec<State>> {
        Ok(self.derive_greedy_path_detailed(start, max_steps)?.path)
    }

    /// Greedy rollout with goal and stuck flags
    ///
    /// When the greedy action is refused, the remaining actions are tried in
    /// descending value order and the first one that moves the agent is
    /// taken. If none moves it, the rollout stops with the partial path.
    pub fn derive_greedy_path_detailed(
        &mut self,
        start: Option<State>,
        max_steps: usize,
    ) -> Result<GreedyPath> {
        let start = start.unwrap_or_else(|| self.env.grid().start());
        let goal = self.env.grid().goal();

        self.env.reset();
        self.env.set_state(start)?;

        let mut state = start;
        let mut path = vec![state];
        let mut stuck = false;

        if state == goal {
            return Ok(GreedyPath {
                path,
                reached_goal: true,
                stuck,
            });
        }

        for _ in 0..max_steps {
            let greedy = self.table.argmax(state);
            let mut outcome = self.env.step(greedy);

            if !outcome.moved {
                for fallback in self.table.actions_by_value(state) {
                    if fallback == greedy {
                        continue;
                    }
                    outcome = self.env.step(fallback);
                    if outcome.moved {
                        break;
                    }
                }
                if !outcome.moved {
                    warn!("Greedy rollout stuck at {} after {} steps", state, path.len() - 1);
                    stuck = true;
                    break;
                }
            }

            state = outcome.state;
            path.push(state);
            if state == goal || outcome.done {
                break;
            }
        }

        let reached_goal = state == goal;
        debug!(
            "Greedy path from {}: {} steps, reached goal: {}",
            start,
            path.len() - 1,
            reached_goal
        );

        Ok(GreedyPath {
            path,
            reached_goal,
            stuck,
        })
    }

    pub fn q_table(&self) -> &QTable {
        &self.table
    }

    pub fn environment(&self) -> &GridEnvironment {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut GridEnvironment {
        &mut self.env
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}
