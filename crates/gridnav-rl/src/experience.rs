//! Transitions and training statistics

use serde::{Deserialize, Serialize};

use crate::state::{Action, Reward, State};

/// A single experience tuple (s, a, r, s', done)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub state: State,
    pub action: Action,
    pub reward: Reward,
    pub next_state: State,
    pub done: bool,
}

impl Transition {
    /// Create a new transition
    pub fn new(
        state: State,
        action: Action,
        reward: Reward,
        next_state: State,
        done: bool,
    ) -> Self {
        Self {
            state,
            action,
            reward,
            next_state,
            done,
        }
    }
}

/// Per-episode bookkeeping collected by `QLearningAgent::train`
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrainingStats {
    pub episodes: usize,
    pub total_steps: usize,
    pub goals_reached: usize,
    pub episode_rewards: Vec<Reward>,
    pub episode_lengths: Vec<usize>,
}

impl TrainingStats {
    pub fn record_episode(&mut self, reward: Reward, length: usize, reached_goal: bool) {
        self.episodes += 1;
        self.total_steps += length;
        if reached_goal {
            self.goals_reached += 1;
        }
        self.episode_rewards.push(reward);
        self.episode_lengths.push(length);
    }

    /// Fraction of episodes that ended on the goal
    pub fn success_rate(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.goals_reached as f64 / self.episodes as f64
        }
    }

    /// Mean return over the last `n` episodes (all of them if fewer)
    pub fn mean_reward_last(&self, n: usize) -> f64 {
        let tail = &self.episode_rewards[self.episode_rewards.len().saturating_sub(n)..];
        if tail.is_empty() {
            0.0
        } else {
            tail.iter().sum::<f64>() / tail.len() as f64
        }
    }

    /// Mean episode length over the last `n` episodes
    pub fn mean_length_last(&self, n: usize) -> f64 {
        let tail = &self.episode_lengths[self.episode_lengths.len().saturating_sub(n)..];
        if tail.is_empty() {
            0.0
        } else {
            tail.iter().sum::<usize>() as f64 / tail.len() as f64
        }
    }
}
