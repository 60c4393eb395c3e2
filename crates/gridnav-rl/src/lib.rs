//! gridnav RL - Reinforcement learning on grid worlds
//!
//! This crate provides a step-based learning environment over a
//! [`gridnav_core::Grid`] and a tabular Q-learning agent that learns to
//! cross it.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]

pub mod agent;
pub mod environment;
pub mod experience;
pub mod state;
pub mod table;

pub use agent::{AgentConfig, GreedyPath, QLearningAgent};
pub use environment::{EnvConfig, GridEnvironment, StepOutcome};
pub use experience::{TrainingStats, Transition};
pub use state::{Action, Reward, State};
pub use table::{QTable, QTableSnapshot};
