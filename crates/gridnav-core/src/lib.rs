//! gridnav Core - grid model, A* planner, and shared types
//!
//! This crate provides the foundational types used across all gridnav components.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod grid;
pub mod path;
pub mod planner;
pub mod types;

pub use error::{GridError, Result};
pub use grid::Grid;
pub use planner::{astar, AStarPlanner, PlanResult};
pub use types::{Coordinate, Direction};
