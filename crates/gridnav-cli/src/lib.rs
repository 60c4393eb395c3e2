//! gridnav CLI library - configuration and the plan/train pipeline
//!
//! The `gridnav` binary is a thin clap layer over this crate.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod pipeline;

pub use config::Config;
pub use pipeline::{Comparison, TrainingRun};
