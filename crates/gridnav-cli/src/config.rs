//! Configuration loading for gridnav

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use gridnav_core::{Coordinate, Grid};
use gridnav_rl::{AgentConfig, EnvConfig};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub grid: GridConfig,
    pub environment: EnvConfig,
    pub agent: AgentConfig,
    pub training: TrainingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,
    pub output_dir: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output_dir: PathBuf::from("artifacts"),
        }
    }
}

/// Grid layout; `random`, when present, replaces `obstacles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub start: Coordinate,
    pub goal: Coordinate,
    pub obstacles: Vec<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random: Option<RandomGridConfig>,
}

impl Default for GridConfig {
    fn default() -> Self {
        // 5x5 with a wall across row 2, gap at x = 2
        Self {
            width: 5,
            height: 5,
            start: Coordinate::new(0, 0),
            goal: Coordinate::new(4, 4),
            obstacles: (0..5)
                .filter(|x| *x != 2)
                .map(|x| Coordinate::new(x, 2))
                .collect(),
            random: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomGridConfig {
    pub obstacle_prob: f64,
    pub seed: u64,
}

impl Default for RandomGridConfig {
    fn default() -> Self {
        Self {
            obstacle_prob: 0.2,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub episodes: usize,
    pub max_steps_per_episode: usize,
    pub greedy_max_steps: usize,
    pub log_every: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 800,
            max_steps_per_episode: 200,
            greedy_max_steps: 100,
            log_every: 100,
        }
    }
}

impl GridConfig {
    /// Build and validate the grid this section describes
    pub fn to_grid(&self) -> Result<Grid> {
        let grid = match &self.random {
            Some(random) => Grid::random(
                self.width,
                self.height,
                random.obstacle_prob,
                random.seed,
                self.start,
                self.goal,
            ),
            None => Grid::new(
                self.width,
                self.height,
                self.obstacles.iter().copied(),
                self.start,
                self.goal,
            ),
        };
        grid.context("Invalid grid configuration")
    }
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// `explicit` (from `--config`) wins over the search path and must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigBuilder::<config::builder::DefaultState>::default();

        if let Some(path) = Self::resolve_path(explicit) {
            builder = builder.add_source(File::from(path).required(explicit.is_some()));
        }

        // Environment variables with GRIDNAV_ prefix, e.g. GRIDNAV__AGENT__EPSILON
        builder = builder.add_source(
            Environment::with_prefix("GRIDNAV")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Parse a TOML document, filling gaps with defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        config::Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// The file [`Config::load`] reads, if any
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(),
        }
    }

    /// Find the configuration file
    fn find_config_file() -> Option<PathBuf> {
        // Check in order: GRIDNAV_CONFIG env, ./gridnav.toml, ~/.config/gridnav/gridnav.toml
        if let Ok(path) = std::env::var("GRIDNAV_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let local = PathBuf::from("gridnav.toml");
        if local.exists() {
            return Some(local);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("gridnav").join("gridnav.toml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        None
    }
}
