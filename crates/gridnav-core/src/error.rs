//! Error types for gridnav

use thiserror::Error;

use crate::types::Coordinate;

/// Main error type for gridnav
///
/// Every variant except `Io` and `Serialization` describes caller misuse:
/// bad dimensions, endpoints outside the grid or on an obstacle, an action
/// index outside the action space, or a learning parameter out of range.
/// "No path" and "agent did not reach the goal" are not errors.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid grid dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: usize, height: usize },

    #[error("{what} {coord} is outside the {width}x{height} grid")]
    OutOfBounds {
        what: &'static str,
        coord: Coordinate,
        width: usize,
        height: usize,
    },

    #[error("{what} {coord} lies on an obstacle")]
    Blocked { what: &'static str, coord: Coordinate },

    #[error("Invalid action index: {0} (action space has 4 actions)")]
    InvalidAction(usize),

    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gridnav operations
pub type Result<T> = std::result::Result<T, GridError>;
