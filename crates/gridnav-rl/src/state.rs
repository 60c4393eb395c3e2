//! State, Action, and Reward types for RL

use serde::{Deserialize, Serialize};

use gridnav_core::{Coordinate, Direction, GridError};

/// Reward value from environment
pub type Reward = f64;

/// The agent's state is the cell it stands on
pub type State = Coordinate;

/// Discrete move in the learning environment
///
/// The index order (up, right, down, left) is the Q-table's action axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Up,
    Right,
    Down,
    Left,
}

impl Action {
    /// All actions in index order
    pub const ALL: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];

    /// Convert action to index for the Q-table's action axis
    pub fn to_index(self) -> usize {
        match self {
            Action::Up => 0,
            Action::Right => 1,
            Action::Down => 2,
            Action::Left => 3,
        }
    }

    /// Create action from index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Like [`Action::from_index`] but reports misuse as an error
    pub fn try_from_index(index: usize) -> Result<Self, GridError> {
        Self::from_index(index).ok_or(GridError::InvalidAction(index))
    }

    /// Number of discrete actions
    pub fn action_space_size() -> usize {
        Self::ALL.len()
    }

    /// Grid direction this action moves in
    pub fn direction(self) -> Direction {
        match self {
            Action::Up => Direction::North,
            Action::Right => Direction::East,
            Action::Down => Direction::South,
            Action::Left => Direction::West,
        }
    }

    /// `(dx, dy)` applied to the current state
    pub fn delta(self) -> (isize, isize) {
        self.direction().delta()
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::North => Action::Up,
            Direction::East => Action::Right,
            Direction::South => Action::Down,
            Direction::West => Action::Left,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Up => write!(f, "up"),
            Action::Right => write!(f, "right"),
            Action::Down => write!(f, "down"),
            Action::Left => write!(f, "left"),
        }
    }
}
