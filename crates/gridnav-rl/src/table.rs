//! Dense Q-table over (x, y, action)

use ndarray::{Array2, Array3};
use serde::Serialize;

use crate::state::{Action, State};

/// Action-value table, shape `(width, height, 4)`, zero-initialised
#[derive(Debug, Clone, PartialEq)]
pub struct QTable {
    values: Array3<f64>,
}

impl QTable {
    /// Create a new zero-filled table for a `width x height` grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            values: Array3::zeros((width, height, Action::action_space_size())),
        }
    }

    pub fn width(&self) -> usize {
        self.values.dim().0
    }

    pub fn height(&self) -> usize {
        self.values.dim().1
    }

    pub fn get(&self, state: State, action: Action) -> f64 {
        self.values[[state.x, state.y, action.to_index()]]
    }

    pub fn set(&mut self, state: State, action: Action, value: f64) {
        self.values[[state.x, state.y, action.to_index()]] = value;
    }

    /// The four action values at `state`, in action index order
    pub fn row(&self, state: State) -> [f64; 4] {
        let mut row = [0.0; 4];
        for action in Action::ALL {
            row[action.to_index()] = self.get(state, action);
        }
        row
    }

    pub fn max_value(&self, state: State) -> f64 {
        self.row(state)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Every action whose value equals the row maximum
    pub fn best_actions(&self, state: State) -> Vec<Action> {
        let max = self.max_value(state);
        Action::ALL
            .into_iter()
            .filter(|a| self.get(state, *a) == max)
            .collect()
    }

    /// Highest-valued action; the lowest index wins a tie
    pub fn argmax(&self, state: State) -> Action {
        let row = self.row(state);
        let mut best = Action::Up;
        for action in Action::ALL {
            if row[action.to_index()] > row[best.to_index()] {
                best = action;
            }
        }
        best
    }

    /// Actions sorted by descending value; ties keep index order
    pub fn actions_by_value(&self, state: State) -> Vec<Action> {
        let row = self.row(state);
        let mut actions = Action::ALL.to_vec();
        actions.sort_by(|a, b| row[b.to_index()].total_cmp(&row[a.to_index()]));
        actions
    }

    /// Raw `(width, height, 4)` array
    pub fn values(&self) -> &Array3<f64> {
        &self.values
    }

    /// `max_a Q[x, y, a]` laid out as `(height, width)` for display
    pub fn state_values(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.height(), self.width()), |(y, x)| {
            self.max_value(State::new(x, y))
        })
    }

    /// `argmax_a Q[x, y, a]` laid out as `(height, width)`
    pub fn greedy_policy(&self) -> Array2<Action> {
        Array2::from_shape_fn((self.height(), self.width()), |(y, x)| {
            self.argmax(State::new(x, y))
        })
    }

    pub fn snapshot(&self) -> QTableSnapshot {
        QTableSnapshot {
            width: self.width(),
            height: self.height(),
            actions: Action::ALL.to_vec(),
            values: self.values.iter().copied().collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}

/// Serializable view of a Q-table
///
/// `values` is row-major over `(x, y, action)`.
#[derive(Debug, Clone, Serialize)]
pub struct QTableSnapshot {
    pub width: usize,
    pub height: usize,
    pub actions: Vec<Action>,
    pub values: Vec<f64>,
}
