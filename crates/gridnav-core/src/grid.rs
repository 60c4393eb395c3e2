//! Grid model: a rectangular occupancy map with a start and a goal cell

use std::collections::BTreeSet;

use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::{GridError, Result};
use crate::types::{Coordinate, Direction};

/// Immutable grid description
///
/// Construction validates the invariants the planner and environment rely
/// on: positive dimensions, endpoints inside the bounds, endpoints and
/// obstacles never overlapping. Nothing mutates a `Grid` after that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    obstacles: BTreeSet<Coordinate>,
    start: Coordinate,
    goal: Coordinate,
}

impl Grid {
    /// Create a new grid, validating dimensions, obstacles and endpoints
    pub fn new(
        width: usize,
        height: usize,
        obstacles: impl IntoIterator<Item = Coordinate>,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let grid = Self {
            width,
            height,
            obstacles: obstacles.into_iter().collect(),
            start,
            goal,
        };

        if let Some(outside) = grid.obstacles.iter().find(|c| !grid.in_bounds(c)) {
            return Err(grid.out_of_bounds("obstacle", *outside));
        }
        grid.check_endpoint("start", start)?;
        grid.check_endpoint("goal", goal)?;

        Ok(grid)
    }

    /// Seeded random layout
    ///
    /// Cells are visited row by row and each becomes an obstacle with
    /// probability `obstacle_prob`. The start and goal cells are cleared
    /// afterwards, so the result is always a valid grid (though not
    /// necessarily a solvable one).
    pub fn random(
        width: usize,
        height: usize,
        obstacle_prob: f64,
        seed: u64,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&obstacle_prob) {
            return Err(GridError::InvalidParameter {
                name: "obstacle_prob",
                value: obstacle_prob,
            });
        }
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut obstacles = BTreeSet::new();
        for y in 0..height {
            for x in 0..width {
                if rng.gen::<f64>() < obstacle_prob {
                    obstacles.insert(Coordinate::new(x, y));
                }
            }
        }
        obstacles.remove(&start);
        obstacles.remove(&goal);

        debug!(
            "Generated {}x{} grid with {} obstacles (p={}, seed={})",
            width,
            height,
            obstacles.len(),
            obstacle_prob,
            seed
        );

        Self::new(width, height, obstacles, start, goal)
    }

    /// Copy of this grid with different endpoints
    pub fn with_endpoints(&self, start: Coordinate, goal: Coordinate) -> Result<Self> {
        self.check_endpoint("start", start)?;
        self.check_endpoint("goal", goal)?;
        Ok(Self {
            start,
            goal,
            ..self.clone()
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn goal(&self) -> Coordinate {
        self.goal
    }

    pub fn obstacles(&self) -> &BTreeSet<Coordinate> {
        &self.obstacles
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn free_cell_count(&self) -> usize {
        self.cell_count() - self.obstacles.len()
    }

    pub fn in_bounds(&self, c: &Coordinate) -> bool {
        c.x < self.width && c.y < self.height
    }

    /// True unless `c` is an obstacle. Bounds are not checked.
    pub fn passable(&self, c: &Coordinate) -> bool {
        !self.obstacles.contains(c)
    }

    pub fn is_obstacle(&self, c: &Coordinate) -> bool {
        self.obstacles.contains(c)
    }

    /// In-bounds passable cells one step away, in `Direction::NEIGHBOR_ORDER`
    pub fn neighbors(&self, c: &Coordinate) -> Vec<Coordinate> {
        Direction::NEIGHBOR_ORDER
            .iter()
            .filter_map(|dir| c.offset(*dir))
            .filter(|n| self.in_bounds(n) && self.passable(n))
            .collect()
    }

    /// Uniform cost of moving between adjacent cells
    pub fn step_cost(&self, _from: &Coordinate, _to: &Coordinate) -> f64 {
        1.0
    }

    /// Occupancy matrix of shape `(height, width)`; `1` marks an obstacle
    pub fn occupancy(&self) -> Array2<u8> {
        let mut grid = Array2::zeros((self.height, self.width));
        for c in &self.obstacles {
            grid[[c.y, c.x]] = 1;
        }
        grid
    }

    /// ASCII picture of the grid with `path` overlaid
    ///
    /// `#` obstacle, `S` start, `G` goal, `*` path, `.` free.
    pub fn render(&self, path: &[Coordinate]) -> String {
        let on_path: BTreeSet<&Coordinate> = path.iter().collect();
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let c = Coordinate::new(x, y);
                let ch = if c == self.start {
                    'S'
                } else if c == self.goal {
                    'G'
                } else if self.is_obstacle(&c) {
                    '#'
                } else if on_path.contains(&c) {
                    '*'
                } else {
                    '.'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    /// Bounds and obstacle check for a cell that an agent or planner will stand on
    pub fn check_endpoint(&self, what: &'static str, c: Coordinate) -> Result<()> {
        if !self.in_bounds(&c) {
            return Err(self.out_of_bounds(what, c));
        }
        if self.is_obstacle(&c) {
            return Err(GridError::Blocked { what, coord: c });
        }
        Ok(())
    }

    fn out_of_bounds(&self, what: &'static str, coord: Coordinate) -> GridError {
        GridError::OutOfBounds {
            what,
            coord,
            width: self.width,
            height: self.height,
        }
    }
}
