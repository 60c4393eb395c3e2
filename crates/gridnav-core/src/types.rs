//! Common types used throughout gridnav

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// A grid cell, addressed as (column, row)
///
/// The derived ordering is lexicographic by `(x, y)`; the planner relies on
/// it to break ties between frontier entries of equal priority.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance `|dx| + |dy|`
    pub fn manhattan(&self, other: &Coordinate) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Apply a signed offset; `None` when either component would drop below zero
    pub fn translate(&self, dx: isize, dy: isize) -> Option<Coordinate> {
        Some(Coordinate {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// The neighbouring cell in `direction`, if it has non-negative components
    pub fn offset(&self, direction: Direction) -> Option<Coordinate> {
        let (dx, dy) = direction.delta();
        self.translate(dx, dy)
    }

    /// True if `other` is exactly one axis-aligned step away
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| GridError::Parse(format!("expected \"x,y\", got {s:?}")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| GridError::Parse(format!("bad coordinate component {part:?}: {e}")))
        };
        Ok(Coordinate::new(parse(x)?, parse(y)?))
    }
}

/// The four axis-aligned unit moves. Rows grow southwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Fixed expansion order for `Grid::neighbors`
    pub const NEIGHBOR_ORDER: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    /// `(dx, dy)` unit vector
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::East => write!(f, "east"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
        }
    }
}
