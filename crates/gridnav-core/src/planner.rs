//! A* shortest-path planner
//!
//! Classic A* over a 4-connected uniform-cost grid:
//! - Manhattan-distance heuristic (admissible and consistent here, so the
//!   first time the goal is popped its path is optimal)
//! - Min-priority frontier keyed by `f = g + h`
//! - Equal priorities broken by the lexicographic `(x, y)` order of the cell,
//!   making the returned path reproducible across runs

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::error::Result;
use crate::grid::Grid;
use crate::types::Coordinate;

/// Manhattan distance heuristic
pub fn manhattan(a: &Coordinate, b: &Coordinate) -> f64 {
    a.manhattan(b) as f64
}

/// A frontier entry
#[derive(Clone, Debug)]
struct FrontierNode {
    coord: Coordinate,
    g_cost: f64,
    f_cost: f64,
}

impl Eq for FrontierNode {}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of a planning call with search statistics
#[derive(Clone, Debug, PartialEq)]
pub struct PlanResult {
    /// Start to goal inclusive; empty when the goal is unreachable
    pub path: Vec<Coordinate>,
    /// Total path cost (`f64::INFINITY` when no path exists)
    pub cost: f64,
    /// Number of cells popped and expanded
    pub nodes_expanded: usize,
}

impl PlanResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves (path length minus one)
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A* planner borrowing a grid for the duration of its use
pub struct AStarPlanner<'a> {
    grid: &'a Grid,
}

impl<'a> AStarPlanner<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Plan between the grid's own start and goal
    ///
    /// Those endpoints were validated when the grid was built, so this
    /// cannot fail.
    pub fn plan(&self) -> Vec<Coordinate> {
        self.plan_with_stats().path
    }

    /// [`AStarPlanner::plan`] with search statistics
    pub fn plan_with_stats(&self) -> PlanResult {
        self.search(self.grid.start(), self.grid.goal())
    }

    /// Plan between explicit endpoints
    ///
    /// Endpoints outside the grid or on an obstacle are rejected rather than
    /// explored.
    pub fn plan_between(&self, start: Coordinate, goal: Coordinate) -> Result<Vec<Coordinate>> {
        Ok(self.plan_detailed(start, goal)?.path)
    }

    /// Plan between explicit endpoints, returning search statistics too
    pub fn plan_detailed(&self, start: Coordinate, goal: Coordinate) -> Result<PlanResult> {
        self.grid.check_endpoint("start", start)?;
        self.grid.check_endpoint("goal", goal)?;
        Ok(self.search(start, goal))
    }

    fn search(&self, start: Coordinate, goal: Coordinate) -> PlanResult {
        trace!("[AStar] search: start={} goal={}", start, goal);

        let mut frontier = BinaryHeap::new();
        let mut came_from: HashMap<Coordinate, Coordinate> = HashMap::new();
        let mut cost_so_far: HashMap<Coordinate, f64> = HashMap::new();
        let mut nodes_expanded = 0;

        cost_so_far.insert(start, 0.0);
        frontier.push(FrontierNode {
            coord: start,
            g_cost: 0.0,
            f_cost: manhattan(&start, &goal),
        });

        let mut reached = false;
        while let Some(current) = frontier.pop() {
            // Skip stale entries superseded by a cheaper relaxation
            if cost_so_far
                .get(&current.coord)
                .is_some_and(|best| current.g_cost > *best)
            {
                continue;
            }

            if current.coord == goal {
                reached = true;
                break;
            }
            nodes_expanded += 1;

            for next in self.grid.neighbors(&current.coord) {
                let new_cost = current.g_cost + self.grid.step_cost(&current.coord, &next);
                let improves = cost_so_far
                    .get(&next)
                    .map_or(true, |known| new_cost < *known);
                if improves {
                    cost_so_far.insert(next, new_cost);
                    came_from.insert(next, current.coord);
                    frontier.push(FrontierNode {
                        coord: next,
                        g_cost: new_cost,
                        f_cost: new_cost + manhattan(&next, &goal),
                    });
                }
            }
        }

        if !reached {
            debug!(
                "[AStar] no path from {} to {} ({} nodes expanded)",
                start, goal, nodes_expanded
            );
            return PlanResult {
                path: Vec::new(),
                cost: f64::INFINITY,
                nodes_expanded,
            };
        }

        let path = reconstruct(&came_from, start, goal);
        let cost = cost_so_far.get(&goal).copied().unwrap_or(0.0);
        debug!(
            "[AStar] path {} -> {}: {} steps, {} nodes expanded",
            start,
            goal,
            path.len() - 1,
            nodes_expanded
        );

        PlanResult {
            path,
            cost,
            nodes_expanded,
        }
    }
}

/// Walk predecessors back from the goal, then reverse
fn reconstruct(
    came_from: &HashMap<Coordinate, Coordinate>,
    start: Coordinate,
    goal: Coordinate,
) -> Vec<Coordinate> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(prev) => {
                current = *prev;
                path.push(current);
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Shortest path between the grid's start and goal
pub fn astar(grid: &Grid) -> Vec<Coordinate> {
    AStarPlanner::new(grid).plan()
}
