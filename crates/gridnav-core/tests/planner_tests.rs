//! Integration tests for the A* planner
//! Complements the inline unit tests in src/planner.rs

use std::collections::{HashMap, VecDeque};

use gridnav_core::path::{is_contiguous, path_length};
use gridnav_core::{astar, AStarPlanner, Coordinate, Grid};
use proptest::prelude::*;

/// Breadth-first distance, used as an independent optimality oracle
fn bfs_distance(grid: &Grid) -> Option<usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(grid.start(), 0usize);
    queue.push_back(grid.start());
    while let Some(c) = queue.pop_front() {
        if c == grid.goal() {
            return dist.get(&c).copied();
        }
        let d = dist[&c];
        for n in grid.neighbors(&c) {
            if !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

fn sample_grid() -> Grid {
    let obstacles = (0..5).filter(|x| *x != 2).map(|x| Coordinate::new(x, 2));
    Grid::new(5, 5, obstacles, Coordinate::new(0, 0), Coordinate::new(4, 4)).unwrap()
}

#[test]
fn test_sample_grid_end_to_end() {
    let grid = sample_grid();
    let path = astar(&grid);

    assert_eq!(path[0], Coordinate::new(0, 0));
    assert_eq!(*path.last().unwrap(), Coordinate::new(4, 4));
    assert_eq!(path_length(&path), 8);
    assert!(is_contiguous(&grid, &path));
}

#[test]
fn test_sample_grid_exact_route_is_stable() {
    // Equal-priority ties resolve by (x, y) order, so the route is fixed
    let grid = sample_grid();
    let first = astar(&grid);
    let second = AStarPlanner::new(&grid).plan();
    assert_eq!(first, second);
    assert_eq!(first[4], Coordinate::new(2, 2));
}

#[test]
fn test_detour_around_long_wall() {
    // Wall across x = 2 except at the bottom row
    let obstacles = (0..6).map(|y| Coordinate::new(2, y));
    let grid = Grid::new(5, 7, obstacles, Coordinate::new(0, 0), Coordinate::new(4, 0)).unwrap();
    let path = astar(&grid);

    assert_eq!(path_length(&path), 16);
    assert!(path.contains(&Coordinate::new(2, 6)));
    assert!(is_contiguous(&grid, &path));
}

#[test]
fn test_enclosed_goal_in_middle() {
    let goal = Coordinate::new(2, 2);
    let ring = [
        Coordinate::new(1, 2),
        Coordinate::new(3, 2),
        Coordinate::new(2, 1),
        Coordinate::new(2, 3),
    ];
    let grid = Grid::new(5, 5, ring, Coordinate::new(0, 0), goal).unwrap();
    assert!(astar(&grid).is_empty());
    assert_eq!(bfs_distance(&grid), None);
}

#[test]
fn test_single_row_grid() {
    let grid = Grid::new(6, 1, [], Coordinate::new(5, 0), Coordinate::new(0, 0)).unwrap();
    let path = astar(&grid);
    assert_eq!(
        path,
        (0..6).rev().map(|x| Coordinate::new(x, 0)).collect::<Vec<_>>()
    );
}

proptest! {
    #[test]
    fn open_grid_path_equals_manhattan(
        width in 1usize..20,
        height in 1usize..20,
        sx in 0usize..20, sy in 0usize..20,
        gx in 0usize..20, gy in 0usize..20,
    ) {
        let start = Coordinate::new(sx % width, sy % height);
        let goal = Coordinate::new(gx % width, gy % height);
        let grid = Grid::new(width, height, [], start, goal).unwrap();
        let path = astar(&grid);

        prop_assert_eq!(path_length(&path), start.manhattan(&goal));
        prop_assert!(is_contiguous(&grid, &path));
    }

    #[test]
    fn random_grid_path_is_optimal_and_contiguous(
        width in 2usize..16,
        height in 2usize..16,
        prob in 0.0f64..0.45,
        seed in any::<u64>(),
    ) {
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(width - 1, height - 1);
        let grid = Grid::random(width, height, prob, seed, start, goal).unwrap();
        let path = astar(&grid);

        match bfs_distance(&grid) {
            Some(d) => {
                prop_assert_eq!(path.first(), Some(&start));
                prop_assert_eq!(path.last(), Some(&goal));
                prop_assert_eq!(path_length(&path), d);
                prop_assert!(path_length(&path) >= start.manhattan(&goal));
                prop_assert!(is_contiguous(&grid, &path));
            }
            None => prop_assert!(path.is_empty()),
        }
    }

    #[test]
    fn planner_is_deterministic(seed in any::<u64>()) {
        let grid = Grid::random(12, 12, 0.25, seed, Coordinate::new(0, 0), Coordinate::new(11, 11))
            .unwrap();
        prop_assert_eq!(astar(&grid), astar(&grid));
    }
}
