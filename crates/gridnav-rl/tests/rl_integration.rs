//! Integration tests for the learning environment and Q-learning agent
//!
//! These tests train real agents on small grids and compare the learned
//! greedy paths against the A* optimum.

#![allow(clippy::float_cmp)]

use gridnav_core::path::{is_contiguous, path_length, read_path_file, write_path_file};
use gridnav_core::{astar, Coordinate, Grid};
use gridnav_rl::{Action, AgentConfig, EnvConfig, GridEnvironment, QLearningAgent};

/// 5x5 grid with a wall across row 2, gap at x = 2
fn sample_grid() -> Grid {
    let obstacles = (0..5).filter(|x| *x != 2).map(|x| Coordinate::new(x, 2));
    Grid::new(5, 5, obstacles, Coordinate::new(0, 0), Coordinate::new(4, 4)).unwrap()
}

fn trained_agent(grid: Grid, seed: u64, episodes: usize) -> QLearningAgent {
    let env = GridEnvironment::new(grid, EnvConfig::default().with_max_steps(200).with_seed(seed))
        .unwrap();
    let config = AgentConfig {
        alpha: 0.5,
        gamma: 0.95,
        epsilon: 0.1,
        seed,
    };
    let mut agent = QLearningAgent::new(env, config).unwrap();
    agent.train(episodes, 200);
    agent
}

#[test]
fn test_q_learning_learns_reasonable_policy() {
    let grid = sample_grid();
    let optimal = path_length(&astar(&grid));
    assert_eq!(optimal, 8);

    let mut agent = trained_agent(grid.clone(), 123, 800);
    let path = agent.derive_greedy_path(Some(grid.start()), 100).unwrap();

    assert_eq!(path[0], grid.start());
    assert_eq!(*path.last().unwrap(), grid.goal());
    assert!(path_length(&path) <= optimal + 4);
    assert!(is_contiguous(&grid, &path));
}

#[test]
fn test_policy_holds_across_seeds() {
    let grid = sample_grid();
    for seed in [1u64, 7, 42, 2024] {
        let mut agent = trained_agent(grid.clone(), seed, 1500);
        let result = agent
            .derive_greedy_path_detailed(None, 100)
            .unwrap();
        assert!(result.reached_goal, "seed {seed} did not reach the goal");
        assert!(!result.stuck);
        assert!(path_length(&result.path) <= 12, "seed {seed}: {:?}", result.path);
    }
}

#[test]
fn test_goal_neighbour_prefers_goal_action() {
    let grid = sample_grid();
    for seed in [3u64, 99] {
        let mut agent = trained_agent(grid.clone(), seed, 800);
        let path = agent.derive_greedy_path(None, 100).unwrap();
        assert_eq!(*path.last().unwrap(), grid.goal(), "seed {seed}");
        let before_goal = path[path.len() - 2];

        let toward_goal = Action::ALL
            .into_iter()
            .find(|a| before_goal.offset(a.direction()) == Some(grid.goal()))
            .unwrap();
        let table = agent.q_table();
        for other in Action::ALL.into_iter().filter(|a| *a != toward_goal) {
            assert!(
                table.get(before_goal, toward_goal) > table.get(before_goal, other),
                "seed {seed}: {toward_goal} not preferred at {before_goal}"
            );
        }
    }
}

#[test]
fn test_state_values_rise_toward_goal() {
    let agent = trained_agent(sample_grid(), 5, 800);
    let values = agent.q_table().state_values();
    // Row-major (y, x); the best cell next to the goal beats the start cell
    let near_goal = values[[4, 3]].max(values[[3, 4]]);
    assert!(near_goal > values[[0, 0]]);
    assert!(values[[0, 0]] > 0.0);
}

#[test]
fn test_reward_accounting() {
    let mut env = GridEnvironment::new(sample_grid(), EnvConfig::default()).unwrap();

    let blocked = env.step(Action::Left);
    assert_eq!(blocked.state, Coordinate::new(0, 0));
    assert_eq!(blocked.reward, -1.0 + -5.0);
    assert!(!blocked.done);

    env.set_state(Coordinate::new(4, 3)).unwrap();
    let goal = env.step(Action::Down);
    assert_eq!(goal.reward, -1.0 + 100.0);
    assert!(goal.done);
}

#[test]
fn test_custom_rewards() {
    let config = EnvConfig {
        step_penalty: -0.1,
        goal_reward: 10.0,
        invalid_penalty: -2.0,
        max_steps: Some(50),
        seed: 9,
    };
    let mut env = GridEnvironment::new(sample_grid(), config).unwrap();
    assert!((env.step(Action::Up).reward - (-2.1)).abs() < 1e-12);
    assert_eq!(env.max_steps(), 50);
}

#[test]
fn test_truncates_exactly_at_max_steps() {
    let mut env = GridEnvironment::new(sample_grid(), EnvConfig::default().with_max_steps(5))
        .unwrap();
    for i in 1..=5 {
        let outcome = env.step(Action::Left);
        assert_eq!(outcome.done, i == 5, "step {i}");
    }
    assert_eq!(env.steps(), 5);
    assert_eq!(env.state(), Coordinate::new(0, 0));
}

#[test]
fn test_training_stats_improve() {
    let config = EnvConfig::default().with_max_steps(200);
    let env = GridEnvironment::new(sample_grid(), config).unwrap();
    let mut agent = QLearningAgent::new(env, AgentConfig::default()).unwrap();
    let stats = agent.train(800, 200);

    assert_eq!(stats.episodes, 800);
    assert_eq!(stats.episode_rewards.len(), 800);
    assert!(stats.success_rate() > 0.8);
    assert!(stats.mean_length_last(100) < 20.0);
}

#[test]
fn test_untrained_agent_yields_partial_path() {
    let env = GridEnvironment::with_defaults(sample_grid()).unwrap();
    let mut agent = QLearningAgent::new(env, AgentConfig::default()).unwrap();
    let path = agent.derive_greedy_path(None, 3).unwrap();
    assert_eq!(path[0], Coordinate::new(0, 0));
    assert!(path.len() <= 4);
    assert_ne!(*path.last().unwrap(), Coordinate::new(4, 4));
}

#[test]
fn test_greedy_path_from_forced_start() {
    let grid = sample_grid();
    let mut agent = trained_agent(grid.clone(), 123, 800);
    let start = Coordinate::new(2, 1);
    let path = agent.derive_greedy_path(Some(start), 100).unwrap();
    assert_eq!(path[0], start);
    assert!(is_contiguous(&grid, &path));
}

#[test]
fn test_greedy_path_written_as_text() {
    let mut agent = trained_agent(sample_grid(), 123, 800);
    let path = agent.derive_greedy_path(None, 100).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("qlearn_path.txt");
    write_path_file(&file, &path).unwrap();
    assert_eq!(read_path_file(&file).unwrap(), path);

    let json = agent.q_table().to_json().unwrap();
    assert!(json.contains("\"values\""));
}
