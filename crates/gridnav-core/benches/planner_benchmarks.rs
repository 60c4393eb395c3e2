//! Planner Benchmarks
//!
//! - A* on open grids of increasing size
//! - A* on seeded random obstacle fields
//! - Neighbour expansion
//!
//! ## Performance Targets
//! - 100x100 open grid: < 5ms per plan
//! - Neighbour expansion: < 100ns per cell

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use gridnav_core::{astar, Coordinate, Grid};

fn bench_open_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar_open_grid");

    for size in [10usize, 50, 100] {
        let grid = Grid::new(
            size,
            size,
            [],
            Coordinate::new(0, 0),
            Coordinate::new(size - 1, size - 1),
        )
        .expect("valid grid");

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| astar(black_box(grid)));
        });
    }

    group.finish();
}

fn bench_random_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar_random_grid");

    for density in [0.1f64, 0.2, 0.3] {
        let grid = Grid::random(
            64,
            64,
            density,
            42,
            Coordinate::new(0, 0),
            Coordinate::new(63, 63),
        )
        .expect("valid grid");

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{density:.1}")),
            &grid,
            |b, grid| {
                b.iter(|| astar(black_box(grid)));
            },
        );
    }

    group.finish();
}

fn bench_neighbors(c: &mut Criterion) {
    let grid = Grid::random(32, 32, 0.2, 7, Coordinate::new(0, 0), Coordinate::new(31, 31))
        .expect("valid grid");

    c.bench_function("grid_neighbors_full_scan", |b| {
        b.iter(|| {
            let mut total = 0;
            for y in 0..grid.height() {
                for x in 0..grid.width() {
                    total += grid.neighbors(black_box(&Coordinate::new(x, y))).len();
                }
            }
            total
        });
    });
}

criterion_group!(benches, bench_open_grid, bench_random_grid, bench_neighbors);
criterion_main!(benches);
