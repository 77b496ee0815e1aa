//! Criterion micro-benchmarks for the value-iteration solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prowl_core::{Cell, Direction};
use prowl_grid::Maze;
use prowl_plan::{RewardMap, RewardProfile, TransitionModel, ValueIterationPlanner};
use prowl_sense::Observation;

/// A 20x20 arena with a sparse pillar grid, food in the far corner.
fn arena() -> (Maze, RewardMap) {
    let walls: Vec<Cell> = (0..20)
        .flat_map(|x| (0..20).map(move |y| Cell::new(x, y)))
        .filter(|cell| cell.x % 4 == 2 && cell.y % 4 == 2)
        .collect();
    let maze = Maze::new(20, 20, walls).unwrap();
    let observation = Observation {
        agent: Cell::new(0, 0),
        facing: Direction::Stop,
        food: vec![Cell::new(19, 19)],
        capsules: Vec::new(),
        ghosts: Vec::new(),
    };
    let rewards = RewardMap::build(&maze, &observation, &RewardProfile::default());
    (maze, rewards)
}

/// Benchmark: solve a 20x20 arena from zeroed values.
fn bench_solve_cold_20x20(c: &mut Criterion) {
    let (maze, rewards) = arena();
    let planner = ValueIterationPlanner::new(TransitionModel::new(0.2), 0.9, 1e-4, 500);

    c.bench_function("solve_cold_20x20", |b| {
        b.iter(|| {
            let solution = planner.solve(&maze, &rewards, None);
            black_box(&solution);
        });
    });
}

/// Benchmark: re-solve the same arena from an already-converged table.
///
/// This is the steady-state cost of a tick on an unchanged map.
fn bench_solve_warm_20x20(c: &mut Criterion) {
    let (maze, rewards) = arena();
    let planner = ValueIterationPlanner::new(TransitionModel::new(0.2), 0.9, 1e-4, 500);
    let warm = planner.solve(&maze, &rewards, None);

    c.bench_function("solve_warm_20x20", |b| {
        b.iter(|| {
            let solution = planner.solve(&maze, &rewards, Some(&warm.values));
            black_box(&solution);
        });
    });
}

criterion_group!(benches, bench_solve_cold_20x20, bench_solve_warm_20x20);
criterion_main!(benches);
