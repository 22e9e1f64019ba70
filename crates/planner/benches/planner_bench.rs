//! Benchmarks for greedy truck loading.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use truck_loader_planner::{Crate, GreedyPlanner, Planner, Truck};

fn planner_benchmark(c: &mut Criterion) {
    let uniform: Vec<Crate> = (0..20).map(|i| Crate::new(i, 5, 5, 5)).collect();
    let mixed: Vec<Crate> = (0..40)
        .map(|i| Crate::new(i, 1 + i % 4, 1 + i % 3, 2 + i % 5))
        .collect();

    let truck = Truck::new(20, 20, 25);
    let planner = GreedyPlanner::default_config();

    c.bench_function("plan_20_uniform_crates", |b| {
        b.iter(|| {
            let plan = planner.plan(black_box(&truck), black_box(&uniform));
            black_box(plan)
        })
    });

    c.bench_function("plan_40_mixed_crates", |b| {
        b.iter(|| {
            let plan = planner.plan(black_box(&truck), black_box(&mixed));
            black_box(plan)
        })
    });
}

criterion_group!(benches, planner_benchmark);
criterion_main!(benches);
