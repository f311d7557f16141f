//! Criterion benchmarks for flight-plan.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use flight_plan::{Airport, EdgeKind, FlightPlan, Route};

/// Build a random plan with `airport_count` airports and roughly
/// `routes_per_airport` round trips leaving each one.
fn make_plan(airport_count: usize, routes_per_airport: usize) -> FlightPlan {
    let mut rng = rand::thread_rng();
    let mut plan = FlightPlan::new();
    for i in 0..airport_count {
        for _ in 0..routes_per_airport {
            let target = rng.gen_range(0..airport_count);
            if target != i {
                plan.add(
                    EdgeKind::Undirected,
                    Route::new(
                        format!("apt_{}", i),
                        format!("apt_{}", target),
                        rng.gen_range(1.0..1000.0),
                    ),
                );
            }
        }
    }
    plan
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_1k_airports", |b| b.iter(|| make_plan(1_000, 5)));
}

fn bench_traversal(c: &mut Criterion) {
    let plan = make_plan(10_000, 5);
    let start = Airport::new("apt_0");

    c.bench_function("dfs_10k", |b| b.iter(|| plan.dfs(black_box(&start))));
    c.bench_function("bfs_10k", |b| b.iter(|| plan.bfs(black_box(&start))));
}

fn bench_search(c: &mut Criterion) {
    let plan = make_plan(10_000, 5);
    let start = Airport::new("apt_0");
    let destination = Airport::new("apt_9999");

    c.bench_function("cheapest_costs_10k", |b| {
        b.iter(|| plan.cheapest_costs_from(black_box(&start)))
    });
    c.bench_function("cheapest_cost_10k", |b| {
        b.iter(|| plan.cheapest_cost(black_box(&start), black_box(&destination)))
    });
    c.bench_function("edge_cost_10k", |b| {
        b.iter(|| plan.edge_cost(black_box(&start), black_box(&destination)))
    });
}

criterion_group!(benches, bench_build, bench_traversal, bench_search);
criterion_main!(benches);
