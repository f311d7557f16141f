//! Phase 2 tests: depth-first and breadth-first traversal.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use flight_plan::sample::{
    self, AUSTIN, DETROIT, HONG_KONG, LONDON, SAN_FRANCISCO, SEATTLE, SINGAPORE, TOKYO,
    WASHINGTON_DC, ZURICH,
};
use flight_plan::{Airport, EdgeKind, FlightPlan, Route};

fn airports(names: &[&str]) -> Vec<Airport> {
    names.iter().map(|&n| Airport::new(n)).collect()
}

fn random_plan(rng: &mut StdRng, nodes: u32, routes: usize) -> FlightPlan {
    let mut plan = FlightPlan::new();
    for _ in 0..routes {
        let from = rng.gen_range(0..nodes);
        let to = rng.gen_range(0..nodes);
        let kind = if rng.gen_bool(0.5) {
            EdgeKind::Directed
        } else {
            EdgeKind::Undirected
        };
        plan.add(kind, Route::new(from.to_string(), to.to_string(), 1.0));
    }
    plan
}

/// Fixed-point reachability, independent of either traversal.
fn reachable(plan: &FlightPlan, start: &Airport) -> HashSet<Airport> {
    let mut set: HashSet<Airport> = HashSet::new();
    set.insert(start.clone());
    loop {
        let before = set.len();
        let next: Vec<Airport> = plan
            .routes()
            .filter(|r| set.contains(&r.from))
            .map(|r| r.to.clone())
            .collect();
        set.extend(next);
        if set.len() == before {
            return set;
        }
    }
}

// ==================== Sample network ====================

#[test]
fn test_dfs_lists_children_before_siblings() {
    let plan = sample::flight_plan();
    assert_eq!(
        plan.dfs(&Airport::new(SINGAPORE)),
        airports(&[
            SINGAPORE,
            HONG_KONG,
            TOKYO,
            DETROIT,
            AUSTIN,
            SAN_FRANCISCO,
            SEATTLE,
            WASHINGTON_DC
        ])
    );
}

#[test]
fn test_bfs_lists_siblings_before_children() {
    let plan = sample::flight_plan();
    assert_eq!(
        plan.bfs(&Airport::new(SINGAPORE)),
        airports(&[
            SINGAPORE,
            HONG_KONG,
            TOKYO,
            SAN_FRANCISCO,
            DETROIT,
            WASHINGTON_DC,
            SEATTLE,
            AUSTIN
        ])
    );
}

#[test]
fn test_traversal_stays_in_component() {
    let plan = sample::flight_plan();
    assert_eq!(plan.dfs(&Airport::new(ZURICH)), airports(&[ZURICH, LONDON]));
    assert_eq!(plan.bfs(&Airport::new(ZURICH)), airports(&[ZURICH, LONDON]));
    assert_eq!(plan.dfs(&Airport::new(LONDON)), airports(&[LONDON]));
    assert_eq!(plan.bfs(&Airport::new(LONDON)), airports(&[LONDON]));
}

#[test]
fn test_traversals_are_idempotent() {
    let plan = sample::flight_plan();
    let start = Airport::new(WASHINGTON_DC);
    assert_eq!(plan.dfs(&start), plan.dfs(&start));
    assert_eq!(plan.bfs(&start), plan.bfs(&start));
}

// ==================== Properties ====================

#[test]
fn test_repeated_destinations_appear_once() {
    // A queues B and C; B queues C again. C must appear once, after B.
    let mut plan = FlightPlan::new();
    plan.add(EdgeKind::Directed, Route::new("A", "B", 1.0));
    plan.add(EdgeKind::Directed, Route::new("A", "C", 1.0));
    plan.add(EdgeKind::Directed, Route::new("B", "C", 1.0));
    plan.add(EdgeKind::Directed, Route::new("B", "D", 1.0));
    plan.add(EdgeKind::Directed, Route::new("C", "B", 1.0));
    assert_eq!(plan.bfs(&Airport::new("A")), airports(&["A", "B", "C", "D"]));
    assert_eq!(plan.dfs(&Airport::new("A")), airports(&["A", "B", "C", "D"]));
}

#[test]
fn test_random_graphs_visit_exactly_the_reachable_set() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let plan = random_plan(&mut rng, 8, 10);
        let start = Airport::new(rng.gen_range(0..8u32).to_string());
        let expected = reachable(&plan, &start);

        for order in [plan.dfs(&start), plan.bfs(&start)] {
            assert_eq!(order.first(), Some(&start));
            let unique: HashSet<Airport> = order.iter().cloned().collect();
            assert_eq!(unique.len(), order.len(), "duplicate in {:?}", order);
            assert_eq!(unique, expected);
        }
    }
}

#[test]
fn test_concurrent_readers_agree() {
    let plan = sample::flight_plan();
    let start = Airport::new(SINGAPORE);
    let expected = plan.bfs(&start);

    let (plan, start) = (&plan, &start);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(move || plan.bfs(start))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
