//! Cheapest-cost search (Dijkstra) over a flight plan.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, trace};

use crate::types::{Airport, Route};

use super::FlightPlan;

/// A candidate flight: a route plus the cumulative cost of reaching its
/// destination through it.
struct Flight<'a> {
    route: &'a Route,
    total_cost: f64,
    /// Push order; breaks cost ties so results are deterministic.
    seq: u64,
}

impl PartialEq for Flight<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Flight<'_> {}

impl PartialOrd for Flight<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Flight<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_cost
            .total_cmp(&other.total_cost)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Min-heap of candidate flights keyed by cumulative cost.
struct FlightQueue<'a> {
    heap: BinaryHeap<Reverse<Flight<'a>>>,
    next_seq: u64,
}

impl<'a> FlightQueue<'a> {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn push(&mut self, route: &'a Route, total_cost: f64) {
        self.heap.push(Reverse(Flight {
            route,
            total_cost,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<Flight<'a>> {
        self.heap.pop().map(|Reverse(flight)| flight)
    }
}

/// Cheapest cumulative cost from `start` to every airport reachable from it.
///
/// `start` itself is never in the result. Route costs must be finite and
/// non-negative; with negative costs the returned values are not guaranteed
/// to be minimal. Use [`FlightPlan::validate`] to reject such plans.
pub fn cheapest_costs_from(plan: &FlightPlan, start: &Airport) -> HashMap<Airport, f64> {
    let mut queue = FlightQueue::new();
    let mut visited: HashSet<&Airport> = HashSet::new();
    let mut costs: HashMap<Airport, f64> = HashMap::new();

    for route in plan.routes_from(start) {
        queue.push(route, route.cost);
    }

    while let Some(flight) = queue.pop() {
        let destination = &flight.route.to;
        if visited.contains(destination) {
            continue;
        }
        // First pop of a destination carries its minimal cost.
        if destination != start {
            trace!("settled {} at {}", destination, flight.total_cost);
            costs.insert(destination.clone(), flight.total_cost);
        }
        visited.insert(destination);

        for route in plan.routes_from(destination) {
            if !visited.contains(&route.to) {
                queue.push(route, flight.total_cost + route.cost);
            }
        }
    }

    debug!(
        "cheapest costs from {}: {} reachable airports ({} candidates pushed)",
        start,
        costs.len(),
        queue.next_seq
    );
    costs
}

/// Cheapest cumulative cost from `start` to `destination`.
///
/// `None` when `destination` is unreachable or is `start` itself.
pub fn cheapest_cost(plan: &FlightPlan, start: &Airport, destination: &Airport) -> Option<f64> {
    cheapest_costs_from(plan, start).get(destination).copied()
}

impl FlightPlan {
    /// See [`cheapest_costs_from`].
    pub fn cheapest_costs_from(&self, start: &Airport) -> HashMap<Airport, f64> {
        cheapest_costs_from(self, start)
    }

    /// See [`cheapest_cost`].
    pub fn cheapest_cost(&self, start: &Airport, destination: &Airport) -> Option<f64> {
        cheapest_cost(self, start, destination)
    }
}
