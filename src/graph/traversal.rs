//! Graph traversal algorithms (DFS, BFS).

use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::types::Airport;

use super::FlightPlan;

/// Depth-first traversal from `start`, children before siblings.
///
/// An airport is marked visited before it is explored, and its first
/// unvisited destination is explored completely before the next one is
/// considered. The result is the order airports were marked visited, with
/// `start` first. Uses an explicit stack, so deep graphs cannot overflow.
pub fn depth_first(plan: &FlightPlan, start: &Airport) -> Vec<Airport> {
    let mut visited: HashSet<&Airport> = HashSet::new();
    let mut order: Vec<Airport> = Vec::new();
    // Each frame is an airport and the index of its next route to try.
    let mut stack: Vec<(&Airport, usize)> = Vec::new();

    visited.insert(start);
    order.push(start.clone());
    stack.push((start, 0));

    while let Some(frame) = stack.last_mut() {
        let (current, next) = *frame;
        frame.1 += 1;

        match plan.routes_from(current).get(next) {
            Some(route) => {
                if visited.insert(&route.to) {
                    order.push(route.to.clone());
                    stack.push((&route.to, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!("dfs from {} visited {} airports", start, order.len());
    order
}

/// Breadth-first traversal from `start`, siblings before children.
///
/// Every destination is queued, visited or not; duplicates are dropped when
/// dequeued. The result is the order airports were marked visited.
pub fn breadth_first(plan: &FlightPlan, start: &Airport) -> Vec<Airport> {
    let (order, enqueued) = breadth_first_counted(plan, start);
    debug!(
        "bfs from {} visited {} airports ({} enqueued)",
        start,
        order.len(),
        enqueued
    );
    order
}

/// Breadth-first visit order plus the number of queue pushes, `start` included.
fn breadth_first_counted(plan: &FlightPlan, start: &Airport) -> (Vec<Airport>, usize) {
    let mut visited: HashSet<&Airport> = HashSet::new();
    let mut order: Vec<Airport> = Vec::new();
    let mut queue: VecDeque<&Airport> = VecDeque::new();
    let mut enqueued = 1usize;

    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.clone());
        for route in plan.routes_from(current) {
            queue.push_back(&route.to);
            enqueued += 1;
        }
    }

    (order, enqueued)
}

impl FlightPlan {
    /// Depth-first visit order from `start`. See [`depth_first`].
    pub fn dfs(&self, start: &Airport) -> Vec<Airport> {
        depth_first(self, start)
    }

    /// Breadth-first visit order from `start`. See [`breadth_first`].
    pub fn bfs(&self, start: &Airport) -> Vec<Airport> {
        breadth_first(self, start)
    }
}
