//! Flight plan — a weighted graph of airports and routes.
//!
//! Routes are stored per departure airport in insertion order. A built plan is
//! queried read-only with depth-first and breadth-first traversal, direct route
//! lookup, and cheapest-cost search (Dijkstra).

pub mod cli;
pub mod format;
pub mod graph;
pub mod sample;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{RouteFile, RouteRecord};
pub use graph::{
    breadth_first, cheapest_cost, cheapest_costs_from, depth_first, FlightPlan, FlightPlanBuilder,
};
pub use types::{Airport, EdgeKind, FlightError, FlightResult, Route};
