//! In-memory graph operations — the core data structure and its queries.

pub mod builder;
pub mod flight_plan;
pub mod search;
pub mod traversal;

pub use builder::FlightPlanBuilder;
pub use flight_plan::FlightPlan;
pub use search::{cheapest_cost, cheapest_costs_from};
pub use traversal::{breadth_first, depth_first};
