//! Routes — directed, costed connections between airports.

use serde::{Deserialize, Serialize};

use super::Airport;

/// How a route is inserted into a flight plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Only `from -> to` is added.
    #[default]
    Directed,
    /// Both `from -> to` and the inverse `to -> from` are added with the same cost.
    Undirected,
}

/// A directed route between two airports.
///
/// Costs are expected to be finite and non-negative; nothing here enforces
/// that; see [`FlightPlan::validate`](crate::graph::FlightPlan::validate).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Departure airport.
    pub from: Airport,
    /// Arrival airport.
    pub to: Airport,
    /// Cost of flying this route.
    pub cost: f64,
}

impl Route {
    /// Create a new route.
    pub fn new(from: impl Into<Airport>, to: impl Into<Airport>, cost: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            cost,
        }
    }

    /// The same route flown the other way, at the same cost.
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            cost: self.cost,
        }
    }
}
