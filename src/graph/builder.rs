//! Fluent API for building FlightPlan instances.

use crate::types::{Airport, EdgeKind, FlightResult, Route};

use super::FlightPlan;

/// Fluent builder for constructing a validated FlightPlan.
pub struct FlightPlanBuilder {
    plan: FlightPlan,
}

impl FlightPlanBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            plan: FlightPlan::new(),
        }
    }

    /// Add a one-way route.
    pub fn route(
        &mut self,
        from: impl Into<Airport>,
        to: impl Into<Airport>,
        cost: f64,
    ) -> &mut Self {
        self.plan
            .add(EdgeKind::Directed, Route::new(from, to, cost));
        self
    }

    /// Add a route flown both ways at the same cost.
    pub fn round_trip(
        &mut self,
        from: impl Into<Airport>,
        to: impl Into<Airport>,
        cost: f64,
    ) -> &mut Self {
        self.plan
            .add(EdgeKind::Undirected, Route::new(from, to, cost));
        self
    }

    /// Validate and return the finished FlightPlan.
    pub fn build(self) -> FlightResult<FlightPlan> {
        self.plan.validate()?;
        Ok(self.plan)
    }
}

impl Default for FlightPlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}
