//! Core graph structure — airports with ordered outgoing routes.

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::types::{Airport, EdgeKind, FlightError, FlightResult, Route};

/// A directed, weighted graph of airports and routes.
///
/// Outgoing routes keep insertion order, which traversal order depends on.
/// Build it with [`FlightPlan::add`], then share it read-only.
#[derive(Debug, Clone, Default)]
pub struct FlightPlan {
    /// Adjacency: departure airport -> outgoing routes in insertion order.
    adjacency: HashMap<Airport, Vec<Route>>,
    /// Departure airports in the order they first gained a route.
    departures: Vec<Airport>,
    /// Total number of directed routes stored.
    route_count: usize,
}

impl FlightPlan {
    /// Create an empty flight plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route. `Undirected` also inserts the inverse route.
    ///
    /// Append-only: inserting the same route twice yields two parallel routes.
    pub fn add(&mut self, kind: EdgeKind, route: Route) {
        if kind == EdgeKind::Undirected {
            let inverse = route.inverse();
            self.push(route);
            self.push(inverse);
        } else {
            self.push(route);
        }
    }

    fn push(&mut self, route: Route) {
        if !self.adjacency.contains_key(&route.from) {
            self.departures.push(route.from.clone());
        }
        self.adjacency
            .entry(route.from.clone())
            .or_default()
            .push(route);
        self.route_count += 1;
    }

    /// Outgoing routes of an airport, in insertion order.
    pub fn routes_from(&self, airport: &Airport) -> &[Route] {
        self.adjacency
            .get(airport)
            .map(|routes| routes.as_slice())
            .unwrap_or(&[])
    }

    /// Cost of the first direct route `from -> to`, if any.
    ///
    /// One hop only; this is not a path cost.
    pub fn edge_cost(&self, from: &Airport, to: &Airport) -> Option<f64> {
        self.routes_from(from)
            .iter()
            .find(|route| &route.to == to)
            .map(|route| route.cost)
    }

    /// Airports with at least one outgoing route, in first-insertion order.
    pub fn departures(&self) -> &[Airport] {
        &self.departures
    }

    /// Every airport that appears as either endpoint, in first-seen order.
    pub fn airports(&self) -> Vec<&Airport> {
        let mut seen: HashSet<&Airport> = HashSet::new();
        let mut result = Vec::new();
        for route in self.routes() {
            for airport in [&route.from, &route.to] {
                if seen.insert(airport) {
                    result.push(airport);
                }
            }
        }
        result
    }

    /// Look up an airport by name.
    pub fn airport(&self, name: &str) -> Option<&Airport> {
        self.routes()
            .flat_map(|route| [&route.from, &route.to])
            .find(|airport| airport.name() == name)
    }

    /// All stored routes, grouped by departure airport.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.departures
            .iter()
            .flat_map(move |airport| self.routes_from(airport))
    }

    /// Number of directed routes (an undirected insertion counts twice).
    pub fn route_count(&self) -> usize {
        self.route_count
    }

    /// Number of distinct airports.
    pub fn airport_count(&self) -> usize {
        self.airports().len()
    }

    /// True when no route has been added.
    pub fn is_empty(&self) -> bool {
        self.route_count == 0
    }

    /// Check every route for a usable cost and every airport for a name.
    ///
    /// The cheapest-cost search is only correct on finite, non-negative costs.
    pub fn validate(&self) -> FlightResult<()> {
        for route in self.routes() {
            if route.from.name().trim().is_empty() || route.to.name().trim().is_empty() {
                warn!("Rejecting route with an empty airport name");
                return Err(FlightError::EmptyAirportName);
            }
            if !route.cost.is_finite() {
                warn!("Rejecting route {} -> {}: non-finite cost", route.from, route.to);
                return Err(FlightError::NonFiniteCost {
                    from: route.from.name().to_string(),
                    to: route.to.name().to_string(),
                });
            }
            if route.cost < 0.0 {
                warn!(
                    "Rejecting route {} -> {}: negative cost {}",
                    route.from, route.to, route.cost
                );
                return Err(FlightError::NegativeCost {
                    from: route.from.name().to_string(),
                    to: route.to.name().to_string(),
                    cost: route.cost,
                });
            }
        }
        Ok(())
    }
}
