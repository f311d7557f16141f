//! Reads flight plans from JSON route files.
//!
//! ```json
//! {"routes": [{"from": "A", "to": "B", "cost": 120.0, "kind": "undirected"}]}
//! ```
//!
//! `kind` defaults to `directed`. Files are only ever read.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::graph::FlightPlan;
use crate::types::{EdgeKind, FlightResult, Route};

/// One route entry in a route file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub from: String,
    pub to: String,
    pub cost: f64,
    #[serde(default)]
    pub kind: EdgeKind,
}

/// A route file: an ordered list of route insertions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteFile {
    pub routes: Vec<RouteRecord>,
}

impl RouteFile {
    /// Parse a route file from a JSON string.
    pub fn from_json(json: &str) -> FlightResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a route file from disk.
    pub fn read(path: &Path) -> FlightResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Read a route file and build a validated flight plan from it.
    pub fn read_from_file(path: &Path) -> FlightResult<FlightPlan> {
        let plan = Self::read(path)?.into_flight_plan()?;
        info!(
            "Loaded {} routes between {} airports from {}",
            plan.route_count(),
            plan.airport_count(),
            path.display()
        );
        Ok(plan)
    }

    /// Insert every record, in file order, and validate the result.
    pub fn into_flight_plan(self) -> FlightResult<FlightPlan> {
        let mut plan = FlightPlan::new();
        for record in self.routes {
            plan.add(record.kind, Route::new(record.from, record.to, record.cost));
        }
        plan.validate()?;
        Ok(plan)
    }
}
