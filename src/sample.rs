//! The sample network of airports used by the CLI demo and the tests.

use crate::graph::FlightPlan;
use crate::types::{EdgeKind, Route};

pub const SINGAPORE: &str = "Singapore";
pub const HONG_KONG: &str = "Hong Kong";
pub const TOKYO: &str = "Tokyo";
pub const DETROIT: &str = "Detroit";
pub const WASHINGTON_DC: &str = "Washington DC";
pub const SAN_FRANCISCO: &str = "San Francisco";
pub const AUSTIN: &str = "Austin";
pub const SEATTLE: &str = "Seattle";
pub const ZURICH: &str = "Zurich";
pub const LONDON: &str = "London";

/// Build the sample flight plan: a one-way Zurich -> London route plus
/// thirteen round trips between Asian and North American airports.
pub fn flight_plan() -> FlightPlan {
    let mut plan = FlightPlan::new();
    plan.add(EdgeKind::Directed, Route::new(ZURICH, LONDON, 200.0));
    for (from, to, cost) in [
        (SINGAPORE, HONG_KONG, 300.0),
        (TOKYO, SINGAPORE, 500.0),
        (HONG_KONG, TOKYO, 250.0),
        (HONG_KONG, SAN_FRANCISCO, 600.0),
        (TOKYO, DETROIT, 450.0),
        (TOKYO, WASHINGTON_DC, 300.0),
        (SAN_FRANCISCO, SEATTLE, 218.0),
        (SAN_FRANCISCO, AUSTIN, 297.0),
        (SAN_FRANCISCO, WASHINGTON_DC, 337.0),
        (DETROIT, AUSTIN, 50.0),
        (WASHINGTON_DC, AUSTIN, 292.0),
        (WASHINGTON_DC, SEATTLE, 277.0),
        (WASHINGTON_DC, TOKYO, 300.0),
    ] {
        plan.add(EdgeKind::Undirected, Route::new(from, to, cost));
    }
    plan
}
