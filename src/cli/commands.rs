//! CLI command implementations.
//!
//! Every command renders into the given writer so output can be captured.

use std::io::Write;

use crate::graph::FlightPlan;
use crate::types::{Airport, FlightError, FlightResult};

/// Find an airport in the plan by name.
pub fn resolve(plan: &FlightPlan, name: &str) -> FlightResult<Airport> {
    plan.airport(name)
        .cloned()
        .ok_or_else(|| FlightError::UnknownAirport(name.to_string()))
}

fn names(airports: &[Airport]) -> Vec<&str> {
    airports.iter().map(|a| a.name()).collect()
}

/// List every departure airport with its destinations.
pub fn cmd_info(plan: &FlightPlan, json: bool, out: &mut impl Write) -> FlightResult<()> {
    if json {
        let departures: Vec<serde_json::Value> = plan
            .departures()
            .iter()
            .map(|airport| {
                serde_json::json!({"from": airport, "routes": plan.routes_from(airport)})
            })
            .collect();
        let info = serde_json::json!({
            "airports": plan.airport_count(),
            "routes": plan.route_count(),
            "departures": departures,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        writeln!(out, "Airports: {}", plan.airport_count())?;
        writeln!(out, "Routes: {}", plan.route_count())?;
        for airport in plan.departures() {
            let targets: Vec<&str> = plan
                .routes_from(airport)
                .iter()
                .map(|r| r.to.name())
                .collect();
            writeln!(out, "{} --> [{}]", airport, targets.join(", "))?;
        }
    }
    Ok(())
}

/// Show the cost of the direct route between two airports.
pub fn cmd_cost(
    plan: &FlightPlan,
    from: &str,
    to: &str,
    json: bool,
    out: &mut impl Write,
) -> FlightResult<()> {
    let from = resolve(plan, from)?;
    let to = resolve(plan, to)?;
    let cost = plan.edge_cost(&from, &to);

    if json {
        writeln!(
            out,
            "{}",
            serde_json::json!({"from": from, "to": to, "cost": cost})
        )?;
    } else {
        match cost {
            Some(cost) => writeln!(out, "{} -> {}: {}", from, to, cost)?,
            None => writeln!(out, "No direct flight found from {} to {}", from, to)?,
        }
    }
    Ok(())
}

/// Print the depth-first visit order from an airport.
pub fn cmd_dfs(plan: &FlightPlan, start: &str, json: bool, out: &mut impl Write) -> FlightResult<()> {
    let start = resolve(plan, start)?;
    let order = plan.dfs(&start);
    print_order("Depth-first", &start, &order, json, out)
}

/// Print the breadth-first visit order from an airport.
pub fn cmd_bfs(plan: &FlightPlan, start: &str, json: bool, out: &mut impl Write) -> FlightResult<()> {
    let start = resolve(plan, start)?;
    let order = plan.bfs(&start);
    print_order("Breadth-first", &start, &order, json, out)
}

fn print_order(
    label: &str,
    start: &Airport,
    order: &[Airport],
    json: bool,
    out: &mut impl Write,
) -> FlightResult<()> {
    if json {
        writeln!(
            out,
            "{}",
            serde_json::json!({"start": start, "order": order})
        )?;
    } else {
        writeln!(out, "{} from {}:", label, start)?;
        writeln!(out, "[{}]", names(order).join(", "))?;
    }
    Ok(())
}

/// Print the cheapest cost to one airport, or to every reachable airport.
pub fn cmd_cheapest(
    plan: &FlightPlan,
    from: &str,
    to: Option<&str>,
    json: bool,
    out: &mut impl Write,
) -> FlightResult<()> {
    let from = resolve(plan, from)?;

    if let Some(to) = to {
        let to = resolve(plan, to)?;
        let cost = plan.cheapest_cost(&from, &to);
        if json {
            writeln!(
                out,
                "{}",
                serde_json::json!({"from": from, "to": to, "cost": cost})
            )?;
        } else {
            match cost {
                Some(cost) => writeln!(out, "The cheapest flight from {} to {} costs: {}", from, to, cost)?,
                None => writeln!(out, "Airport {} not reachable from {}", to, from)?,
            }
        }
        return Ok(());
    }

    let mut costs: Vec<(Airport, f64)> = plan.cheapest_costs_from(&from).into_iter().collect();
    costs.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    if json {
        let entries: Vec<serde_json::Value> = costs
            .iter()
            .map(|(airport, cost)| serde_json::json!({"airport": airport, "cost": cost}))
            .collect();
        writeln!(
            out,
            "{}",
            serde_json::json!({"from": from, "reachable": entries})
        )?;
    } else {
        writeln!(out, "Airports reachable from {}:", from)?;
        if costs.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for (airport, cost) in &costs {
            writeln!(out, "  {} -> {}", airport, cost)?;
        }
    }
    Ok(())
}
