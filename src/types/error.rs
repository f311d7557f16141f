//! Error types for the flight-plan library.

use thiserror::Error;

/// Errors raised while loading or validating a flight plan.
///
/// Queries never fail: a missing route or an unreachable airport is `None`.
#[derive(Error, Debug)]
pub enum FlightError {
    /// A route has a negative cost.
    #[error("Route {from} -> {to} has negative cost {cost}")]
    NegativeCost { from: String, to: String, cost: f64 },

    /// A route cost is NaN or infinite.
    #[error("Route {from} -> {to} has a non-finite cost")]
    NonFiniteCost { from: String, to: String },

    /// An airport name is empty.
    #[error("Airport name must not be empty")]
    EmptyAirportName,

    /// An airport named by the caller does not appear in the flight plan.
    #[error("Unknown airport: {0}")]
    UnknownAirport(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed route file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for flight-plan operations.
pub type FlightResult<T> = Result<T, FlightError>;
