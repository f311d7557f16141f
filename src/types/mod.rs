//! All data types for the flight-plan library.

pub mod airport;
pub mod error;
pub mod route;

pub use airport::Airport;
pub use error::{FlightError, FlightResult};
pub use route::{EdgeKind, Route};
