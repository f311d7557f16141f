//! Route file input — JSON documents describing a flight plan.

pub mod route_file;

pub use route_file::{RouteFile, RouteRecord};
