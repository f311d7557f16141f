//! Command implementations behind the `flightplan` binary.

pub mod commands;
