//! Airports — the nodes of a flight plan.

use std::fmt;

use serde::Serialize;

/// A named airport. Two airports with the same name are the same airport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Airport {
    name: String,
}

impl Airport {
    /// Create an airport with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The airport's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Airport {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Airport {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
