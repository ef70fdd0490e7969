//! Network error types.
//!
//! Every routing failure is deterministic: the same query against the same
//! network always fails the same way, so callers never retry.

use super::Station;

/// Errors from building or querying a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The station was never added to the network
    #[error("unknown station: {0}")]
    UnknownStation(Station),

    /// Start and goal are not connected
    #[error("no route found from {from} to {to}")]
    NoRouteFound { from: Station, to: Station },

    /// The search dequeued more frontier entries than allowed
    #[error("search exceeded {limit} expansions")]
    SearchLimitExceeded { limit: usize },

    /// Travel or transfer time outside the accepted range
    #[error("invalid costs: {0}")]
    InvalidCosts(String),

    /// A line description is unusable (e.g., no name or no stations)
    #[error("invalid line: {0}")]
    InvalidLine(String),
}
