//! Route planner.
//!
//! Two searches answer "how do I get from A to B?" over a built
//! [`Network`]: one minimises transfers, the other minimises travel time.
//! Both charge a transfer when *departing* a transfer station, and both
//! price the full path before reducing it to its stops.

mod config;
mod fare;
mod fastest;
mod least_transfers;
mod route;


use chrono::Duration;

use crate::domain::{NetworkError, Station};
use crate::network::Network;

pub use config::SearchConfig;
pub use fare::{calculate_fare, simplify_route};
pub use fastest::find_fastest;
pub use least_transfers::find_least_transfers;
pub use route::Route;

/// Route planner over a network.
///
/// Holds only shared references, so any number of planners can query the
/// same network at once.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// Route with the fewest transfers.
    pub fn least_transfers(&self, start: &str, goal: &str) -> Result<Route<usize>, NetworkError> {
        find_least_transfers(self.network, start, goal, self.config)
    }

    /// Route with the lowest total travel time.
    pub fn fastest(&self, start: &str, goal: &str) -> Result<Route<Duration>, NetworkError> {
        find_fastest(self.network, start, goal, self.config)
    }
}

impl Network {
    /// Route with the fewest transfers, using the default search limits.
    pub fn least_transfers_route(
        &self,
        start: &str,
        goal: &str,
    ) -> Result<Route<usize>, NetworkError> {
        find_least_transfers(self, start, goal, &SearchConfig::default())
    }

    /// Route with the lowest total travel time, using the default search limits.
    pub fn fastest_route(&self, start: &str, goal: &str) -> Result<Route<Duration>, NetworkError> {
        find_fastest(self, start, goal, &SearchConfig::default())
    }

    /// Fare for travelling along a full (not simplified) path.
    pub fn calculate_fare(&self, path: &[Station]) -> u32 {
        calculate_fare(self, path)
    }

    /// Reduce a path to its start, transfer stations and goal.
    pub fn simplify_route(&self, path: &[Station]) -> Vec<Station> {
        simplify_route(self, path)
    }
}
