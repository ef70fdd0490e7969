//! Fare calculation and route simplification.
//!
//! Both operate on the full path, so they must run before a route is
//! reduced to its stops.

use crate::domain::Station;
use crate::network::Network;

/// Count transfer stations on a path, ignoring the first station.
fn transfers_after_start(network: &Network, path: &[Station]) -> usize {
    path.iter()
        .skip(1)
        .filter(|s| network.is_transfer_station(s.as_str()))
        .count()
}

/// Fare for travelling along `path`.
///
/// The base fare plus the transfer fare for every transfer station after
/// the first, goal included.
pub fn calculate_fare(network: &Network, path: &[Station]) -> u32 {
    network.costs().fare(transfers_after_start(network, path))
}

/// Reduce a path to its start, the transfer stations it passes, and its goal.
///
/// A goal that is itself a transfer station appears once, not twice.
pub fn simplify_route(network: &Network, path: &[Station]) -> Vec<Station> {
    let Some((start, rest)) = path.split_first() else {
        return Vec::new();
    };

    let mut stops = vec![start.clone()];
    stops.extend(
        rest.iter()
            .filter(|s| network.is_transfer_station(s.as_str()))
            .cloned(),
    );

    if let Some(goal) = rest.last() {
        if stops.last() != Some(goal) {
            stops.push(goal.clone());
        }
    }
    stops
}
