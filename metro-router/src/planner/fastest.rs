//! Fastest-route search.
//!
//! Dijkstra over the station graph. Riding an edge away from a station
//! costs the transfer time if that station is a transfer station and the
//! travel time otherwise; the same departure rule the least-transfers
//! search uses to count transfers.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use chrono::Duration;
use tracing::{debug, trace};

use crate::domain::NetworkError;
use crate::network::{Network, StationId};

use super::config::SearchConfig;
use super::route::{Route, TrailId, Trails};

/// Frontier entry. Equal costs dequeue in discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    cost: Duration,
    seq: u64,
    station: StationId,
    trail: TrailId,
}

/// Cost of riding from `from` to any neighbour.
fn edge_cost(network: &Network, from: StationId) -> Duration {
    network
        .costs()
        .departure_cost(network.is_transfer_id(from))
}

/// Find the route from `start` to `goal` with the lowest total time.
pub fn find_fastest(
    network: &Network,
    start: &str,
    goal: &str,
    config: &SearchConfig,
) -> Result<Route<Duration>, NetworkError> {
    let start_id = network.id(start)?;
    let goal_id = network.id(goal)?;

    let mut trails = Trails::default();
    // Lowest cost each station was finalized with
    let mut settled: Vec<Option<Duration>> = vec![None; network.station_count()];
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;
    let mut expanded = 0usize;

    frontier.push(Reverse(Entry {
        cost: Duration::zero(),
        seq,
        station: start_id,
        trail: trails.start(start_id),
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        expanded += 1;
        if expanded > config.max_expansions {
            return Err(NetworkError::SearchLimitExceeded {
                limit: config.max_expansions,
            });
        }

        if entry.station == goal_id {
            let path = trails.path(network, entry.trail);
            debug!(
                from = start,
                to = goal,
                expanded,
                hops = path.len() - 1,
                minutes = entry.cost.num_minutes(),
                "Fastest search complete"
            );
            return Ok(Route::new(network, path, entry.cost));
        }

        if settled[entry.station].is_some_and(|best| best <= entry.cost) {
            continue;
        }
        settled[entry.station] = Some(entry.cost);

        trace!(
            station = %network.station(entry.station),
            minutes = entry.cost.num_minutes(),
            "Expanding station"
        );

        let Some(cost) = entry.cost.checked_add(&edge_cost(network, entry.station)) else {
            return Err(NetworkError::InvalidCosts(format!(
                "route time from {start} overflows"
            )));
        };
        for &neighbor in network.neighbor_ids(entry.station) {
            if settled[neighbor].is_some_and(|best| best <= cost) {
                continue;
            }
            seq += 1;
            frontier.push(Reverse(Entry {
                cost,
                seq,
                station: neighbor,
                trail: trails.extend(entry.trail, neighbor),
            }));
        }
    }

    debug!(from = start, to = goal, expanded, "No route found");
    Err(NetworkError::NoRouteFound {
        from: network.station(start_id).clone(),
        to: network.station(goal_id).clone(),
    })
}
