//! Least-transfers search.
//!
//! Best-first search on transfer count that stays breadth-first within each
//! transfer level. Leaving a transfer station costs one transfer, and the
//! frontier is ordered by (transfers, hops, discovery order):
//! paths with fewer transfers are always explored first, and within one
//! transfer level stations are explored in plain breadth-first order. The
//! first entry dequeued at the goal therefore has the fewest transfers and,
//! among those, the fewest edges.
//!
//! Stations are marked visited when dequeued, not when enqueued. A station
//! may sit in the frontier several times before its first dequeue; this
//! costs some redundant entries but keeps the discovery order intact.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::domain::NetworkError;
use crate::network::{Network, StationId};

use super::config::SearchConfig;
use super::route::{Route, TrailId, Trails};

/// Frontier entry. Field order gives the priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    transfers: usize,
    hops: usize,
    seq: u64,
    station: StationId,
    trail: TrailId,
}

/// Find the route from `start` to `goal` with the fewest transfers.
pub fn find_least_transfers(
    network: &Network,
    start: &str,
    goal: &str,
    config: &SearchConfig,
) -> Result<Route<usize>, NetworkError> {
    let start_id = network.id(start)?;
    let goal_id = network.id(goal)?;

    let mut trails = Trails::default();
    let mut visited = vec![false; network.station_count()];
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;
    let mut expanded = 0usize;

    frontier.push(Reverse(Entry {
        transfers: 0,
        hops: 0,
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
                hops = entry.hops,
                transfers = entry.transfers,
                "Least-transfers search complete"
            );
            return Ok(Route::new(network, path, entry.transfers));
        }

        if visited[entry.station] {
            continue;
        }
        visited[entry.station] = true;

        trace!(
            station = %network.station(entry.station),
            transfers = entry.transfers,
            hops = entry.hops,
            "Expanding station"
        );

        let step = usize::from(network.is_transfer_id(entry.station));
        for &neighbor in network.neighbor_ids(entry.station) {
            // A finalized station would be skipped on dequeue anyway
            if visited[neighbor] {
                continue;
            }
            seq += 1;
            frontier.push(Reverse(Entry {
                transfers: entry.transfers + step,
                hops: entry.hops + 1,
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
