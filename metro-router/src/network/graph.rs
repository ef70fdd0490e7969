//! The immutable station graph.

use std::collections::HashMap;

use crate::domain::{Line, NetworkError, Station};

use super::costs::CostModel;

/// Dense index of a station inside one network.
pub(crate) type StationId = usize;

/// Transfer stations recorded for one line.
#[derive(Debug, Clone)]
pub(crate) struct LineTransfers {
    pub(crate) line: Line,
    pub(crate) transfers: Vec<StationId>,
}

/// A built, read-only transit network.
///
/// Created by [`NetworkBuilder::build`](super::NetworkBuilder::build).
/// Nothing here is mutable, so a network can be shared between threads and
/// queried concurrently without locking.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) index: HashMap<Station, StationId>,
    pub(crate) stations: Vec<Station>,
    /// Neighbours of each station, in connection order, without duplicates.
    pub(crate) adjacency: Vec<Vec<StationId>>,
    pub(crate) lines: Vec<LineTransfers>,
    /// Precomputed from `lines`; true if the station is a transfer on any line.
    pub(crate) is_transfer: Vec<bool>,
    pub(crate) costs: CostModel,
}

impl Network {
    /// Returns true if the station is part of the network.
    pub fn contains(&self, station: &str) -> bool {
        self.index.contains_key(station)
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// All stations, in registration order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.stations.iter()
    }

    /// All lines, in registration order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> + '_ {
        self.lines.iter().map(|l| &l.line)
    }

    /// The cost model used for routing and fares.
    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    /// Stations directly connected to `station`.
    pub fn neighbors(&self, station: &str) -> Result<Vec<&Station>, NetworkError> {
        let id = self.id(station)?;
        Ok(self.adjacency[id]
            .iter()
            .map(|&n| &self.stations[n])
            .collect())
    }

    /// Returns true if the station is a transfer point on any line.
    ///
    /// Unknown stations are not transfer stations.
    pub fn is_transfer_station(&self, station: &str) -> bool {
        self.index
            .get(station)
            .is_some_and(|&id| self.is_transfer[id])
    }

    /// Transfer stations recorded for `line`, in the order they were added.
    ///
    /// Returns an empty list for unknown lines.
    pub fn transfers_on(&self, line: &str) -> Vec<&Station> {
        self.lines
            .iter()
            .find(|l| l.line.as_str() == line)
            .map(|l| l.transfers.iter().map(|&id| &self.stations[id]).collect())
            .unwrap_or_default()
    }

    pub(crate) fn id(&self, station: &str) -> Result<StationId, NetworkError> {
        self.index
            .get(station)
            .copied()
            .ok_or_else(|| NetworkError::UnknownStation(Station::new(station)))
    }

    pub(crate) fn station(&self, id: StationId) -> &Station {
        &self.stations[id]
    }

    pub(crate) fn neighbor_ids(&self, id: StationId) -> &[StationId] {
        &self.adjacency[id]
    }

    pub(crate) fn is_transfer_id(&self, id: StationId) -> bool {
        self.is_transfer[id]
    }
}


#[cfg(test)]
mod proptests {
    use crate::network::NetworkBuilder;
    use proptest::prelude::*;

    use super::*;

    /// Random edge list over stations "S0".."S7".
    fn edges_strategy() -> impl Strategy<Value = Vec<(u8, u8)>> {
        prop::collection::vec((0u8..8, 0u8..8), 0..20)
    }

    fn build(edges: &[(u8, u8)], repeat: usize) -> Network {
        let mut builder = NetworkBuilder::new();
        for i in 0..8 {
            builder.add_station("L", format!("S{i}"), i % 3 == 0);
        }
        for _ in 0..repeat {
            for (a, b) in edges {
                builder
                    .add_connection(&format!("S{a}"), &format!("S{b}"))
                    .unwrap();
            }
        }
        builder.build()
    }

    proptest! {
        /// Every connection is visible from both ends
        #[test]
        fn symmetric(edges in edges_strategy()) {
            let network = build(&edges, 1);
            for (a, b) in &edges {
                if a == b {
                    continue;
                }
                let (a, b) = (format!("S{a}"), format!("S{b}"));
                prop_assert!(network.neighbors(&a).unwrap().iter().any(|s| s.as_str() == b));
                prop_assert!(network.neighbors(&b).unwrap().iter().any(|s| s.as_str() == a));
            }
        }

        /// Adding every connection twice gives the same neighbour lists
        #[test]
        fn idempotent(edges in edges_strategy()) {
            let once = build(&edges, 1);
            let twice = build(&edges, 2);
            for station in once.stations() {
                prop_assert_eq!(
                    once.neighbors(station.as_str()).unwrap(),
                    twice.neighbors(station.as_str()).unwrap()
                );
            }
        }
    }
}
