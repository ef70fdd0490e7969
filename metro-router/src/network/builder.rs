//! Mutable setup phase of a network.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{Line, NetworkError, Station};

use super::costs::CostModel;
use super::graph::{LineTransfers, Network, StationId};

/// Builder for a [`Network`].
///
/// Stations and connections are added here; [`NetworkBuilder::build`]
/// freezes the result. There is no way to modify a built network.
///
/// # Example
///
/// ```
/// use metro_router::network::NetworkBuilder;
///
/// let mut builder = NetworkBuilder::new();
/// builder.add_station("L1", "A", false);
/// builder.add_station("L1", "B", true);
/// builder.add_connection("A", "B").unwrap();
///
/// // Both endpoints must be registered first
/// assert!(builder.add_connection("A", "Z").is_err());
///
/// let network = builder.build();
/// assert!(network.is_transfer_station("B"));
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    index: HashMap<Station, StationId>,
    stations: Vec<Station>,
    adjacency: Vec<Vec<StationId>>,
    line_index: HashMap<Line, usize>,
    lines: Vec<LineTransfers>,
    costs: CostModel,
}

impl NetworkBuilder {
    /// Create an empty builder with the default cost model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given cost model for the built network.
    ///
    /// Fails with [`NetworkError::InvalidCosts`] for negative or oversized
    /// times.
    pub fn with_costs(mut self, costs: CostModel) -> Result<Self, NetworkError> {
        self.set_costs(costs)?;
        Ok(self)
    }

    /// Replace the cost model, rejecting it as [`NetworkBuilder::with_costs`] does.
    pub fn set_costs(&mut self, costs: CostModel) -> Result<&mut Self, NetworkError> {
        costs.validate()?;
        self.costs = costs;
        Ok(self)
    }

    /// Register a station served by `line`.
    ///
    /// Adding a station twice leaves its connections untouched. When
    /// `is_transfer` is set, the station is recorded as a transfer point of
    /// `line` (once per line).
    pub fn add_station(
        &mut self,
        line: impl Into<Line>,
        station: impl Into<Station>,
        is_transfer: bool,
    ) -> &mut Self {
        let id = self.intern(station.into());
        let line_idx = self.intern_line(line.into());

        if is_transfer {
            let transfers = &mut self.lines[line_idx].transfers;
            if !transfers.contains(&id) {
                transfers.push(id);
            }
        }
        self
    }

    /// Connect two registered stations in both directions.
    ///
    /// Repeating a connection does not create a second edge, and connecting a
    /// station to itself is ignored.
    pub fn add_connection(&mut self, a: &str, b: &str) -> Result<&mut Self, NetworkError> {
        let a = self.id(a)?;
        let b = self.id(b)?;

        if a != b {
            if !self.adjacency[a].contains(&b) {
                self.adjacency[a].push(b);
            }
            if !self.adjacency[b].contains(&a) {
                self.adjacency[b].push(a);
            }
        }
        Ok(self)
    }

    /// Register a whole line: every station in order, consecutive stations
    /// connected, and those named in `transfers` flagged as transfer points.
    pub fn add_line<S: AsRef<str>>(
        &mut self,
        line: impl Into<Line>,
        stations: &[S],
        transfers: &HashSet<Station>,
    ) -> Result<&mut Self, NetworkError> {
        let line = line.into();
        if line.as_str().is_empty() {
            return Err(NetworkError::InvalidLine("line name is empty".into()));
        }
        if stations.is_empty() {
            return Err(NetworkError::InvalidLine(format!(
                "line {line} has no stations"
            )));
        }

        for (i, station) in stations.iter().enumerate() {
            let name = station.as_ref();
            self.add_station(line.clone(), name, transfers.contains(name));
            if i > 0 {
                self.add_connection(stations[i - 1].as_ref(), name)?;
            }
        }
        Ok(self)
    }

    /// Returns true if the station has been added.
    pub fn contains(&self, station: &str) -> bool {
        self.index.contains_key(station)
    }

    /// Freeze the builder into an immutable network.
    ///
    /// The transfer index is computed here, once, from the per-line
    /// transfer lists.
    pub fn build(self) -> Network {
        let mut is_transfer = vec![false; self.stations.len()];
        for line in &self.lines {
            for &id in &line.transfers {
                is_transfer[id] = true;
            }
        }

        debug!(
            stations = self.stations.len(),
            lines = self.lines.len(),
            transfers = is_transfer.iter().filter(|t| **t).count(),
            "Network built"
        );

        Network {
            index: self.index,
            stations: self.stations,
            adjacency: self.adjacency,
            lines: self.lines,
            is_transfer,
            costs: self.costs,
        }
    }

    fn id(&self, station: &str) -> Result<StationId, NetworkError> {
        self.index
            .get(station)
            .copied()
            .ok_or_else(|| NetworkError::UnknownStation(Station::new(station)))
    }

    fn intern(&mut self, station: Station) -> StationId {
        if let Some(&id) = self.index.get(&station) {
            return id;
        }
        let id = self.stations.len();
        self.index.insert(station.clone(), id);
        self.stations.push(station);
        self.adjacency.push(Vec::new());
        id
    }

    fn intern_line(&mut self, line: Line) -> usize {
        if let Some(&idx) = self.line_index.get(&line) {
            return idx;
        }
        let idx = self.lines.len();
        self.line_index.insert(line.clone(), idx);
        self.lines.push(LineTransfers {
            line,
            transfers: Vec::new(),
        });
        idx
    }
}
