//! Declarative network descriptions.
//!
//! A [`NetworkSpec`] lists each line's stations in order plus the stations
//! that act as transfer points, and can be loaded from JSON:
//!
//! ```json
//! {
//!   "costs": { "travel_time_mins": 2, "transfer_time_mins": 4 },
//!   "lines": [
//!     { "name": "M1", "stations": ["Kızılay", "Sıhhıye", "Ulus"] },
//!     { "name": "M2", "stations": ["Kızılay", "Necatibey"] }
//!   ],
//!   "transfers": { "Kızılay": ["M1", "M2"] }
//! }
//! ```

mod ankara;
mod error;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Line, NetworkError, Station};
use crate::network::{CostModel, Network, NetworkBuilder};

pub use ankara::ankara;
pub use error::ConfigError;

/// One line and its stations, in travel order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSpec {
    pub name: Line,
    pub stations: Vec<Station>,
}

/// A whole network: lines, transfer stations and costs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Cost model; defaults apply to missing fields.
    #[serde(default)]
    pub costs: CostModel,

    pub lines: Vec<LineSpec>,

    /// Transfer stations and the lines they connect.
    ///
    /// A station listed here is a transfer point on every line that serves
    /// it; the line list is informational.
    #[serde(default)]
    pub transfers: BTreeMap<Station, Vec<Line>>,
}

impl NetworkSpec {
    /// Parse a network description from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a network description from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Build the described network.
    pub fn build(&self) -> Result<Network, NetworkError> {
        let transfers: HashSet<Station> = self.transfers.keys().cloned().collect();
        let mut builder = NetworkBuilder::new().with_costs(self.costs.clone())?;
        for line in &self.lines {
            builder.add_line(line.name.clone(), line.stations.as_slice(), &transfers)?;
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "costs": { "travel_time_mins": 3 },
        "lines": [
            { "name": "L1", "stations": ["A", "B", "C"] },
            { "name": "L2", "stations": ["C", "D"] }
        ],
        "transfers": { "C": ["L1", "L2"] }
    }"#;

    #[test]
    fn parse_and_build() {
        let spec = NetworkSpec::from_json(SAMPLE).unwrap();
        assert_eq!(spec.lines.len(), 2);
        assert_eq!(spec.costs.travel_time_mins, 3);
        assert_eq!(spec.costs.transfer_time_mins, 4);

        let network = spec.build().unwrap();
        assert_eq!(network.station_count(), 4);
        assert!(network.is_transfer_station("C"));
        assert_eq!(network.transfers_on("L2"), vec![&Station::new("C")]);

        let route = network.fastest_route("A", "D").unwrap();
        assert_eq!(route.duration(), chrono::Duration::minutes(3 + 3 + 4));
    }

    #[test]
    fn transfers_and_costs_are_optional() {
        let spec =
            NetworkSpec::from_json(r#"{ "lines": [{ "name": "L", "stations": ["A"] }] }"#).unwrap();
        assert!(spec.transfers.is_empty());
        assert_eq!(spec.costs, CostModel::default());
    }

    #[test]
    fn malformed_json() {
        let err = NetworkSpec::from_json("{ \"lines\": 7 }").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn empty_line_rejected() {
        let spec =
            NetworkSpec::from_json(r#"{ "lines": [{ "name": "L", "stations": [] }] }"#).unwrap();
        assert!(matches!(spec.build(), Err(NetworkError::InvalidLine(_))));
    }

    #[test]
    fn oversized_time_rejected_before_routing() {
        let spec = NetworkSpec::from_json(
            r#"{
                "costs": { "travel_time_mins": 9223372036854775807 },
                "lines": [{ "name": "L", "stations": ["A", "B"] }]
            }"#,
        )
        .unwrap();
        assert!(matches!(spec.build(), Err(NetworkError::InvalidCosts(_))));
    }

    #[test]
    fn negative_time_rejected() {
        let spec = NetworkSpec::from_json(
            r#"{
                "costs": { "travel_time_mins": -1 },
                "lines": [{ "name": "L", "stations": ["A", "B", "C"] }]
            }"#,
        )
        .unwrap();
        assert!(matches!(spec.build(), Err(NetworkError::InvalidCosts(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let spec = NetworkSpec::load(file.path()).unwrap();
        assert_eq!(spec, NetworkSpec::from_json(SAMPLE).unwrap());
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = NetworkSpec::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn json_roundtrip_preserves_network() {
        let spec = ankara();
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(NetworkSpec::from_json(&json).unwrap(), spec);
    }
}
