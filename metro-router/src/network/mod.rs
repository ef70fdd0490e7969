//! Station graph and its cost model.
//!
//! A network is assembled once with [`NetworkBuilder`] and then frozen into
//! an immutable [`Network`]. The transfer-station index is computed at that
//! point so that routing never scans the per-line transfer lists.

mod builder;
mod costs;
mod graph;

pub use builder::NetworkBuilder;
pub use costs::{CostModel, MAX_EDGE_MINUTES};
pub use graph::Network;

pub(crate) use graph::StationId;
