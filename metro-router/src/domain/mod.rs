//! Domain types for the metro router.
//!
//! Stations and lines are plain name types; all structural rules (which
//! stations exist, which are connected) live in the network.

mod error;
mod station;

pub use error::NetworkError;
pub use station::{Line, Station};
