//! Travel time and fare constants for a network.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::NetworkError;

/// Longest accepted travel or transfer time for one edge (one week).
///
/// Keeps every per-edge Duration representable and every route total far
/// from overflowing.
pub const MAX_EDGE_MINUTES: i64 = 7 * 24 * 60;

/// Time and fare parameters shared by every query against a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    /// Time to ride between two adjacent stations (minutes).
    pub travel_time_mins: i64,

    /// Time to leave a transfer station (minutes).
    /// Charged instead of the travel time when departing a transfer station.
    pub transfer_time_mins: i64,

    /// Fare charged for boarding.
    pub base_fare: u32,

    /// Fare added for every transfer station on the route.
    pub transfer_fare: u32,
}

impl CostModel {
    /// Create a cost model with the given parameters.
    pub fn new(
        travel_time_mins: i64,
        transfer_time_mins: i64,
        base_fare: u32,
        transfer_fare: u32,
    ) -> Self {
        Self {
            travel_time_mins,
            transfer_time_mins,
            base_fare,
            transfer_fare,
        }
    }

    /// Check that both times lie in `0..=MAX_EDGE_MINUTES`.
    ///
    /// The fastest search relies on non-negative edge costs.
    pub fn validate(&self) -> Result<(), NetworkError> {
        for (field, mins) in [
            ("travel_time_mins", self.travel_time_mins),
            ("transfer_time_mins", self.transfer_time_mins),
        ] {
            if !(0..=MAX_EDGE_MINUTES).contains(&mins) {
                return Err(NetworkError::InvalidCosts(format!(
                    "{field} must be between 0 and {MAX_EDGE_MINUTES}, got {mins}"
                )));
            }
        }
        Ok(())
    }

    /// Returns the travel time as a Duration.
    pub fn travel_time(&self) -> Duration {
        Duration::minutes(self.travel_time_mins)
    }

    /// Returns the transfer time as a Duration.
    pub fn transfer_time(&self) -> Duration {
        Duration::minutes(self.transfer_time_mins)
    }

    /// Cost of riding one edge away from a station.
    pub fn departure_cost(&self, departing_transfer: bool) -> Duration {
        if departing_transfer {
            self.transfer_time()
        } else {
            self.travel_time()
        }
    }

    /// Fare for a route passing `transfers` transfer stations.
    pub fn fare(&self, transfers: usize) -> u32 {
        let transfers = u32::try_from(transfers).unwrap_or(u32::MAX);
        self.base_fare
            .saturating_add(transfers.saturating_mul(self.transfer_fare))
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            travel_time_mins: 2,
            transfer_time_mins: 4,
            base_fare: 25,
            transfer_fare: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_costs() {
        let costs = CostModel::default();

        assert_eq!(costs.travel_time_mins, 2);
        assert_eq!(costs.transfer_time_mins, 4);
        assert_eq!(costs.base_fare, 25);
        assert_eq!(costs.transfer_fare, 5);
    }

    #[test]
    fn duration_methods() {
        let costs = CostModel::default();

        assert_eq!(costs.travel_time(), Duration::minutes(2));
        assert_eq!(costs.transfer_time(), Duration::minutes(4));
        assert_eq!(costs.departure_cost(false), Duration::minutes(2));
        assert_eq!(costs.departure_cost(true), Duration::minutes(4));
    }

    #[test]
    fn fare() {
        let costs = CostModel::new(3, 7, 10, 2);

        assert_eq!(costs.fare(0), 10);
        assert_eq!(costs.fare(1), 12);
        assert_eq!(costs.fare(4), 18);
    }

    #[test]
    fn fare_saturates() {
        let costs = CostModel::new(1, 1, u32::MAX - 1, 5);
        assert_eq!(costs.fare(3), u32::MAX);
    }

    #[test]
    fn validate_accepts_bounds() {
        assert!(CostModel::default().validate().is_ok());
        assert!(CostModel::new(0, 0, 0, 0).validate().is_ok());
        assert!(
            CostModel::new(MAX_EDGE_MINUTES, MAX_EDGE_MINUTES, 1, 1)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn validate_rejects_negative_times() {
        let err = CostModel::new(-1, 4, 25, 5).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid costs: travel_time_mins must be between 0 and 10080, got -1"
        );
        assert!(matches!(
            CostModel::new(2, -4, 25, 5).validate(),
            Err(NetworkError::InvalidCosts(_))
        ));
    }

    #[test]
    fn validate_rejects_huge_times() {
        assert!(matches!(
            CostModel::new(i64::MAX, 4, 25, 5).validate(),
            Err(NetworkError::InvalidCosts(_))
        ));
        assert!(matches!(
            CostModel::new(2, MAX_EDGE_MINUTES + 1, 25, 5).validate(),
            Err(NetworkError::InvalidCosts(_))
        ));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let costs: CostModel = serde_json::from_str(r#"{"transfer_time_mins": 6}"#).unwrap();

        assert_eq!(costs.transfer_time_mins, 6);
        assert_eq!(costs.travel_time_mins, 2);
        assert_eq!(costs.base_fare, 25);
    }
}
