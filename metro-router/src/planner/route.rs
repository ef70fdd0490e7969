//! Route results and the path arena shared by both searches.

use chrono::Duration;

use crate::domain::Station;
use crate::network::{Network, StationId};

use super::fare::{calculate_fare, simplify_route};

/// A route found by one of the searches.
///
/// `M` is the metric the search minimised: a transfer count for the
/// least-transfers search, a [`Duration`] for the fastest search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<M> {
    /// Every station from start to goal, consecutive stations adjacent.
    pub path: Vec<Station>,

    /// Start, intermediate transfer stations and goal.
    pub stops: Vec<Station>,

    /// The minimised metric.
    pub metric: M,

    /// Fare of the full path.
    pub fare: u32,
}

impl<M> Route<M> {
    pub(crate) fn new(network: &Network, path: Vec<Station>, metric: M) -> Self {
        let fare = calculate_fare(network, &path);
        let stops = simplify_route(network, &path);
        Self {
            path,
            stops,
            metric,
            fare,
        }
    }

    /// First station of the route.
    pub fn start(&self) -> Option<&Station> {
        self.path.first()
    }

    /// Last station of the route.
    pub fn goal(&self) -> Option<&Station> {
        self.path.last()
    }

    /// Number of edges travelled.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl Route<usize> {
    /// Transfers made along the route.
    pub fn transfers(&self) -> usize {
        self.metric
    }
}

impl Route<Duration> {
    /// Total travel time including transfer time.
    pub fn duration(&self) -> Duration {
        self.metric
    }
}

/// Index of a step in a [`Trails`] arena.
pub(crate) type TrailId = usize;

#[derive(Debug, Clone, Copy)]
struct Step {
    station: StationId,
    prev: Option<TrailId>,
}

/// Arena of partial paths.
///
/// Each frontier entry points at its last step; steps link back to the
/// start, so extending a path is O(1) and paths share their prefixes.
#[derive(Debug, Default)]
pub(crate) struct Trails {
    steps: Vec<Step>,
}

impl Trails {
    /// Begin a new path at `station`.
    pub(crate) fn start(&mut self, station: StationId) -> TrailId {
        self.push(station, None)
    }

    /// Extend the path ending at `prev` by `station`.
    pub(crate) fn extend(&mut self, prev: TrailId, station: StationId) -> TrailId {
        self.push(station, Some(prev))
    }

    /// Stations of the path ending at `trail`, start first.
    pub(crate) fn path(&self, network: &Network, trail: TrailId) -> Vec<Station> {
        let mut ids = Vec::new();
        let mut cursor = Some(trail);
        while let Some(t) = cursor {
            let step = self.steps[t];
            ids.push(step.station);
            cursor = step.prev;
        }
        ids.reverse();
        ids.into_iter()
            .map(|id| network.station(id).clone())
            .collect()
    }

    fn push(&mut self, station: StationId, prev: Option<TrailId>) -> TrailId {
        self.steps.push(Step { station, prev });
        self.steps.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkBuilder;

    fn line() -> Network {
        let mut builder = NetworkBuilder::new();
        for name in ["A", "B", "C"] {
            builder.add_station("L1", name, name == "B");
        }
        builder.build()
    }

    #[test]
    fn trails_share_prefixes() {
        let network = line();
        let a = network.id("A").unwrap();
        let b = network.id("B").unwrap();
        let c = network.id("C").unwrap();

        let mut trails = Trails::default();
        let start = trails.start(a);
        let ab = trails.extend(start, b);
        let abc = trails.extend(ab, c);
        let ac = trails.extend(start, c);

        let names = |t| -> Vec<String> {
            trails
                .path(&network, t)
                .into_iter()
                .map(|s| s.to_string())
                .collect()
        };
        assert_eq!(names(abc), vec!["A", "B", "C"]);
        assert_eq!(names(ac), vec!["A", "C"]);
        assert_eq!(names(start), vec!["A"]);
    }

    #[test]
    fn route_accessors() {
        let network = line();
        let path = vec![Station::new("A"), Station::new("B"), Station::new("C")];
        let route = Route::new(&network, path, 1usize);

        assert_eq!(route.start(), Some(&Station::new("A")));
        assert_eq!(route.goal(), Some(&Station::new("C")));
        assert_eq!(route.hops(), 2);
        assert_eq!(route.transfers(), 1);
        assert_eq!(route.fare, 30);
        assert_eq!(
            route.stops,
            vec![Station::new("A"), Station::new("B"), Station::new("C")]
        );
    }

    #[test]
    fn duration_route() {
        let network = line();
        let route = Route::new(&network, vec![Station::new("A")], Duration::zero());
        assert_eq!(route.duration(), Duration::zero());
        assert_eq!(route.hops(), 0);
        assert_eq!(route.fare, 25);
    }
}
