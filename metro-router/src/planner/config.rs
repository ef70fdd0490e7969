//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of frontier entries a single search may dequeue.
    /// Searches that need more fail instead of running unbounded.
    pub max_expansions: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given expansion limit.
    pub fn new(max_expansions: usize) -> Self {
        Self { max_expansions }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: 100_000,
        }
    }
}
