//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of alternatives returned when a query does not ask for a count.
    pub default_alternatives: usize,

    /// Upper bound on alternatives per query.
    /// Larger requests are clamped to this.
    pub max_alternatives: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(default_alternatives: usize, max_alternatives: usize) -> Self {
        Self {
            default_alternatives,
            max_alternatives,
        }
    }

    /// The number of alternatives to compute for a requested count.
    pub fn alternatives_for(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_alternatives)
            .min(self.max_alternatives)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_alternatives: 3,
            max_alternatives: 10,
        }
    }
}
