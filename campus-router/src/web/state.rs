//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, RouteCache};
use crate::domain::Graph;
use crate::planner::{DistanceMatrix, SearchConfig, all_pairs_distances};

/// Shared application state.
///
/// The graph never changes after startup, so handlers share it without locks.
#[derive(Clone)]
pub struct AppState {
    /// Campus graph
    pub graph: Arc<Graph>,

    /// Route planner configuration
    pub config: Arc<SearchConfig>,

    /// Cached route results
    pub cache: Arc<RouteCache>,

    /// All-pairs distances, computed once at startup
    pub distances: Arc<DistanceMatrix>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: Graph, config: SearchConfig, cache_config: &CacheConfig) -> Self {
        let distances = all_pairs_distances(&graph);
        Self {
            graph: Arc::new(graph),
            config: Arc::new(config),
            cache: Arc::new(RouteCache::new(cache_config)),
            distances: Arc::new(distances),
        }
    }
}
