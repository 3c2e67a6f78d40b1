//! Caching layer for computed routes.
//!
//! Route queries are pure functions of the graph and the query, so results
//! can be shared between requests. Departure times are bucketed to the minute,
//! which is the resolution of the clock the planner works with.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveTime, Timelike};
use moka::future::Cache as MokaCache;

use crate::domain::{NodeId, Route, WeightMode};
use crate::planner::{Algorithm, normalize_keyword};

/// What kind of search a query runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteQueryKind {
    /// A single shortest route.
    Shortest(Algorithm),
    /// Landmark alternatives for a normalised keyword.
    Keyword { keyword: String, k: usize },
}

/// Cache key for route results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteQuery {
    pub start: NodeId,
    pub goal: NodeId,
    pub mode: WeightMode,
    /// Minutes from midnight.
    pub depart_minute: u16,
    pub kind: RouteQueryKind,
}

impl RouteQuery {
    /// Key for a shortest-route query.
    pub fn shortest(
        algorithm: Algorithm,
        start: NodeId,
        goal: NodeId,
        mode: WeightMode,
        depart: NaiveTime,
    ) -> Self {
        Self {
            start,
            goal,
            mode,
            depart_minute: minute_of_day(depart),
            kind: RouteQueryKind::Shortest(algorithm),
        }
    }

    /// Key for a landmark query; `k` is the count after clamping.
    pub fn keyword(
        keyword: &str,
        k: usize,
        start: NodeId,
        goal: NodeId,
        mode: WeightMode,
        depart: NaiveTime,
    ) -> Self {
        Self {
            start,
            goal,
            mode,
            depart_minute: minute_of_day(depart),
            kind: RouteQueryKind::Keyword {
                keyword: normalize_keyword(keyword),
                k,
            },
        }
    }
}

fn minute_of_day(time: NaiveTime) -> u16 {
    // at most 1439
    (time.hour() * 60 + time.minute()) as u16
}

/// Cached route list.
pub type RouteEntry = Arc<Vec<Route>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
        }
    }
}

/// Cache for route query results.
pub struct RouteCache {
    routes: MokaCache<RouteQuery, RouteEntry>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Get a cached result.
    pub async fn get(&self, query: &RouteQuery) -> Option<RouteEntry> {
        self.routes.get(query).await
    }

    /// Insert a result into the cache.
    pub async fn insert(&self, query: RouteQuery, entry: RouteEntry) {
        self.routes.insert(query, entry).await;
    }

    /// Return the cached result for `query`, computing and storing it on a miss.
    ///
    /// Errors from `compute` are returned and nothing is cached.
    pub async fn get_or_compute<E>(
        &self,
        query: RouteQuery,
        compute: impl FnOnce() -> Result<Vec<Route>, E>,
    ) -> Result<RouteEntry, E> {
        if let Some(cached) = self.get(&query).await {
            return Ok(cached);
        }

        let entry = Arc::new(compute()?);
        self.insert(query, entry.clone()).await;
        Ok(entry)
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}
