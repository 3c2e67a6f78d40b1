//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Graph, Route};

// ============================================================================
// Page Templates
// ============================================================================

/// Home page with the route form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub landmarks: Vec<LandmarkView>,
}

// ============================================================================
// Fragment Templates (AJAX responses)
// ============================================================================

/// Route results fragment.
#[derive(Template)]
#[template(path = "route_results.html")]
pub struct RouteResultsTemplate {
    pub routes: Vec<RouteView>,
    pub depart: String,
    pub mode: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Landmark option for the start/goal pickers.
#[derive(Debug, Clone)]
pub struct LandmarkView {
    pub id: u32,
    pub name: String,
}

impl LandmarkView {
    /// All landmarks of a graph, in id order.
    pub fn all(graph: &Graph) -> Vec<Self> {
        graph
            .nodes()
            .map(|node| Self {
                id: node.id.0,
                name: node.name.clone(),
            })
            .collect()
    }
}

/// Route view model for templates.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub rank: usize,
    pub stops: Vec<String>,
    pub distance_km: String,
    pub minutes: String,
}

impl RouteView {
    /// Create from a domain Route; `rank` counts from 1.
    pub fn from_route(rank: usize, route: &Route, graph: &Graph) -> Self {
        let stops = route
            .nodes()
            .iter()
            .map(|&id| {
                graph
                    .name_of(id)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{id}"))
            })
            .collect();

        Self {
            rank,
            stops,
            distance_km: format!("{:.2}", route.distance_m() / 1000.0),
            minutes: format!("{:.1}", route.minutes()),
        }
    }

    /// Number of walking legs.
    pub fn legs(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Stops joined with arrows.
    pub fn path(&self) -> String {
        self.stops.join(" → ")
    }
}
