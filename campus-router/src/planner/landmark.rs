//! Alternative routes that pass through a keyword-matched landmark.
//!
//! Each candidate midpoint yields a two-leg route: start to midpoint, then
//! midpoint to goal departing when the first leg ends. Duplicate walks are
//! dropped, and if too few remain the search backfills with the direct route
//! and with routes through the start's immediate neighbours.

use std::collections::HashSet;

use chrono::NaiveTime;
use tracing::debug;

use crate::domain::{Graph, Node, NodeId, Route, WeightMode, advance_clock};

use super::astar;
use super::rank::rank_routes;

/// Extra midpoints for particular keywords.
///
/// When the normalised keyword is one of `keywords`, every node accepted by
/// `also_matches` becomes a candidate too, whether or not its tags match.
struct KeywordRule {
    keywords: &'static [&'static str],
    also_matches: fn(&Node) -> bool,
}

fn name_mentions_bank(node: &Node) -> bool {
    node.name_contains("bank")
}

const KEYWORD_RULES: &[KeywordRule] = &[KeywordRule {
    keywords: &["bank", "banking"],
    also_matches: name_mentions_bank,
}];

/// Lowercase and trim a keyword for matching.
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

/// Whether `node`'s name or any of its tags contains `keyword`, ignoring case.
pub fn matches_keyword(node: &Node, keyword: &str) -> bool {
    let needle = normalize_keyword(keyword);
    node.name_contains(&needle) || node.tag_contains(&needle)
}

/// Candidate midpoints for `keyword`, in ascending id order.
///
/// Nodes whose name or tags match come first, then any extra nodes added by
/// a keyword rule. `start` and `goal` are never candidates.
pub fn candidate_midpoints(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    keyword: &str,
) -> Vec<NodeId> {
    let needle = normalize_keyword(keyword);
    let eligible = |node: &&Node| node.id != start && node.id != goal;

    let mut candidates: Vec<NodeId> = graph
        .nodes()
        .filter(eligible)
        .filter(|node| node.name_contains(&needle) || node.tag_contains(&needle))
        .map(|node| node.id)
        .collect();

    for rule in KEYWORD_RULES
        .iter()
        .filter(|rule| rule.keywords.contains(&needle.as_str()))
    {
        for node in graph.nodes().filter(eligible) {
            if (rule.also_matches)(node) && !candidates.contains(&node.id) {
                candidates.push(node.id);
            }
        }
    }

    candidates
}

/// Route from `start` to `goal` forced through `via`.
///
/// The second leg departs at the first leg's departure advanced by its
/// whole minutes. Returns `None` if either leg is unreachable.
pub fn route_via(
    graph: &Graph,
    start: NodeId,
    via: NodeId,
    goal: NodeId,
    mode: WeightMode,
    depart: NaiveTime,
) -> Option<Route> {
    let first = astar::shortest_path(graph, start, via, mode, depart)?;
    let second_depart = advance_clock(depart, first.minutes());
    let second = astar::shortest_path(graph, via, goal, mode, second_depart)?;

    let mut nodes = first.nodes().to_vec();
    nodes.extend_from_slice(second.nodes().get(1..).unwrap_or_default());

    Some(Route::from_walk(
        nodes,
        first.distance_m() + second.distance_m(),
        first.minutes() + second.minutes(),
    ))
}

/// Routes collected so far, without repeated node sequences.
struct Alternatives {
    routes: Vec<Route>,
    seen: HashSet<Vec<NodeId>>,
}

impl Alternatives {
    fn new() -> Self {
        Self {
            routes: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn offer(&mut self, route: Route) -> bool {
        if self.seen.insert(route.nodes().to_vec()) {
            self.routes.push(route);
            true
        } else {
            false
        }
    }

    fn len(&self) -> usize {
        self.routes.len()
    }
}

/// Up to `k` distinct routes from `start` to `goal` through landmarks
/// matching `keyword`, cheapest first.
///
/// Every keyword candidate is tried. If fewer than `k` distinct routes result,
/// the direct route is added, then routes through each neighbour of `start`
/// in adjacency order until `k` are collected. Ties in cost keep discovery
/// order, so keyword routes rank ahead of equally cheap backfill.
pub fn routes_by_keyword(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    keyword: &str,
    k: usize,
    mode: WeightMode,
    depart: NaiveTime,
) -> Vec<Route> {
    let candidates = candidate_midpoints(graph, start, goal, keyword);
    let mut found = Alternatives::new();

    for &mid in &candidates {
        if let Some(route) = route_via(graph, start, mid, goal, mode, depart) {
            found.offer(route);
        }
    }
    let matched = found.len();

    if found.len() < k {
        if let Some(direct) = astar::shortest_path(graph, start, goal, mode, depart) {
            found.offer(direct);
        }
        for edge in graph.neighbors(start) {
            if found.len() >= k {
                break;
            }
            if let Some(route) = route_via(graph, start, edge.to, goal, mode, depart) {
                found.offer(route);
            }
        }
    }

    debug!(
        %start,
        %goal,
        keyword,
        candidates = candidates.len(),
        matched,
        backfilled = found.len() - matched,
        "landmark search finished"
    );

    let mut ranked = rank_routes(found.routes, mode);
    ranked.truncate(k);
    ranked
}
