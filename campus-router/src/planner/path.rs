//! Labels, relaxation and route replay shared by both solvers.
//!
//! Every label carries the clock time at which the traveller reaches the
//! node. Time-mode edge weights are priced at that clock, and the clock at
//! the head is the tail's clock advanced by the whole minutes of the leg.
//! [`replay`] walks a finished node sequence with exactly the same rule, so
//! a route's totals agree with the costs the search relaxed.
//!
//! This differs from pricing every edge at `depart + floor(total minutes so
//! far)`. Per-leg flooring can run a clock up to a minute behind that rule
//! per leg, so near a peak boundary the two can price the same edge
//! differently and pick different routes.

use std::collections::HashMap;

use chrono::NaiveTime;

use crate::domain::{Edge, Graph, NodeId, Route, WeightMode, advance_clock};

/// Totals obtained by replaying a walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub distance_m: f64,
    pub minutes: f64,
}

/// Replay a node sequence from `depart`, leg by leg.
///
/// Each leg uses the first edge between its endpoints, is priced at the
/// current clock, and then advances the clock by its whole minutes. Pairs with
/// no connecting edge contribute nothing.
pub fn replay(graph: &Graph, nodes: &[NodeId], depart: NaiveTime) -> Totals {
    let mut totals = Totals {
        distance_m: 0.0,
        minutes: 0.0,
    };
    let mut clock = depart;

    for pair in nodes.windows(2) {
        let Some(edge) = graph.find_edge(pair[0], pair[1]) else {
            continue;
        };
        let leg_minutes = edge.minutes_at(clock);
        totals.distance_m += edge.distance_m;
        totals.minutes += leg_minutes;
        clock = advance_clock(clock, leg_minutes);
    }

    totals
}

/// Weight of `edge` when entered at `entered_at`.
fn edge_weight(mode: WeightMode, edge: &Edge, entered_at: NaiveTime) -> f64 {
    match mode {
        WeightMode::Distance => edge.distance_m,
        WeightMode::Time => edge.minutes_at(entered_at),
    }
}

/// Best-known cost, arrival clock and predecessor of each reached node.
#[derive(Debug)]
pub(super) struct Labels {
    start: NodeId,
    depart: NaiveTime,
    cost: HashMap<NodeId, f64>,
    clock: HashMap<NodeId, NaiveTime>,
    parent: HashMap<NodeId, NodeId>,
}

impl Labels {
    pub(super) fn new(start: NodeId, depart: NaiveTime) -> Self {
        let mut cost = HashMap::new();
        let mut clock = HashMap::new();
        cost.insert(start, 0.0);
        clock.insert(start, depart);

        Self {
            start,
            depart,
            cost,
            clock,
            parent: HashMap::new(),
        }
    }

    /// Best known cost so far; unreached nodes cost infinity.
    pub(super) fn cost(&self, id: NodeId) -> f64 {
        self.cost.get(&id).copied().unwrap_or(f64::INFINITY)
    }

    fn clock(&self, id: NodeId) -> NaiveTime {
        self.clock.get(&id).copied().unwrap_or(self.depart)
    }

    /// Try to improve the head of `edge` through its tail.
    ///
    /// Only a strict improvement updates the label, so ties keep the earlier
    /// predecessor and relaxing from an already-settled node is a no-op.
    /// Returns the new cost on improvement.
    pub(super) fn relax(&mut self, edge: &Edge, mode: WeightMode) -> Option<f64> {
        let entered_at = self.clock(edge.from);
        let candidate = self.cost(edge.from) + edge_weight(mode, edge, entered_at);

        if candidate < self.cost(edge.to) {
            self.cost.insert(edge.to, candidate);
            self.clock
                .insert(edge.to, advance_clock(entered_at, edge.minutes_at(entered_at)));
            self.parent.insert(edge.to, edge.from);
            Some(candidate)
        } else {
            None
        }
    }

    /// Number of nodes that have been given a label.
    pub(super) fn reached(&self) -> usize {
        self.cost.len()
    }

    /// Walk predecessor links back from `goal` and replay the result.
    ///
    /// Returns `None` if `goal` was never reached.
    pub(super) fn into_route(self, graph: &Graph, goal: NodeId) -> Option<Route> {
        let nodes = self.reconstruct(goal)?;
        let totals = replay(graph, &nodes, self.depart);
        Some(Route::from_walk(nodes, totals.distance_m, totals.minutes))
    }

    fn reconstruct(&self, goal: NodeId) -> Option<Vec<NodeId>> {
        if goal != self.start && !self.parent.contains_key(&goal) {
            return None;
        }

        let mut nodes = vec![goal];
        let mut current = goal;
        while current != self.start {
            let Some(&previous) = self.parent.get(&current) else {
                break;
            };
            current = previous;
            nodes.push(current);
        }
        nodes.reverse();

        Some(nodes)
    }
}
