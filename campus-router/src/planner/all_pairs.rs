//! All-pairs shortest distances over static edge lengths.

use std::collections::HashMap;

use crate::domain::{Graph, NodeId};

/// Shortest distances in meters between every ordered pair of nodes.
///
/// Rows and columns follow ascending node id.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    ids: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    meters: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Node ids in row/column order.
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Shortest distance from `from` to `to`, or `None` if unreachable or unknown.
    pub fn get(&self, from: NodeId, to: NodeId) -> Option<f64> {
        let i = *self.index.get(&from)?;
        let j = *self.index.get(&to)?;
        let meters = self.meters[i][j];
        meters.is_finite().then_some(meters)
    }

    /// Iterate rows in id order; unreachable entries are `None`.
    pub fn rows(&self) -> impl Iterator<Item = (NodeId, Vec<Option<f64>>)> + '_ {
        self.ids.iter().zip(&self.meters).map(|(&id, row)| {
            let row = row
                .iter()
                .map(|&m| m.is_finite().then_some(m))
                .collect();
            (id, row)
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Floyd–Warshall over edge lengths in meters. Parallel edges keep the shortest.
pub fn all_pairs_distances(graph: &Graph) -> DistanceMatrix {
    let ids: Vec<NodeId> = graph.node_ids().collect();
    let index: HashMap<NodeId, usize> = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
    let n = ids.len();

    let mut meters = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in meters.iter_mut().enumerate() {
        row[i] = 0.0;
    }

    for (&from, &i) in &index {
        for edge in graph.neighbors(from) {
            if let Some(&j) = index.get(&edge.to) {
                meters[i][j] = meters[i][j].min(edge.distance_m);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let through = meters[i][k];
            if through.is_infinite() {
                continue;
            }
            for j in 0..n {
                let candidate = through + meters[k][j];
                if candidate < meters[i][j] {
                    meters[i][j] = candidate;
                }
            }
        }
    }

    DistanceMatrix { ids, index, meters }
}
