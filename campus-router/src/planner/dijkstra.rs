//! Uninformed label-setting shortest path.

use chrono::NaiveTime;
use tracing::{debug, trace};

use crate::domain::{Graph, NodeId, Route, WeightMode};

use super::frontier::Frontier;
use super::path::Labels;

/// Find an optimal route from `start` to `goal`.
///
/// In [`WeightMode::Time`] each edge is priced at the clock time the traveller
/// reaches its tail. Returns `None` when `goal` cannot be reached.
///
/// `start` and `goal` are expected to be nodes of `graph`; callers validate
/// ids before querying.
pub fn shortest_path(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    mode: WeightMode,
    depart: NaiveTime,
) -> Option<Route> {
    let mut labels = Labels::new(start, depart);
    let mut frontier = Frontier::new();
    frontier.push(start, 0.0);

    let mut popped = 0usize;
    while let Some(node) = frontier.pop() {
        popped += 1;
        if node == goal {
            break;
        }
        trace!(%node, cost = labels.cost(node), "settling");

        for edge in graph.neighbors(node) {
            if let Some(cost) = labels.relax(edge, mode) {
                frontier.push(edge.to, cost);
            }
        }
    }

    debug!(
        %start,
        %goal,
        %mode,
        popped,
        pushed = frontier.pushed(),
        reached = labels.reached(),
        "dijkstra finished"
    );

    labels.into_route(graph, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Edge, Node};

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn id(n: u32) -> NodeId {
        NodeId(n)
    }

    /// A(0,0) - B(10,0) - C(20,0) plus an isolated D.
    fn line() -> Graph {
        let mut graph = Graph::new();
        graph.add_node(Node::new(1, "A", 0.0, 0.0, ["a"]));
        graph.add_node(Node::new(2, "B", 10.0, 0.0, ["b"]));
        graph.add_node(Node::new(3, "C", 20.0, 0.0, ["c"]));
        graph.add_node(Node::new(4, "D", 30.0, 0.0, ["d"]));
        graph.add_edge(Edge::new(1, 2, 100.0, 2.0).bidirectional().with_traffic(1.3, 1.0));
        graph.add_edge(Edge::new(2, 3, 100.0, 2.0).bidirectional().with_traffic(1.3, 1.0));
        graph
    }

    #[test]
    fn distance_along_line() {
        let graph = line();
        let route = shortest_path(&graph, id(1), id(3), WeightMode::Distance, at(8, 0)).unwrap();

        assert_eq!(route.nodes(), &[id(1), id(2), id(3)]);
        assert_eq!(route.distance_m(), 200.0);
        // Totals always include traffic, whatever the mode.
        assert!((route.minutes() - 5.2).abs() < 1e-9);
    }

    #[test]
    fn reverse_direction_uses_mirror_edges() {
        let graph = line();
        let route = shortest_path(&graph, id(3), id(1), WeightMode::Distance, at(12, 0)).unwrap();

        assert_eq!(route.nodes(), &[id(3), id(2), id(1)]);
        assert_eq!(route.minutes(), 4.0);
    }

    #[test]
    fn isolated_goal_is_unreachable() {
        let graph = line();
        assert!(shortest_path(&graph, id(1), id(4), WeightMode::Distance, at(8, 0)).is_none());
        assert!(shortest_path(&graph, id(1), id(4), WeightMode::Time, at(8, 0)).is_none());
        assert!(shortest_path(&graph, id(4), id(1), WeightMode::Time, at(8, 0)).is_none());
    }

    #[test]
    fn start_is_goal() {
        let graph = line();
        let route = shortest_path(&graph, id(4), id(4), WeightMode::Time, at(8, 0)).unwrap();
        assert_eq!(route.nodes(), &[id(4)]);
        assert_eq!(route.distance_m(), 0.0);
    }

    #[test]
    fn prefers_shorter_detour() {
        // Direct 1->3 is 500 m; via 2 is 200 m.
        let mut graph = line();
        graph.add_edge(Edge::new(1, 3, 500.0, 1.0).bidirectional());

        let by_distance =
            shortest_path(&graph, id(1), id(3), WeightMode::Distance, at(12, 0)).unwrap();
        assert_eq!(by_distance.nodes(), &[id(1), id(2), id(3)]);

        // By time the 1 minute direct edge wins.
        let by_time = shortest_path(&graph, id(1), id(3), WeightMode::Time, at(12, 0)).unwrap();
        assert_eq!(by_time.nodes(), &[id(1), id(3)]);
        assert_eq!(by_time.minutes(), 1.0);
    }

    #[test]
    fn ties_keep_first_found_predecessor() {
        // Two equal-length routes 1->2->4 and 1->3->4; edge to 2 is listed first.
        let mut graph = Graph::new();
        for (n, x, y) in [(1, 0.0, 0.0), (2, 1.0, 1.0), (3, 1.0, -1.0), (4, 2.0, 0.0)] {
            graph.add_node(Node::new(n, format!("N{n}"), x, y, ["n"]));
        }
        graph.add_edge(Edge::new(1, 2, 10.0, 1.0));
        graph.add_edge(Edge::new(1, 3, 10.0, 1.0));
        graph.add_edge(Edge::new(2, 4, 10.0, 1.0));
        graph.add_edge(Edge::new(3, 4, 10.0, 1.0));

        let route = shortest_path(&graph, id(1), id(4), WeightMode::Distance, at(12, 0)).unwrap();
        assert_eq!(route.nodes(), &[id(1), id(2), id(4)]);
    }

    #[test]
    fn time_mode_prices_edges_at_arrival_clock() {
        // Departing 06:50, reaching 2 takes until 07:00 and its onward edge is
        // then at peak; reaching 3 only takes until 06:55.
        let mut graph = Graph::new();
        for (n, x) in [(1, 0.0), (2, 1.0), (3, 1.0), (4, 2.0)] {
            graph.add_node(Node::new(n, format!("N{n}"), x, 0.0, ["n"]));
        }
        // 1 -> 2: 10 min, then 2 -> 4: 10 min at peak x2.0 = 20 min.  Total 30.
        graph.add_edge(Edge::new(1, 2, 100.0, 10.0));
        graph.add_edge(Edge::new(2, 4, 100.0, 10.0).with_traffic(2.0, 1.0));
        // 1 -> 3: 5 min, then 3 -> 4: 16 min off-peak (clock 06:55).   Total 21.
        graph.add_edge(Edge::new(1, 3, 100.0, 5.0));
        graph.add_edge(Edge::new(3, 4, 100.0, 16.0).with_traffic(2.0, 1.0));

        let route = shortest_path(&graph, id(1), id(4), WeightMode::Time, at(6, 50)).unwrap();
        assert_eq!(route.nodes(), &[id(1), id(3), id(4)]);
        assert_eq!(route.minutes(), 21.0);

        // Departing at noon nothing is peak; via 2 is 20 min.
        let route = shortest_path(&graph, id(1), id(4), WeightMode::Time, at(12, 0)).unwrap();
        assert_eq!(route.nodes(), &[id(1), id(2), id(4)]);
        assert_eq!(route.minutes(), 20.0);
    }

    #[test]
    fn unknown_goal_is_unreachable() {
        let graph = line();
        assert!(shortest_path(&graph, id(1), id(99), WeightMode::Distance, at(8, 0)).is_none());
    }
}
