//! Route ranking.
//!
//! Alternatives that tie on cost must come out in the order they were found,
//! so ranking goes through a merge sort that never reorders equal elements.

use std::cmp::Ordering;

use crate::domain::{Route, WeightMode};

/// Sort `items` in place with a stable merge sort.
///
/// Elements that compare equal keep their relative input order.
pub fn stable_sort_by<T, F>(items: &mut Vec<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let unsorted = std::mem::take(items);
    *items = merge_sort(unsorted, &mut compare);
}

fn merge_sort<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare);
    let right = merge_sort(right, compare);
    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Take from the left on ties
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }

    merged
}

/// Rank routes cheapest-first by the total `mode` optimises.
///
/// Routes with equal cost keep their input order.
pub fn rank_routes(mut routes: Vec<Route>, mode: WeightMode) -> Vec<Route> {
    stable_sort_by(&mut routes, |a, b| a.cost(mode).total_cmp(&b.cost(mode)));
    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeId;

    fn route(ids: &[u32], distance_m: f64, minutes: f64) -> Route {
        Route::new(ids.iter().copied().map(NodeId).collect(), distance_m, minutes).unwrap()
    }

    #[test]
    fn sorts_numbers() {
        let mut values = vec![5, 3, 9, 1, 4, 1, 8];
        stable_sort_by(&mut values, |a, b| a.cmp(b));
        assert_eq!(values, vec![1, 1, 3, 4, 5, 8, 9]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')];
        stable_sort_by(&mut pairs, |a, b| a.0.cmp(&b.0));
        assert_eq!(pairs, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]);
    }

    #[test]
    fn rank_by_distance() {
        let far = route(&[1, 2, 3], 900.0, 5.0);
        let near = route(&[1, 4, 3], 300.0, 9.0);

        let ranked = rank_routes(vec![far, near], WeightMode::Distance);
        assert_eq!(ranked[0].distance_m(), 300.0);
        assert_eq!(ranked[1].distance_m(), 900.0);
    }

    #[test]
    fn rank_by_time() {
        let far = route(&[1, 2, 3], 900.0, 5.0);
        let near = route(&[1, 4, 3], 300.0, 9.0);

        let ranked = rank_routes(vec![near, far], WeightMode::Time);
        assert_eq!(ranked[0].minutes(), 5.0);
        assert_eq!(ranked[1].minutes(), 9.0);
    }

    #[test]
    fn rank_ties_keep_discovery_order() {
        let first = route(&[1, 2, 3], 500.0, 6.0);
        let second = route(&[1, 4, 3], 500.0, 6.0);
        let cheap = route(&[1, 3], 100.0, 1.0);

        let ranked = rank_routes(vec![first.clone(), second.clone(), cheap], WeightMode::Time);
        assert_eq!(ranked[1], first);
        assert_eq!(ranked[2], second);
    }

    #[test]
    fn empty_input() {
        assert!(rank_routes(vec![], WeightMode::Distance).is_empty());

        let mut nothing: Vec<u8> = Vec::new();
        stable_sort_by(&mut nothing, |a, b| a.cmp(b));
        assert!(nothing.is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::NodeId;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn matches_std_stable_sort(values in prop::collection::vec((0u8..6, any::<u16>()), 0..64)) {
            let mut ours = values.clone();
            stable_sort_by(&mut ours, |a, b| a.0.cmp(&b.0));

            let mut reference = values;
            reference.sort_by(|a, b| a.0.cmp(&b.0));

            prop_assert_eq!(ours, reference);
        }

        #[test]
        fn is_a_permutation(values in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut sorted = values.clone();
            stable_sort_by(&mut sorted, |a, b| a.cmp(b));

            let mut expected = values;
            expected.sort_unstable();
            prop_assert_eq!(sorted, expected);
        }

        #[test]
        fn ranked_routes_are_sorted(costs in prop::collection::vec(0u16..50, 0..20)) {
            let routes: Vec<Route> = costs
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let hop = NodeId(100 + i as u32);
                    Route::new(vec![NodeId(1), hop, NodeId(2)], f64::from(*c), f64::from(*c)).unwrap()
                })
                .collect();

            let ranked = rank_routes(routes.clone(), WeightMode::Distance);
            prop_assert_eq!(ranked.len(), routes.len());
            for window in ranked.windows(2) {
                prop_assert!(window[0].distance_m() <= window[1].distance_m());
                if window[0].distance_m() == window[1].distance_m() {
                    // discovery order is encoded in the middle hop
                    prop_assert!(window[0].nodes()[1] < window[1].nodes()[1]);
                }
            }
        }
    }
}
