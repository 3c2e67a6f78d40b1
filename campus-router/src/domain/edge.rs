//! Walkway edges and the peak/off-peak traffic rule.

use chrono::{NaiveTime, Timelike};

use super::NodeId;
use super::time::is_peak_hour;

/// A directed walkway between two landmarks.
///
/// `base_minutes` is the traversal time with no traffic; the multipliers
/// scale it depending on the clock hour at which the edge is entered.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Physical length in meters.
    pub distance_m: f64,
    /// Traversal time in minutes before traffic is applied.
    pub base_minutes: f64,
    /// Whether a mirror edge is added in the opposite direction.
    pub bidirectional: bool,
    pub peak_multiplier: f64,
    pub off_peak_multiplier: f64,
}

impl Edge {
    /// Create a one-way edge with neutral traffic multipliers.
    pub fn new(
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        distance_m: f64,
        base_minutes: f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance_m,
            base_minutes,
            bidirectional: false,
            peak_multiplier: 1.0,
            off_peak_multiplier: 1.0,
        }
    }

    /// Mark the edge as walkable in both directions.
    pub fn bidirectional(mut self) -> Self {
        self.bidirectional = true;
        self
    }

    /// Set the peak and off-peak multipliers.
    pub fn with_traffic(mut self, peak: f64, off_peak: f64) -> Self {
        self.peak_multiplier = peak;
        self.off_peak_multiplier = off_peak;
        self
    }

    /// The same edge walked the other way.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            ..self.clone()
        }
    }

    /// Traversal time in minutes when the edge is entered at `time`.
    pub fn minutes_at(&self, time: NaiveTime) -> f64 {
        self.base_minutes * traffic_multiplier(time, self)
    }
}

/// The multiplier that applies to `edge` when it is entered at `time`.
///
/// Only the hour matters: 07:00-09:59 and 16:00-18:59 are peak.
pub fn traffic_multiplier(time: NaiveTime, edge: &Edge) -> f64 {
    if is_peak_hour(time.hour()) {
        edge.peak_multiplier
    } else {
        edge.off_peak_multiplier
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn multiplier_depends_only_on_hour(
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
            peak in 0.5f64..3.0,
            off_peak in 0.5f64..3.0,
        ) {
            let edge = Edge::new(1, 2, 50.0, 1.0).with_traffic(peak, off_peak);
            let time = NaiveTime::from_hms_opt(hour, minute, second).unwrap();
            let expected = if [7, 8, 9, 16, 17, 18].contains(&hour) { peak } else { off_peak };
            prop_assert_eq!(traffic_multiplier(time, &edge), expected);
        }
    }
}
