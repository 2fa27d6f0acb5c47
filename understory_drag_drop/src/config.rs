// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thresholds and tuning shared by every controller in an arena.

use kurbo::{Point, Rect};

/// Tuning for one drag arena.
#[derive(Clone, Debug, PartialEq)]
pub struct DragConfig {
    /// Distance (host units) the pointer must move from its press point
    /// before a press becomes a drag (default: 5.0).
    pub drag_threshold: f64,
    /// Added to each child's vertical midpoint when choosing the insertion
    /// index (default: 0.0). Positive values favor inserting above a child.
    pub drop_margin: f64,
    /// Minimum hit-test height of a drop zone (default: 32.0).
    ///
    /// Empty columns often lay out with zero height; their hit area is
    /// extended downward to this height so they can still receive drops.
    pub min_zone_height: f64,
    /// Duration of the reorder preview transition in milliseconds (default: 200).
    pub transition_ms: u32,
    /// Scroll the target zone when the pointer nears its top or bottom edge.
    /// Disabled by default.
    pub autoscroll: Option<AutoScroll>,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 5.0,
            drop_margin: 0.0,
            min_zone_height: 32.0,
            transition_ms: 200,
            autoscroll: None,
        }
    }
}

/// Edge auto-scroll parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AutoScroll {
    /// Depth of the sensitive band along the top and bottom edges.
    pub edge: f64,
    /// Scroll step requested per move event at the very edge.
    pub max_step: f64,
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self {
            edge: 32.0,
            max_step: 16.0,
        }
    }
}

impl AutoScroll {
    /// Vertical scroll step for a pointer at `position` inside `bounds`.
    ///
    /// Negative scrolls up, positive scrolls down, zero outside both bands.
    /// The step ramps linearly from zero at the inner side of a band to
    /// `max_step` at the edge. When the bands overlap, the nearer edge wins.
    pub fn step(&self, bounds: Rect, position: Point) -> f64 {
        if self.edge <= 0.0 || !bounds.contains(position) {
            return 0.0;
        }
        let from_top = position.y - bounds.y0;
        let from_bottom = bounds.y1 - position.y;
        if from_top <= from_bottom {
            if from_top < self.edge {
                return -self.max_step * (1.0 - from_top / self.edge);
            }
        } else if from_bottom < self.edge {
            return self.max_step * (1.0 - from_bottom / self.edge);
        }
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZONE: Rect = Rect::new(0.0, 0.0, 100.0, 400.0);

    #[test]
    fn defaults() {
        let config = DragConfig::default();
        assert_eq!(config.drag_threshold, 5.0);
        assert_eq!(config.min_zone_height, 32.0);
        assert!(config.autoscroll.is_none());
    }

    #[test]
    fn middle_of_zone_does_not_scroll() {
        let scroll = AutoScroll::default();
        assert_eq!(scroll.step(ZONE, Point::new(50.0, 200.0)), 0.0);
    }

    #[test]
    fn step_ramps_toward_edges() {
        let scroll = AutoScroll {
            edge: 40.0,
            max_step: 20.0,
        };
        assert_eq!(scroll.step(ZONE, Point::new(50.0, 0.0)), -20.0);
        assert_eq!(scroll.step(ZONE, Point::new(50.0, 20.0)), -10.0);
        assert_eq!(scroll.step(ZONE, Point::new(50.0, 380.0)), 10.0);
        assert_eq!(scroll.step(ZONE, Point::new(50.0, 40.0)), 0.0);
    }

    #[test]
    fn outside_or_disabled_is_zero() {
        let scroll = AutoScroll::default();
        assert_eq!(scroll.step(ZONE, Point::new(150.0, 5.0)), 0.0);
        let off = AutoScroll {
            edge: 0.0,
            max_step: 10.0,
        };
        assert_eq!(off.step(ZONE, Point::new(50.0, 1.0)), 0.0);
    }
}
