// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture helper: separate click from drag intent and track pointer motion.
//!
//! ## Usage
//!
//! 1) Record a press with [`DragGesture::press`].
//! 2) On each move, call [`DragGesture::update`]. It reports
//!    [`GestureStep::Started`] once the pointer has moved farther than the
//!    threshold from the press point, then [`GestureStep::Moved`] with the
//!    delta since the previous move.
//! 3) On release, [`DragGesture::release`] reports whether the press ever
//!    became a drag, and resets.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_drag_drop::gesture::{DragGesture, GestureStep};
//! use understory_drag_drop::PointerId;
//!
//! let mut gesture = DragGesture::default();
//! gesture.press(PointerId::MOUSE, Point::new(10.0, 10.0));
//!
//! // 2px is still a click.
//! let step = gesture.update(PointerId::MOUSE, Point::new(12.0, 10.0), 5.0);
//! assert_eq!(step, GestureStep::Pending);
//!
//! // Past the threshold the drag starts.
//! let step = gesture.update(PointerId::MOUSE, Point::new(20.0, 10.0), 5.0);
//! assert_eq!(step, GestureStep::Started);
//!
//! let step = gesture.update(PointerId::MOUSE, Point::new(25.0, 12.0), 5.0);
//! assert_eq!(step, GestureStep::Moved(Vec2::new(5.0, 2.0)));
//!
//! assert_eq!(gesture.release(PointerId::MOUSE), Some(true));
//! assert!(!gesture.is_pressed());
//! ```

use kurbo::{Point, Vec2};

use crate::pointer::PointerId;

/// Result of feeding a move to a [`DragGesture`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureStep {
    /// No press is being tracked for this pointer.
    Ignored,
    /// Pressed, but still within the threshold.
    Pending,
    /// This move crossed the threshold.
    Started,
    /// Already dragging; delta since the previous move.
    Moved(Vec2),
}

/// Tracks one press from pointer-down to pointer-up.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragGesture {
    /// Pointer that owns the press.
    pub pointer: Option<PointerId>,
    /// Press position.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position.
    pub last_pos: Option<Point>,
    /// Whether the threshold has been crossed.
    pub started: bool,
}

impl DragGesture {
    /// Start tracking a press by `pointer` at `pos`, replacing any previous press.
    pub fn press(&mut self, pointer: PointerId, pos: Point) {
        self.pointer = Some(pointer);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.started = false;
    }

    /// Feed a move of `pointer` to `pos`.
    ///
    /// The drag starts when the straight-line distance from the press point
    /// strictly exceeds `threshold`.
    pub fn update(&mut self, pointer: PointerId, pos: Point, threshold: f64) -> GestureStep {
        if !self.owns(pointer) {
            return GestureStep::Ignored;
        }
        let (Some(start), Some(last)) = (self.start_pos, self.last_pos) else {
            return GestureStep::Ignored;
        };
        self.last_pos = Some(pos);
        if self.started {
            return GestureStep::Moved(pos - last);
        }
        if (pos - start).hypot() > threshold {
            self.started = true;
            GestureStep::Started
        } else {
            GestureStep::Pending
        }
    }

    /// Total offset of `current_pos` from the press position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Finish the press by `pointer`.
    ///
    /// Returns `Some(true)` if it had become a drag, `Some(false)` for a
    /// click, and `None` if `pointer` does not own the press (state is kept).
    pub fn release(&mut self, pointer: PointerId) -> Option<bool> {
        if !self.owns(pointer) {
            return None;
        }
        let started = self.started;
        self.end();
        Some(started)
    }

    /// Forget the press without reporting anything.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if `pointer` owns the tracked press.
    pub fn owns(&self, pointer: PointerId) -> bool {
        self.pointer == Some(pointer)
    }

    /// Returns `true` while a press is tracked, dragging or not.
    pub fn is_pressed(&self) -> bool {
        self.pointer.is_some()
    }

    /// Returns `true` once the threshold has been crossed.
    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some() && self.started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: f64 = 5.0;

    #[test]
    fn new_gesture_is_idle() {
        let g = DragGesture::default();
        assert!(!g.is_pressed());
        assert!(!g.is_dragging());
        assert!(g.total_offset(Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn small_motion_stays_pending() {
        let mut g = DragGesture::default();
        g.press(PointerId::MOUSE, Point::new(100.0, 100.0));

        assert_eq!(
            g.update(PointerId::MOUSE, Point::new(102.0, 100.0), T),
            GestureStep::Pending
        );
        assert_eq!(
            g.update(PointerId::MOUSE, Point::new(103.0, 104.0), T),
            GestureStep::Pending,
            "distance exactly at the threshold is still a click"
        );
        assert_eq!(g.release(PointerId::MOUSE), Some(false));
    }

    #[test]
    fn threshold_is_measured_from_press_not_last_move() {
        let mut g = DragGesture::default();
        g.press(PointerId::MOUSE, Point::ZERO);

        for x in 1..=5 {
            let step = g.update(PointerId::MOUSE, Point::new(f64::from(x), 0.0), T);
            assert_eq!(step, GestureStep::Pending);
        }
        assert_eq!(
            g.update(PointerId::MOUSE, Point::new(6.0, 0.0), T),
            GestureStep::Started
        );
        assert!(g.is_dragging());
    }

    #[test]
    fn moves_after_start_report_deltas() {
        let mut g = DragGesture::default();
        g.press(PointerId::MOUSE, Point::new(10.0, 20.0));
        assert_eq!(
            g.update(PointerId::MOUSE, Point::new(10.0, 40.0), T),
            GestureStep::Started
        );
        assert_eq!(
            g.update(PointerId::MOUSE, Point::new(5.0, 35.0), T),
            GestureStep::Moved(Vec2::new(-5.0, -5.0))
        );
        assert_eq!(
            g.total_offset(Point::new(5.0, 35.0)),
            Some(Vec2::new(-5.0, 15.0))
        );
    }

    #[test]
    fn other_pointers_are_ignored() {
        let mut g = DragGesture::default();
        g.press(PointerId(1), Point::ZERO);

        assert_eq!(
            g.update(PointerId(2), Point::new(50.0, 50.0), T),
            GestureStep::Ignored
        );
        assert_eq!(g.release(PointerId(2)), None);
        assert!(g.is_pressed(), "foreign release must not end the press");
        assert_eq!(g.release(PointerId(1)), Some(false));
    }

    #[test]
    fn update_without_press_is_ignored() {
        let mut g = DragGesture::default();
        assert_eq!(
            g.update(PointerId::MOUSE, Point::new(50.0, 50.0), T),
            GestureStep::Ignored
        );
        assert!(g.last_pos.is_none());
    }

    #[test]
    fn press_replaces_previous_press() {
        let mut g = DragGesture::default();
        g.press(PointerId::MOUSE, Point::ZERO);
        g.update(PointerId::MOUSE, Point::new(30.0, 0.0), T);

        g.press(PointerId::MOUSE, Point::new(50.0, 60.0));
        assert!(!g.is_dragging());
        assert_eq!(
            g.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
    }

    #[test]
    fn end_on_fresh_gesture_is_safe() {
        let mut g = DragGesture::default();
        g.end();
        assert!(!g.is_pressed());
        assert!(g.start_pos.is_none() && g.last_pos.is_none());
    }
}
