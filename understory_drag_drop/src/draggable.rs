// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draggable controller: turn one element's pointer input into a drag lifecycle.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle --down over handle--> Pressed --move past threshold--> Dragging
//!   ^                           |                                |
//!   +-------- up (click) -------+                                |
//!   +------------------ up / cancel / unmount / disable ---------+
//! ```
//!
//! When the threshold is crossed the controller captures the handle (or
//! element) bounds once, calls [`DragState::begin_drag`], and asks the host to
//! insert a placeholder and detach the element. If `begin_drag` is refused
//! because another session is active, the press is ignored until it is
//! released.
//!
//! While dragging, the detached element follows the pointer with the pointer
//! at its center. Every exit path from `Dragging` runs the same cleanup:
//! remove the placeholder, restore the element, and end the session if this
//! controller still owns it.

use core::fmt::Debug;

use kurbo::{Point, Rect, Size, Vec2};

use crate::config::DragConfig;
use crate::gesture::{DragGesture, GestureStep};
use crate::host::DragHost;
use crate::logging::debug;
use crate::pointer::{PointerEvent, PointerId};
use crate::state::DragState;
use crate::types::{DragOutcome, DragTypes};

/// Registration record of a draggable.
#[derive(Clone, Debug, PartialEq)]
pub struct DraggableConfig<I, Z> {
    /// The item this element renders.
    pub item: I,
    /// The zone that owns the item.
    pub zone: Z,
    /// Category matched against drop zones' accepted types.
    pub drag_type: DragTypes,
    /// Suppresses all drag behavior.
    pub disabled: bool,
    /// When `true`, only presses inside the host's handle bounds start a
    /// drag, and the handle bounds supply the dragged size.
    pub handle: bool,
}

impl<I, Z> DraggableConfig<I, Z> {
    /// An enabled draggable of [`DragTypes::ITEM`] without a handle.
    pub fn new(item: I, zone: Z) -> Self {
        Self {
            item,
            zone,
            drag_type: DragTypes::ITEM,
            disabled: false,
            handle: false,
        }
    }

    /// Sets the drag category.
    #[must_use]
    pub fn with_drag_type(mut self, drag_type: DragTypes) -> Self {
        self.drag_type = drag_type;
        self
    }

    /// Restricts drag initiation and geometry to the handle.
    #[must_use]
    pub fn with_handle(mut self) -> Self {
        self.handle = true;
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Phase {
    Idle,
    Pressed,
    /// Carries the element frame size used to center it on the pointer.
    Dragging { frame: Size },
    /// Crossed the threshold while another session was active.
    Refused,
}

/// Controller attached to one draggable element.
#[derive(Clone, Debug)]
pub struct Draggable<I, Z> {
    config: DraggableConfig<I, Z>,
    gesture: DragGesture,
    phase: Phase,
}

impl<I, Z> Draggable<I, Z>
where
    I: Clone + PartialEq + Debug,
    Z: Clone + PartialEq + Debug,
{
    /// Creates an idle controller.
    pub fn new(config: DraggableConfig<I, Z>) -> Self {
        Self {
            config,
            gesture: DragGesture::default(),
            phase: Phase::Idle,
        }
    }

    /// The registration record.
    pub fn config(&self) -> &DraggableConfig<I, Z> {
        &self.config
    }

    /// The item this controller drags.
    pub fn item(&self) -> &I {
        &self.config.item
    }

    /// Returns `true` between a press and either its release or the drag start.
    pub fn is_pressed(&self) -> bool {
        self.phase == Phase::Pressed
    }

    /// Returns `true` while this controller's element is being dragged.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Returns `true` if this controller is dragging with `pointer`.
    pub fn is_dragging_with(&self, pointer: PointerId) -> bool {
        self.is_dragging() && self.gesture.owns(pointer)
    }

    /// The pointer currently owning this controller's press, if any.
    pub fn pointer(&self) -> Option<PointerId> {
        self.gesture.pointer
    }

    /// Returns `true` if a press at `position` would land on the handle (or
    /// the element when no handle is configured). Always `false` when disabled.
    pub fn hit_test<H>(&self, position: Point, host: &H) -> bool
    where
        H: DragHost<I, Z> + ?Sized,
    {
        !self.config.disabled && self.grab_bounds(host).is_some_and(|r| r.contains(position))
    }

    /// Pointer-down on this element. Records the press; never starts a drag.
    ///
    /// Returns `true` if the press was recorded.
    pub fn on_pointer_down<H>(&mut self, event: &PointerEvent, host: &H) -> bool
    where
        H: DragHost<I, Z> + ?Sized,
    {
        if self.phase != Phase::Idle
            || !event.is_primary_press()
            || !self.hit_test(event.position, host)
        {
            return false;
        }
        self.gesture.press(event.pointer, event.position);
        self.phase = Phase::Pressed;
        true
    }

    /// Pointer-move anywhere in the document.
    ///
    /// Returns [`DragOutcome::Started`] on the move that begins the session.
    pub fn on_pointer_move<H>(
        &mut self,
        event: &PointerEvent,
        state: &mut DragState<I, Z>,
        config: &DragConfig,
        host: &mut H,
    ) -> Option<DragOutcome<I, Z>>
    where
        H: DragHost<I, Z> + ?Sized,
    {
        if self.config.disabled {
            return None;
        }
        let step = self
            .gesture
            .update(event.pointer, event.position, config.drag_threshold);
        match (self.phase, step) {
            (Phase::Pressed, GestureStep::Started) => self.start(event.position, state, host),
            (Phase::Dragging { frame }, GestureStep::Moved(_)) => {
                host.move_detached(&self.config.item, centered(event.position, frame));
                None
            }
            _ => None,
        }
    }

    /// Pointer-up anywhere in the document.
    ///
    /// Returns [`DragOutcome::Click`] for a release below the threshold, and
    /// [`DragOutcome::Cancelled`] if this controller still owned the session
    /// (no drop zone finalized it). Releases by other pointers, and mouse
    /// releases of a non-primary button, are ignored.
    pub fn on_pointer_up<H>(
        &mut self,
        event: &PointerEvent,
        state: &mut DragState<I, Z>,
        host: &mut H,
    ) -> Option<DragOutcome<I, Z>>
    where
        H: DragHost<I, Z> + ?Sized,
    {
        if !event.is_primary_release() || self.gesture.release(event.pointer).is_none() {
            return None;
        }
        match core::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Pressed => Some(DragOutcome::Click {
                item: self.config.item.clone(),
            }),
            Phase::Dragging { .. } => self.finish(state, host),
            Phase::Idle | Phase::Refused => None,
        }
    }

    /// Platform cancellation of `pointer` (touch cancel, lost capture).
    pub fn on_pointer_cancel<H>(
        &mut self,
        pointer: PointerId,
        state: &mut DragState<I, Z>,
        host: &mut H,
    ) -> Option<DragOutcome<I, Z>>
    where
        H: DragHost<I, Z> + ?Sized,
    {
        if !self.gesture.owns(pointer) {
            return None;
        }
        self.cancel(state, host)
    }

    /// Abandon any press or drag.
    ///
    /// This is the unmount path. It is idempotent: a second call, or a call
    /// on an idle controller, does nothing.
    pub fn cancel<H>(
        &mut self,
        state: &mut DragState<I, Z>,
        host: &mut H,
    ) -> Option<DragOutcome<I, Z>>
    where
        H: DragHost<I, Z> + ?Sized,
    {
        self.gesture.end();
        match core::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Dragging { .. } => self.finish(state, host),
            Phase::Idle | Phase::Pressed | Phase::Refused => None,
        }
    }

    /// Sets the disabled flag. Disabling mid-drag cancels the drag.
    pub fn set_disabled<H>(
        &mut self,
        disabled: bool,
        state: &mut DragState<I, Z>,
        host: &mut H,
    ) -> Option<DragOutcome<I, Z>>
    where
        H: DragHost<I, Z> + ?Sized,
    {
        self.config.disabled = disabled;
        if disabled {
            self.cancel(state, host)
        } else {
            None
        }
    }

    fn grab_bounds<H>(&self, host: &H) -> Option<Rect>
    where
        H: DragHost<I, Z> + ?Sized,
    {
        if self.config.handle {
            host.handle_bounds(&self.config.item)
        } else {
            host.item_bounds(&self.config.item)
        }
    }

    fn start<H>(
        &mut self,
        position: Point,
        state: &mut DragState<I, Z>,
        host: &mut H,
    ) -> Option<DragOutcome<I, Z>>
    where
        H: DragHost<I, Z> + ?Sized,
    {
        let item = &self.config.item;
        let Some(grab) = self.grab_bounds(host) else {
            debug!(?item, "drag not started: element is not rendered");
            self.phase = Phase::Refused;
            return None;
        };
        if !state.begin_drag(
            item.clone(),
            self.config.zone.clone(),
            grab.size(),
            self.config.drag_type,
        ) {
            self.phase = Phase::Refused;
            return None;
        }
        let frame = host.item_bounds(item).unwrap_or(grab);
        host.insert_placeholder(item, frame.size());
        host.detach(item, frame);
        host.move_detached(item, centered(position, frame.size()));
        self.phase = Phase::Dragging {
            frame: frame.size(),
        };
        Some(DragOutcome::Started {
            item: item.clone(),
            zone: self.config.zone.clone(),
        })
    }

    /// Cleanup shared by release, cancellation, unmount and disable.
    fn finish<H>(
        &mut self,
        state: &mut DragState<I, Z>,
        host: &mut H,
    ) -> Option<DragOutcome<I, Z>>
    where
        H: DragHost<I, Z> + ?Sized,
    {
        let item = &self.config.item;
        host.remove_placeholder(item);
        host.restore(item);
        if state.dragged_item() != Some(item) {
            // A drop zone already finalized the session.
            return None;
        }
        state.end_drag();
        debug!(?item, "drag cancelled");
        Some(DragOutcome::Cancelled { item: item.clone() })
    }
}

/// Top-left corner that puts `pointer` at the center of a `frame`-sized box.
fn centered(pointer: Point, frame: Size) -> Point {
    pointer - Vec2::new(frame.width / 2.0, frame.height / 2.0)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::host::testing::{Board, Effect, HANDLE, ITEM_HEIGHT};
    use crate::pointer::PointerButton;

    type State = DragState<&'static str, &'static str>;

    fn board() -> Board {
        Board::new().column("todo", 400.0, &["task-1", "task-2", "task-3"])
    }

    fn draggable(item: &'static str) -> Draggable<&'static str, &'static str> {
        Draggable::new(DraggableConfig::new(item, "todo"))
    }

    #[test]
    fn press_does_not_start_a_drag() {
        let mut host = board();
        let mut state = State::new();
        let mut d = draggable("task-1");

        let at = host.center_of("task-1");
        assert!(d.on_pointer_down(&PointerEvent::mouse_down(at), &host));
        assert!(d.is_pressed());
        assert!(!state.is_active());
        assert!(host.effects.is_empty());

        let out = d.on_pointer_up(&PointerEvent::mouse_up(at), &mut state, &mut host);
        assert_eq!(out, Some(DragOutcome::Click { item: "task-1" }));
    }

    #[test]
    fn small_move_is_a_click() {
        let mut host = board();
        let mut state = State::new();
        let config = DragConfig::default();
        let mut d = draggable("task-2");

        let at = host.center_of("task-2");
        d.on_pointer_down(&PointerEvent::mouse_down(at), &host);
        let moved = at + Vec2::new(2.0, 0.0);
        assert!(
            d.on_pointer_move(&PointerEvent::mouse_move(moved), &mut state, &config, &mut host)
                .is_none()
        );
        assert!(!state.is_active());

        let out = d.on_pointer_up(&PointerEvent::mouse_up(moved), &mut state, &mut host);
        assert_eq!(out, Some(DragOutcome::Click { item: "task-2" }));
        assert!(host.effects.is_empty(), "a click has no drag side effects");
    }

    #[test]
    fn crossing_threshold_begins_session_and_detaches() {
        let mut host = board();
        let mut state = State::new();
        let config = DragConfig::default();
        let mut d = draggable("task-2");

        let at = host.center_of("task-2");
        d.on_pointer_down(&PointerEvent::mouse_down(at), &host);
        let moved = at + Vec2::new(0.0, 10.0);
        let ev = PointerEvent::mouse_move(moved);
        let out = d.on_pointer_move(&ev, &mut state, &config, &mut host);

        assert_eq!(
            out,
            Some(DragOutcome::Started {
                item: "task-2",
                zone: "todo"
            })
        );
        assert!(d.is_dragging());
        let frame = host.item_bounds(&"task-2").unwrap();
        assert_eq!(state.dragged_size(), Some(frame.size()));
        assert_eq!(
            host.effects,
            vec![
                Effect::Placeholder("task-2", frame.size()),
                Effect::Detach("task-2", frame),
                Effect::Move("task-2", moved - Vec2::new(90.0, 20.0)),
            ]
        );
    }

    #[test]
    fn detached_element_is_centered_on_pointer() {
        let mut host = board();
        let mut state = State::new();
        let config = DragConfig::default();
        let mut d = draggable("task-1");

        d.on_pointer_down(&PointerEvent::mouse_down((90.0, 20.0)), &host);
        d.on_pointer_move(&PointerEvent::mouse_move((90.0, 40.0)), &mut state, &config, &mut host);
        host.effects.clear();
        let ev = PointerEvent::mouse_move((300.0, 250.0));
        d.on_pointer_move(&ev, &mut state, &config, &mut host);

        assert_eq!(host.effects, vec![Effect::Move("task-1", Point::new(210.0, 230.0))]);
    }

    #[test]
    fn geometry_is_captured_once() {
        let mut host = board();
        let mut state = State::new();
        let config = DragConfig::default();
        let mut d = draggable("task-1");

        d.on_pointer_down(&PointerEvent::mouse_down((90.0, 20.0)), &host);
        d.on_pointer_move(&PointerEvent::mouse_move((90.0, 40.0)), &mut state, &config, &mut host);
        let captured = state.dragged_size();

        // The element moves to a wider column mid-drag.
        host.columns[0].items.clear();
        for x in [100.0, 200.0, 300.0] {
            d.on_pointer_move(&PointerEvent::mouse_move((x, 60.0)), &mut state, &config, &mut host);
            assert_eq!(state.dragged_size(), captured);
        }
    }

    #[test]
    fn release_while_dragging_cancels_and_restores() {
        let mut host = board();
        let mut state = State::new();
        let config = DragConfig::default();
        let mut d = draggable("task-1");

        d.on_pointer_down(&PointerEvent::mouse_down((90.0, 20.0)), &host);
        d.on_pointer_move(&PointerEvent::mouse_move((90.0, 40.0)), &mut state, &config, &mut host);
        host.effects.clear();

        let out = d.on_pointer_up(&PointerEvent::mouse_up((90.0, 40.0)), &mut state, &mut host);
        assert_eq!(out, Some(DragOutcome::Cancelled { item: "task-1" }));
        assert!(!state.is_active());
        assert!(!d.is_dragging());
        assert_eq!(
            host.effects,
            vec![Effect::RemovePlaceholder("task-1"), Effect::Restore("task-1")]
        );
    }

    #[test]
    fn release_after_zone_finalized_only_cleans_up() {
        let mut host = board();
        let mut state = State::new();
        let config = DragConfig::default();
        let mut d = draggable("task-1");

        d.on_pointer_down(&PointerEvent::mouse_down((90.0, 20.0)), &host);
        d.on_pointer_move(&PointerEvent::mouse_move((90.0, 40.0)), &mut state, &config, &mut host);
        // A drop zone ended the session first.
        state.end_drag();

        let out = d.on_pointer_up(&PointerEvent::mouse_up((90.0, 40.0)), &mut state, &mut host);
        assert_eq!(out, None);
        assert!(host.effects.contains(&Effect::Restore("task-1")));
    }

    #[test]
    fn second_drag_is_refused_until_release() {
        let mut host = board();
        let mut state = State::new();
        let config = DragConfig::default();
        let mut first = draggable("task-1");
        let mut second = draggable("task-2");
        let a = PointerId(1);
        let b = PointerId(2);

        first.on_pointer_down(&PointerEvent::touch_start(a, (90.0, 20.0)), &host);
        second.on_pointer_down(&PointerEvent::touch_start(b, (90.0, 60.0)), &host);

        let ev = PointerEvent::touch_move(a, (90.0, 30.0));
        assert!(
            first
                .on_pointer_move(&ev, &mut state, &config, &mut host)
                .is_some()
        );
        let ev = PointerEvent::touch_move(b, (90.0, 80.0));
        assert!(
            second
                .on_pointer_move(&ev, &mut state, &config, &mut host)
                .is_none()
        );
        assert_eq!(state.dragged_item(), Some(&"task-1"));
        assert!(!second.is_dragging());

        // Releasing the refused gesture is neither a click nor a cancellation.
        let ev = PointerEvent::touch_end(b, (90.0, 80.0));
        let out = second.on_pointer_up(&ev, &mut state, &mut host);
        assert_eq!(out, None);
        assert_eq!(state.dragged_item(), Some(&"task-1"));
    }

    #[test]
    fn handle_restricts_press_and_geometry() {
        let mut host = board();
        let mut state = State::new();
        let config = DragConfig::default();
        let mut d = Draggable::new(DraggableConfig::new("task-1", "todo").with_handle());

        // Center of the card is outside the 16px grip.
        assert!(!d.on_pointer_down(&PointerEvent::mouse_down((90.0, 20.0)), &host));

        assert!(d.on_pointer_down(&PointerEvent::mouse_down((8.0, 8.0)), &host));
        d.on_pointer_move(&PointerEvent::mouse_move((8.0, 30.0)), &mut state, &config, &mut host);
        assert_eq!(state.dragged_size(), Some(Size::new(HANDLE, HANDLE)));
        // The placeholder still preserves the whole card's layout.
        assert!(
            host.effects
                .contains(&Effect::Placeholder("task-1", Size::new(180.0, ITEM_HEIGHT)))
        );
    }

    #[test]
    fn disabled_draggable_ignores_input() {
        let host = board();
        let mut d = Draggable::new(DraggableConfig::new("task-1", "todo").with_disabled(true));
        assert!(!d.on_pointer_down(&PointerEvent::mouse_down((90.0, 20.0)), &host));
        assert!(!d.hit_test(Point::new(90.0, 20.0), &host));
    }

    #[test]
    fn secondary_button_does_not_press() {
        let host = board();
        let mut d = draggable("task-1");
        let ev = PointerEvent::mouse_down_with((90.0, 20.0), PointerButton::Secondary);
        assert!(!d.on_pointer_down(&ev, &host));
    }

    #[test]
    fn disabling_mid_drag_cancels() {
        let mut host = board();
        let mut state = State::new();
        let config = DragConfig::default();
        let mut d = draggable("task-1");

        d.on_pointer_down(&PointerEvent::mouse_down((90.0, 20.0)), &host);
        d.on_pointer_move(&PointerEvent::mouse_move((90.0, 40.0)), &mut state, &config, &mut host);

        let out = d.set_disabled(true, &mut state, &mut host);
        assert_eq!(out, Some(DragOutcome::Cancelled { item: "task-1" }));
        assert!(!state.is_active());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut host = board();
        let mut state = State::new();
        let config = DragConfig::default();
        let mut d = draggable("task-1");

        d.on_pointer_down(&PointerEvent::mouse_down((90.0, 20.0)), &host);
        d.on_pointer_move(&PointerEvent::mouse_move((90.0, 40.0)), &mut state, &config, &mut host);

        assert!(d.cancel(&mut state, &mut host).is_some());
        assert!(d.cancel(&mut state, &mut host).is_none());
        assert!(!state.is_active());
        // Release after cancellation does nothing either.
        let out = d.on_pointer_up(&PointerEvent::mouse_up((90.0, 40.0)), &mut state, &mut host);
        assert_eq!(out, None);
    }

    #[test]
    fn foreign_pointer_cancel_is_ignored() {
        let mut host = board();
        let mut state = State::new();
        let config = DragConfig::default();
        let mut d = draggable("task-1");
        let a = PointerId(3);

        d.on_pointer_down(&PointerEvent::touch_start(a, (90.0, 20.0)), &host);
        let ev = PointerEvent::touch_move(a, (90.0, 40.0));
        d.on_pointer_move(&ev, &mut state, &config, &mut host);

        assert!(d.on_pointer_cancel(PointerId(4), &mut state, &mut host).is_none());
        assert!(d.is_dragging_with(a));
        assert_eq!(
            d.on_pointer_cancel(a, &mut state, &mut host),
            Some(DragOutcome::Cancelled { item: "task-1" })
        );
    }
}
