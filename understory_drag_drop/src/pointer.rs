// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-neutral pointer input.
//!
//! Hosts translate their native mouse, touch and pen events into
//! [`PointerEvent`]s expressed in the same coordinate space the host uses for
//! element bounds (see [`DragHost`](crate::DragHost)).
//!
//! Mouse and touch input diverge in two places:
//!
//! - A mouse press only starts a drag with the primary button; touch and pen
//!   contacts always do.
//! - Several touch contacts can be active at once. Each carries its own
//!   [`PointerId`], and a draggable only follows the pointer that pressed it.

use kurbo::Point;

/// Identifies one pointer (the mouse, or one touch contact).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PointerId(pub u64);

impl PointerId {
    /// The single mouse pointer.
    pub const MOUSE: Self = Self(0);
}

/// Which kind of device produced the event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerKind {
    /// A mouse or trackpad.
    Mouse,
    /// A finger on a touch surface.
    Touch,
    /// A stylus.
    Pen,
}

/// Button associated with a press or release.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerButton {
    /// Left mouse button, or the primary contact of touch and pen.
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Auxiliary,
    /// Any other button, by platform index.
    Other(u16),
}

/// Stage of the pointer interaction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerPhase {
    /// Press (mouse down, touch start).
    Down,
    /// Motion (mouse move, touch move).
    Move,
    /// Release (mouse up, touch end).
    Up,
    /// The platform aborted the interaction (touch cancel, lost capture).
    Cancel,
}

/// A single pointer event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which pointer this is.
    pub pointer: PointerId,
    /// Device kind.
    pub kind: PointerKind,
    /// Interaction stage.
    pub phase: PointerPhase,
    /// Position in host coordinates.
    pub position: Point,
    /// Button for presses and releases; `None` for moves.
    pub button: Option<PointerButton>,
}

impl PointerEvent {
    /// Mouse press with the primary button.
    pub fn mouse_down(position: impl Into<Point>) -> Self {
        Self::mouse(PointerPhase::Down, position, Some(PointerButton::Primary))
    }

    /// Mouse press with an explicit button.
    pub fn mouse_down_with(position: impl Into<Point>, button: PointerButton) -> Self {
        Self::mouse(PointerPhase::Down, position, Some(button))
    }

    /// Mouse motion.
    pub fn mouse_move(position: impl Into<Point>) -> Self {
        Self::mouse(PointerPhase::Move, position, None)
    }

    /// Mouse release of the primary button.
    pub fn mouse_up(position: impl Into<Point>) -> Self {
        Self::mouse(PointerPhase::Up, position, Some(PointerButton::Primary))
    }

    /// Mouse release with an explicit button.
    pub fn mouse_up_with(position: impl Into<Point>, button: PointerButton) -> Self {
        Self::mouse(PointerPhase::Up, position, Some(button))
    }

    /// Mouse capture lost, e.g. the button was released outside the window.
    pub fn mouse_cancel(position: impl Into<Point>) -> Self {
        Self::mouse(PointerPhase::Cancel, position, None)
    }

    /// Touch contact start.
    pub fn touch_start(pointer: PointerId, position: impl Into<Point>) -> Self {
        Self::touch(pointer, PointerPhase::Down, position)
    }

    /// Touch contact motion.
    pub fn touch_move(pointer: PointerId, position: impl Into<Point>) -> Self {
        Self::touch(pointer, PointerPhase::Move, position)
    }

    /// Touch contact end.
    pub fn touch_end(pointer: PointerId, position: impl Into<Point>) -> Self {
        Self::touch(pointer, PointerPhase::Up, position)
    }

    /// Touch contact cancelled by the platform.
    pub fn touch_cancel(pointer: PointerId, position: impl Into<Point>) -> Self {
        Self::touch(pointer, PointerPhase::Cancel, position)
    }

    /// Returns `true` if this is a press that may begin a drag.
    ///
    /// Mouse presses qualify only with the primary button. Touch and pen
    /// presses qualify unless they report a non-primary button (pen barrel
    /// buttons, for example).
    pub fn is_primary_press(&self) -> bool {
        self.phase == PointerPhase::Down && self.is_primary_button()
    }

    /// Returns `true` if this is a release that may end a drag.
    ///
    /// The same button rule as [`PointerEvent::is_primary_press`] applies, so
    /// releasing a secondary mouse button mid-drag is ignored.
    pub fn is_primary_release(&self) -> bool {
        self.phase == PointerPhase::Up && self.is_primary_button()
    }

    fn is_primary_button(&self) -> bool {
        match self.kind {
            PointerKind::Mouse => self.button == Some(PointerButton::Primary),
            PointerKind::Touch | PointerKind::Pen => {
                matches!(self.button, None | Some(PointerButton::Primary))
            }
        }
    }

    fn mouse(
        phase: PointerPhase,
        position: impl Into<Point>,
        button: Option<PointerButton>,
    ) -> Self {
        Self {
            pointer: PointerId::MOUSE,
            kind: PointerKind::Mouse,
            phase,
            position: position.into(),
            button,
        }
    }

    fn touch(pointer: PointerId, phase: PointerPhase, position: impl Into<Point>) -> Self {
        Self {
            pointer,
            kind: PointerKind::Touch,
            phase,
            position: position.into(),
            button: None,
        }
    }
}
