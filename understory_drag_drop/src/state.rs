// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared drag state: the single record of the in-flight drag session.
//!
//! Every draggable and drop zone in an arena reads and writes the same
//! [`DragState`], and only through its named operations:
//!
//! - [`DragState::begin_drag`]: start a session. Refused while another
//!   session is active, which is what keeps "at most one drag" true even when
//!   two touches cross their thresholds in the same frame.
//! - [`DragState::set_hovered_zone`] / [`DragState::clear_hovered_zone`]:
//!   publish or retract "zone X is the target, at index I".
//! - [`DragState::end_drag`]: always returns to idle, whatever led there.
//!
//! Consumers derive their own view by comparing ids, e.g.
//! [`DragState::is_target`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use understory_drag_drop::{DragState, DragTypes};
//!
//! let mut state = DragState::<&str, &str>::new();
//! assert!(state.begin_drag("task-1", "todo", Size::new(200.0, 40.0), DragTypes::ITEM));
//!
//! // A second session is refused while the first is active.
//! assert!(!state.begin_drag("task-2", "todo", Size::new(200.0, 40.0), DragTypes::ITEM));
//!
//! state.set_hovered_zone("done", 0);
//! assert!(state.is_target(&"done"));
//!
//! let finished = state.end_drag().unwrap();
//! assert_eq!(finished.dragged_item(), &"task-1");
//! assert!(!state.is_active());
//! assert_eq!(state.drop_index(), 0);
//! ```

use kurbo::Size;

use crate::logging::{debug, trace};
use crate::types::DragTypes;

/// One drag gesture from threshold crossing to release.
///
/// Fields are read-only from outside the crate; in particular the dragged
/// size is captured once at [`DragState::begin_drag`] and has no setter.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession<I, Z> {
    dragged_item: I,
    source_zone: Z,
    target_zone: Option<Z>,
    drop_index: usize,
    dragged_size: Size,
    drag_type: DragTypes,
    started_revision: u64,
}

impl<I, Z> DragSession<I, Z> {
    /// The item being dragged.
    pub fn dragged_item(&self) -> &I {
        &self.dragged_item
    }

    /// The zone the item started in.
    pub fn source_zone(&self) -> &Z {
        &self.source_zone
    }

    /// The zone under the pointer, if any.
    pub fn target_zone(&self) -> Option<&Z> {
        self.target_zone.as_ref()
    }

    /// Insertion index in the target zone, counted without the dragged item.
    pub fn drop_index(&self) -> usize {
        self.drop_index
    }

    /// Geometry of the dragged element (or its handle) captured at drag start.
    pub fn dragged_size(&self) -> Size {
        self.dragged_size
    }

    /// Category of the dragged item.
    pub fn drag_type(&self) -> DragTypes {
        self.drag_type
    }

    /// The state revision at which this session began.
    ///
    /// Unique per session within one [`DragState`], so it tells consecutive
    /// sessions apart even when no idle revision was observed between them.
    pub fn started_revision(&self) -> u64 {
        self.started_revision
    }
}

/// The shared drag state of one arena.
///
/// Holds at most one [`DragSession`] plus a revision counter that bumps on
/// every observable change, so views can skip re-deriving styles when
/// nothing moved.
#[derive(Clone, Debug)]
pub struct DragState<I, Z> {
    session: Option<DragSession<I, Z>>,
    revision: u64,
}

impl<I, Z> Default for DragState<I, Z> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, Z> DragState<I, Z> {
    /// Creates an idle state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            session: None,
            revision: 0,
        }
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession<I, Z>> {
        self.session.as_ref()
    }

    /// The dragged item, if a session is active.
    #[must_use]
    pub fn dragged_item(&self) -> Option<&I> {
        self.session.as_ref().map(|s| &s.dragged_item)
    }

    /// The source zone, if a session is active.
    #[must_use]
    pub fn source_zone(&self) -> Option<&Z> {
        self.session.as_ref().map(|s| &s.source_zone)
    }

    /// The hovered zone; `None` when idle or over no zone.
    #[must_use]
    pub fn target_zone(&self) -> Option<&Z> {
        self.session.as_ref().and_then(|s| s.target_zone.as_ref())
    }

    /// The insertion index; `0` when idle.
    #[must_use]
    pub fn drop_index(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.drop_index)
    }

    /// The captured dragged size, if a session is active.
    #[must_use]
    pub fn dragged_size(&self) -> Option<Size> {
        self.session.as_ref().map(|s| s.dragged_size)
    }

    /// The dragged item's category, if a session is active.
    #[must_use]
    pub fn drag_type(&self) -> Option<DragTypes> {
        self.session.as_ref().map(|s| s.drag_type)
    }

    /// Monotonic change counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes the session and returns it, leaving the state idle.
    ///
    /// Always succeeds and is idempotent: calling it while idle returns
    /// `None` and changes nothing.
    pub fn end_drag(&mut self) -> Option<DragSession<I, Z>>
    where
        I: core::fmt::Debug,
    {
        let ended = self.session.take();
        if ended.is_some() {
            self.revision += 1;
            debug!(item = ?ended.as_ref().map(|s| &s.dragged_item), "drag session ended");
        }
        ended
    }

    /// Clears the hovered zone and resets the index to 0.
    pub fn clear_hovered_zone(&mut self) {
        if let Some(session) = &mut self.session {
            if session.target_zone.is_some() || session.drop_index != 0 {
                session.target_zone = None;
                session.drop_index = 0;
                self.revision += 1;
                trace!("hovered zone cleared");
            }
        }
    }
}

impl<I, Z> DragState<I, Z>
where
    I: core::fmt::Debug,
    Z: PartialEq + core::fmt::Debug,
{
    /// Starts a session for `item` from `source_zone`.
    ///
    /// Returns `false` and changes nothing if a session is already active.
    pub fn begin_drag(
        &mut self,
        item: I,
        source_zone: Z,
        size: Size,
        drag_type: DragTypes,
    ) -> bool {
        if self.session.is_some() {
            debug!(
                refused = ?item,
                active = ?self.dragged_item(),
                "drag refused: a session is already active"
            );
            return false;
        }
        debug!(item = ?item, zone = ?source_zone, ?size, "drag session started");
        self.revision += 1;
        self.session = Some(DragSession {
            dragged_item: item,
            source_zone,
            target_zone: None,
            drop_index: 0,
            dragged_size: size,
            drag_type,
            started_revision: self.revision,
        });
        true
    }

    /// Publishes `zone` as the target at `index`. No-op while idle.
    pub fn set_hovered_zone(&mut self, zone: Z, index: usize) {
        let Some(session) = &mut self.session else {
            return;
        };
        if session.target_zone.as_ref() == Some(&zone) && session.drop_index == index {
            return;
        }
        trace!(?zone, index, "hovered zone changed");
        session.target_zone = Some(zone);
        session.drop_index = index;
        self.revision += 1;
    }

    /// Returns `true` if a session is active and `zone` is its target.
    #[must_use]
    pub fn is_target(&self, zone: &Z) -> bool {
        self.target_zone() == Some(zone)
    }

    /// Returns `true` if a session is active and started in `zone`.
    #[must_use]
    pub fn is_source(&self, zone: &Z) -> bool {
        self.source_zone() == Some(zone)
    }
}
