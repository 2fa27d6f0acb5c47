// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The platform boundary: geometry queries, presentation hooks and the drop callback.
//!
//! The controllers never touch a DOM or scene graph. Everything they need from
//! the rendering layer goes through [`DragHost`], in one coordinate space shared
//! with [`PointerEvent::position`](crate::PointerEvent::position):
//!
//! - Geometry is queried live on every event; nothing is cached across events
//!   except the dragged size captured at drag start.
//! - Presentation hooks (placeholder, detach, move, restore, scroll) default
//!   to no-ops, so hosts that render purely from [`DragState`](crate::DragState)
//!   and [`ReorderPreview`](crate::ReorderPreview) only implement the queries.
//! - [`DragHost::on_drop`] is the single externally observable effect of a drag.

use kurbo::{Point, Rect, Size};

/// Collaborator that owns the rendered elements and the item data.
pub trait DragHost<I, Z> {
    /// Current bounds of the element rendering `item`, or `None` if it is not rendered.
    fn item_bounds(&self, item: &I) -> Option<Rect>;

    /// Current bounds of `item`'s drag handle.
    ///
    /// Only consulted for draggables configured with a handle. Defaults to
    /// [`DragHost::item_bounds`].
    fn handle_bounds(&self, item: &I) -> Option<Rect> {
        self.item_bounds(item)
    }

    /// Current bounds of the container of `zone`, or `None` if it is not rendered.
    fn zone_bounds(&self, zone: &Z) -> Option<Rect>;

    /// Visit the orderable children currently rendered in `zone`, in render order.
    ///
    /// The dragged item may be reported at its original position; the drop
    /// index computation skips it. Placeholders must not be reported.
    fn zone_children(&self, zone: &Z, visit: &mut dyn FnMut(&I, Rect));

    /// Move `item` to `index` in `zone`, the index counted without `item`.
    ///
    /// The return value is informational: drag state is reset either way. A
    /// host that declines the move must leave its own data unchanged.
    fn on_drop(&mut self, zone: &Z, item: &I, index: usize) -> bool;

    /// Insert an invisible placeholder of `size` where `item` was laid out.
    fn insert_placeholder(&mut self, item: &I, size: Size) {
        let _ = (item, size);
    }

    /// Remove the placeholder inserted for `item`.
    fn remove_placeholder(&mut self, item: &I) {
        let _ = item;
    }

    /// Lift `item` out of flow: render it above everything at `frame` and stop
    /// it from receiving pointer hits.
    fn detach(&mut self, item: &I, frame: Rect) {
        let _ = (item, frame);
    }

    /// Move the detached `item` so its top-left corner is at `origin`.
    fn move_detached(&mut self, item: &I, origin: Point) {
        let _ = (item, origin);
    }

    /// Undo [`DragHost::detach`].
    fn restore(&mut self, item: &I) {
        let _ = item;
    }

    /// Scroll the container of `zone` vertically by `dy`.
    fn scroll_zone(&mut self, zone: &Z, dy: f64) {
        let _ = (zone, dy);
    }
}
