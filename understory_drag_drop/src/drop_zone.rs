// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop-zone controller: hit-test a container and compute the insertion index.
//!
//! On every move of the dragging pointer each mounted zone hit-tests its own
//! container. A zone under the pointer computes where the dragged item would
//! land and publishes it with [`DragState::set_hovered_zone`]; a zone that was
//! the target and no longer contains the pointer retracts with
//! [`DragState::clear_hovered_zone`]. On release the target zone hands the
//! move to the host and ends the session.
//!
//! ## Insertion index
//!
//! Children are re-queried from the host on every move, in render order. The
//! dragged item is skipped so that the index refers to the list as it will be
//! once the item has left its old position. The index is the position of the
//! first remaining child whose vertical midpoint plus the configured margin
//! lies below the pointer, or the number of remaining children when the
//! pointer is below them all. It is therefore always in `0..=len`.
//!
//! Reordering within one zone and moving between zones use the same rule; a
//! same-zone move is a drop whose target equals its source.
//!
//! ```
//! use kurbo::Rect;
//! use understory_drag_drop::drop_index;
//!
//! let rows = [
//!     ("a", Rect::new(0.0, 0.0, 100.0, 40.0)),
//!     ("b", Rect::new(0.0, 40.0, 100.0, 80.0)),
//!     ("c", Rect::new(0.0, 80.0, 100.0, 120.0)),
//! ];
//! let children = rows.iter().map(|(id, r)| (id, *r));
//!
//! // Dragging "a" to just above "c"'s midpoint.
//! assert_eq!(drop_index(children.clone(), &"a", 95.0, 0.0), 1);
//! // Below everything appends.
//! assert_eq!(drop_index(children, &"a", 500.0, 0.0), 2);
//! ```

use core::fmt::Debug;

use kurbo::{Point, Rect};

use crate::config::DragConfig;
use crate::host::DragHost;
use crate::logging::debug;
use crate::state::DragState;
use crate::types::{DragOutcome, DragTypes};

/// Registration record of a drop zone.
#[derive(Clone, Debug, PartialEq)]
pub struct DropZoneConfig<Z> {
    /// The zone id.
    pub zone: Z,
    /// Categories this zone accepts (default: all).
    pub accepts: DragTypes,
    /// A disabled zone never claims the pointer.
    pub disabled: bool,
}

impl<Z> DropZoneConfig<Z> {
    /// An enabled zone accepting every category.
    pub fn new(zone: Z) -> Self {
        Self {
            zone,
            accepts: DragTypes::all(),
            disabled: false,
        }
    }

    /// Restricts the accepted categories.
    #[must_use]
    pub fn accepting(mut self, accepts: DragTypes) -> Self {
        self.accepts = accepts;
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Controller attached to one drop-zone container.
///
/// Holds nothing but its registration; "am I the target?" is always read back
/// from the shared [`DragState`].
#[derive(Clone, Debug)]
pub struct DropZone<Z> {
    config: DropZoneConfig<Z>,
}

impl<Z> DropZone<Z>
where
    Z: Clone + PartialEq + Debug,
{
    /// Creates a controller.
    pub fn new(config: DropZoneConfig<Z>) -> Self {
        Self { config }
    }

    /// The registration record.
    pub fn config(&self) -> &DropZoneConfig<Z> {
        &self.config
    }

    /// The zone id.
    pub fn zone(&self) -> &Z {
        &self.config.zone
    }

    /// Sets the disabled flag. Retracts the hover claim if this zone was the target.
    pub fn set_disabled<I>(&mut self, disabled: bool, state: &mut DragState<I, Z>)
    where
        I: Debug,
    {
        self.config.disabled = disabled;
        if disabled {
            self.release_claim(state);
        }
    }

    /// Returns `true` if this zone would accept the current session's item.
    pub fn accepts<I>(&self, state: &DragState<I, Z>) -> bool {
        !self.config.disabled
            && state
                .drag_type()
                .is_some_and(|kind| self.config.accepts.intersects(kind))
    }

    /// Hit-test area for container `bounds`, extended downward to
    /// `min_height` when the container is shorter.
    pub fn hit_area(bounds: Rect, min_height: f64) -> Rect {
        if bounds.height() < min_height {
            Rect::new(bounds.x0, bounds.y0, bounds.x1, bounds.y0 + min_height)
        } else {
            bounds
        }
    }

    /// Re-evaluate the pointer against this zone.
    ///
    /// Returns `true` if this zone claimed the pointer.
    pub fn on_pointer_move<I, H>(
        &self,
        position: Point,
        state: &mut DragState<I, Z>,
        config: &DragConfig,
        host: &mut H,
    ) -> bool
    where
        I: PartialEq + Debug,
        H: DragHost<I, Z> + ?Sized,
    {
        if !self.accepts(state) {
            self.release_claim(state);
            return false;
        }
        let Some(area) = host
            .zone_bounds(&self.config.zone)
            .map(|bounds| Self::hit_area(bounds, config.min_zone_height))
        else {
            self.release_claim(state);
            return false;
        };
        if !area.contains(position) {
            self.release_claim(state);
            return false;
        }
        let Some(dragged) = state.dragged_item() else {
            return false;
        };
        let mut scan = IndexScan::new(dragged, position.y, config.drop_margin);
        host.zone_children(&self.config.zone, &mut |child, rect| scan.visit(child, rect));
        let index = scan.finish();
        state.set_hovered_zone(self.config.zone.clone(), index);

        if let Some(autoscroll) = &config.autoscroll {
            let dy = autoscroll.step(area, position);
            if dy != 0.0 {
                host.scroll_zone(&self.config.zone, dy);
            }
        }
        true
    }

    /// Release of the dragging pointer.
    ///
    /// If this zone is the target, asks the host to move the item and ends the
    /// session whatever the host answers. Returns [`DragOutcome::Dropped`] in
    /// that case and `None` otherwise.
    pub fn on_pointer_up<I, H>(
        &self,
        state: &mut DragState<I, Z>,
        host: &mut H,
    ) -> Option<DragOutcome<I, Z>>
    where
        I: Clone + Debug,
        H: DragHost<I, Z> + ?Sized,
    {
        if !state.is_target(&self.config.zone) {
            return None;
        }
        let item = state.dragged_item()?.clone();
        let index = state.drop_index();
        let accepted = host.on_drop(&self.config.zone, &item, index);
        state.end_drag();
        debug!(?item, zone = ?self.config.zone, index, accepted, "dropped");
        Some(DragOutcome::Dropped {
            zone: self.config.zone.clone(),
            item,
            index,
            accepted,
        })
    }

    /// Retract this zone's hover claim, if it holds one.
    pub fn release_claim<I>(&self, state: &mut DragState<I, Z>)
    where
        I: Debug,
    {
        if state.is_target(&self.config.zone) {
            state.clear_hovered_zone();
        }
    }
}

/// Incremental insertion-index computation over children in render order.
///
/// Feed children with [`IndexScan::visit`] and read the result with
/// [`IndexScan::finish`]. [`drop_index`] is the one-shot form.
#[derive(Clone, Debug)]
pub struct IndexScan<'a, I> {
    dragged: &'a I,
    pointer_y: f64,
    margin: f64,
    seen: usize,
    found: Option<usize>,
}

impl<'a, I: PartialEq> IndexScan<'a, I> {
    /// Starts a scan for `dragged` with the pointer at `pointer_y`.
    pub fn new(dragged: &'a I, pointer_y: f64, margin: f64) -> Self {
        Self {
            dragged,
            pointer_y,
            margin,
            seen: 0,
            found: None,
        }
    }

    /// Feed the next child.
    pub fn visit(&mut self, child: &I, rect: Rect) {
        if self.found.is_some() || child == self.dragged {
            return;
        }
        if rect.center().y + self.margin > self.pointer_y {
            self.found = Some(self.seen);
        } else {
            self.seen += 1;
        }
    }

    /// The insertion index.
    pub fn finish(self) -> usize {
        self.found.unwrap_or(self.seen)
    }
}

/// Insertion index of `dragged` among `children` for a pointer at `pointer_y`.
///
/// `children` are `(id, bounds)` pairs in render order; `dragged` is skipped.
pub fn drop_index<'c, I, C>(children: C, dragged: &I, pointer_y: f64, margin: f64) -> usize
where
    I: PartialEq + 'c,
    C: IntoIterator<Item = (&'c I, Rect)>,
{
    let mut scan = IndexScan::new(dragged, pointer_y, margin);
    for (child, rect) in children {
        scan.visit(child, rect);
    }
    scan.finish()
}
