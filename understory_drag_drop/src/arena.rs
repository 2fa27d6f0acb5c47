// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag arena: one shared state plus every mounted controller, with event dispatch.
//!
//! A [`DragArena`] is the scoped provider of a [`DragState`]. Independent
//! arenas never observe each other's drags. Hosts mount a [`Draggable`] per
//! draggable element and a [`DropZone`] per container, then forward every
//! pointer event to [`DragArena::handle`].
//!
//! ## Dispatch order
//!
//! - Down: the last-mounted draggable whose handle contains the pointer takes
//!   the press.
//! - Move: every draggable sees the move first (this is where a drag starts).
//!   Then, if the moving pointer drives the session, zones re-hit-test from
//!   the last mounted to the first; the first zone that claims the pointer
//!   wins.
//! - Up: zones are re-hit-tested at the release position, the target zone
//!   hands the drop to the host and ends the session, and then every
//!   draggable cleans up. A draggable that still owns the session afterwards
//!   was released outside every zone and cancels it.
//! - Cancel: the owning draggable runs its cancellation path.
//!
//! Registrations are the arena's listeners. Unmounting a controller removes
//! it from dispatch immediately, even mid-drag, and
//! [`DragArena::listener_count`] drops back to zero once everything is
//! unmounted.

use core::fmt::Debug;

use kurbo::Point;

use crate::config::DragConfig;
use crate::draggable::{Draggable, DraggableConfig};
use crate::drop_zone::{DropZone, DropZoneConfig};
use crate::error::ArenaError;
use crate::host::DragHost;
use crate::logging::debug;
use crate::pointer::{PointerEvent, PointerId, PointerPhase};
use crate::slots::Slots;
use crate::state::DragState;
use crate::types::{DragOutcome, DraggableKey, DropZoneKey};

/// Shared drag state and the controllers coordinating through it.
///
/// # Example
///
/// ```
/// use kurbo::Rect;
/// use understory_drag_drop::{
///     DragArena, DragHost, DragOutcome, DraggableConfig, DropZoneConfig, PointerEvent,
/// };
///
/// struct List(Vec<&'static str>);
///
/// impl DragHost<&'static str, &'static str> for List {
///     fn item_bounds(&self, item: &&'static str) -> Option<Rect> {
///         let i = self.0.iter().position(|it| it == item)? as f64;
///         Some(Rect::new(0.0, i * 40.0, 200.0, i * 40.0 + 40.0))
///     }
///     fn zone_bounds(&self, _zone: &&'static str) -> Option<Rect> {
///         Some(Rect::new(0.0, 0.0, 200.0, 400.0))
///     }
///     fn zone_children(&self, _zone: &&'static str, visit: &mut dyn FnMut(&&'static str, Rect)) {
///         for item in &self.0 {
///             visit(item, self.item_bounds(item).unwrap());
///         }
///     }
///     fn on_drop(&mut self, _zone: &&'static str, item: &&'static str, index: usize) -> bool {
///         self.0.retain(|it| it != item);
///         self.0.insert(index, *item);
///         true
///     }
/// }
///
/// let mut list = List(vec!["a", "b", "c"]);
/// let mut arena = DragArena::default();
/// for item in ["a", "b", "c"] {
///     arena.mount_draggable(DraggableConfig::new(item, "list"));
/// }
/// arena.mount_drop_zone(DropZoneConfig::new("list")).unwrap();
///
/// // Drag "a" below "c".
/// arena.handle(&PointerEvent::mouse_down((100.0, 20.0)), &mut list);
/// arena.handle(&PointerEvent::mouse_move((100.0, 60.0)), &mut list);
/// arena.handle(&PointerEvent::mouse_move((100.0, 110.0)), &mut list);
/// let outcome = arena.handle(&PointerEvent::mouse_up((100.0, 110.0)), &mut list);
///
/// assert!(matches!(outcome, Some(DragOutcome::Dropped { index: 2, .. })));
/// assert_eq!(list.0, ["b", "c", "a"]);
/// assert!(!arena.state().is_active());
/// ```
#[derive(Clone, Debug)]
pub struct DragArena<I, Z> {
    config: DragConfig,
    state: DragState<I, Z>,
    draggables: Slots<Draggable<I, Z>>,
    zones: Slots<DropZone<Z>>,
}

impl<I, Z> Default for DragArena<I, Z> {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

impl<I, Z> DragArena<I, Z> {
    /// Creates an empty arena.
    pub const fn new(config: DragConfig) -> Self {
        Self {
            config,
            state: DragState::new(),
            draggables: Slots::new(),
            zones: Slots::new(),
        }
    }

    /// The arena's tuning.
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// The shared drag state, for rendering.
    pub fn state(&self) -> &DragState<I, Z> {
        &self.state
    }

    /// Number of mounted controllers.
    pub fn listener_count(&self) -> usize {
        self.draggables.len() + self.zones.len()
    }

    /// The draggable mounted under `key`.
    pub fn draggable(&self, key: DraggableKey) -> Option<&Draggable<I, Z>> {
        self.draggables.get(key.0)
    }

    /// The drop zone mounted under `key`.
    pub fn drop_zone(&self, key: DropZoneKey) -> Option<&DropZone<Z>> {
        self.zones.get(key.0)
    }
}

impl<I, Z> DragArena<I, Z>
where
    I: Clone + PartialEq + Debug,
    Z: Clone + PartialEq + Debug,
{
    /// Registers a draggable element.
    pub fn mount_draggable(&mut self, config: DraggableConfig<I, Z>) -> DraggableKey {
        debug!(item = ?config.item, zone = ?config.zone, "draggable mounted");
        DraggableKey(self.draggables.insert(Draggable::new(config)))
    }

    /// Unregisters a draggable.
    ///
    /// If it was dragging, the drag is cancelled with the usual cleanup and
    /// [`DragOutcome::Cancelled`] is returned.
    pub fn unmount_draggable<H>(
        &mut self,
        key: DraggableKey,
        host: &mut H,
    ) -> Result<Option<DragOutcome<I, Z>>, ArenaError<Z>>
    where
        H: DragHost<I, Z> + ?Sized,
    {
        let mut draggable = self
            .draggables
            .remove(key.0)
            .ok_or(ArenaError::StaleDraggable(key))?;
        debug!(item = ?draggable.item(), "draggable unmounted");
        Ok(draggable.cancel(&mut self.state, host))
    }

    /// Registers a drop zone.
    ///
    /// Fails if a zone with the same id is already mounted in this arena.
    pub fn mount_drop_zone(
        &mut self,
        config: DropZoneConfig<Z>,
    ) -> Result<DropZoneKey, ArenaError<Z>> {
        if self.zones.iter().any(|(_, zone)| *zone.zone() == config.zone) {
            return Err(ArenaError::DuplicateZone(config.zone));
        }
        debug!(zone = ?config.zone, "drop zone mounted");
        Ok(DropZoneKey(self.zones.insert(DropZone::new(config))))
    }

    /// Unregisters a drop zone, retracting its hover claim if it holds one.
    pub fn unmount_drop_zone(&mut self, key: DropZoneKey) -> Result<(), ArenaError<Z>> {
        let zone = self
            .zones
            .remove(key.0)
            .ok_or(ArenaError::StaleDropZone(key))?;
        debug!(zone = ?zone.zone(), "drop zone unmounted");
        zone.release_claim(&mut self.state);
        Ok(())
    }

    /// Enables or disables a draggable. Disabling mid-drag cancels the drag.
    pub fn set_draggable_disabled<H>(
        &mut self,
        key: DraggableKey,
        disabled: bool,
        host: &mut H,
    ) -> Result<Option<DragOutcome<I, Z>>, ArenaError<Z>>
    where
        H: DragHost<I, Z> + ?Sized,
    {
        let draggable = self
            .draggables
            .get_mut(key.0)
            .ok_or(ArenaError::StaleDraggable(key))?;
        Ok(draggable.set_disabled(disabled, &mut self.state, host))
    }

    /// Enables or disables a drop zone. A disabled zone drops its hover claim.
    pub fn set_drop_zone_disabled(
        &mut self,
        key: DropZoneKey,
        disabled: bool,
    ) -> Result<(), ArenaError<Z>> {
        let zone = self
            .zones
            .get_mut(key.0)
            .ok_or(ArenaError::StaleDropZone(key))?;
        zone.set_disabled(disabled, &mut self.state);
        Ok(())
    }

    /// Dispatches one pointer event to the mounted controllers.
    ///
    /// A primary press by a pointer that still holds an earlier press (its
    /// release was never delivered) abandons that earlier press first, and
    /// returns [`DragOutcome::Cancelled`] if it had become a drag.
    pub fn handle<H>(&mut self, event: &PointerEvent, host: &mut H) -> Option<DragOutcome<I, Z>>
    where
        H: DragHost<I, Z> + ?Sized,
    {
        match event.phase {
            PointerPhase::Down => self.press(event, host),
            PointerPhase::Move => {
                let mut started = None;
                for draggable in self.draggables.values_mut() {
                    if let Some(outcome) =
                        draggable.on_pointer_move(event, &mut self.state, &self.config, host)
                    {
                        started = Some(outcome);
                    }
                }
                if self.drives_session(event.pointer) {
                    self.track_zones(event.position, host);
                }
                started
            }
            PointerPhase::Up if !event.is_primary_release() => None,
            PointerPhase::Up => {
                let mut outcome = None;
                if self.drives_session(event.pointer) {
                    self.track_zones(event.position, host);
                    for zone in self.zones.values_mut() {
                        if let Some(dropped) = zone.on_pointer_up(&mut self.state, host) {
                            outcome = Some(dropped);
                        }
                    }
                }
                for draggable in self.draggables.values_mut() {
                    if let Some(cleanup) = draggable.on_pointer_up(event, &mut self.state, host) {
                        outcome.get_or_insert(cleanup);
                    }
                }
                outcome
            }
            PointerPhase::Cancel => {
                let mut outcome = None;
                for draggable in self.draggables.values_mut() {
                    if let Some(cancelled) =
                        draggable.on_pointer_cancel(event.pointer, &mut self.state, host)
                    {
                        outcome = Some(cancelled);
                    }
                }
                outcome
            }
        }
    }

    /// Abandons every press and any drag in progress, without a drop.
    pub fn cancel<H>(&mut self, host: &mut H) -> Option<DragOutcome<I, Z>>
    where
        H: DragHost<I, Z> + ?Sized,
    {
        let mut outcome = None;
        for draggable in self.draggables.values_mut() {
            if let Some(cancelled) = draggable.cancel(&mut self.state, host) {
                outcome = Some(cancelled);
            }
        }
        // A session whose draggable was never mounted here still ends.
        self.state.end_drag();
        outcome
    }

    fn press<H>(&mut self, event: &PointerEvent, host: &mut H) -> Option<DragOutcome<I, Z>>
    where
        H: DragHost<I, Z> + ?Sized,
    {
        if !event.is_primary_press() {
            return None;
        }
        let mut stale = None;
        for draggable in self.draggables.values_mut() {
            if draggable.pointer() == Some(event.pointer) {
                debug!(item = ?draggable.item(), "abandoning press whose release was lost");
                if let Some(cancelled) = draggable.cancel(&mut self.state, host) {
                    stale = Some(cancelled);
                }
            }
        }
        let hit = self
            .draggables
            .values_mut()
            .rev()
            .find(|draggable| draggable.hit_test(event.position, host));
        if let Some(draggable) = hit {
            draggable.on_pointer_down(event, host);
        }
        stale
    }

    fn drives_session(&self, pointer: PointerId) -> bool {
        self.draggables
            .iter()
            .any(|(_, draggable)| draggable.is_dragging_with(pointer))
    }

    fn track_zones<H>(&mut self, position: Point, host: &mut H)
    where
        H: DragHost<I, Z> + ?Sized,
    {
        let mut claimed = false;
        for zone in self.zones.values_mut().rev() {
            if claimed {
                continue;
            }
            claimed = zone.on_pointer_move(position, &mut self.state, &self.config, host);
        }
    }
}
