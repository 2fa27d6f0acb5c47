// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drag_drop --heading-base-level=0

//! Understory Drag Drop: pointer-driven drag-and-drop coordination.
//!
//! This crate turns raw pointer input into drag sessions that move items
//! between (or within) ordered containers, such as kanban columns or sortable
//! lists. It owns no rendering; the host describes geometry and applies the
//! result through the [`DragHost`] trait.
//!
//! The pieces:
//!
//! - [`DragState`]: the single record of the in-flight drag. At most one
//!   session exists at a time, and ending it always returns to a clean idle
//!   state.
//! - [`Draggable`]: per-element controller. Distinguishes clicks from drags
//!   with a distance threshold, captures the dragged size once, and asks the
//!   host to insert a placeholder and detach the element while it follows the
//!   pointer.
//! - [`DropZone`]: per-container controller. Hit-tests the container and
//!   computes the insertion index from the live child geometry, then hands
//!   the finished drop to [`DragHost::on_drop`].
//! - [`ReorderPreview`]: derived per-item offsets that part a list at the
//!   insertion point, plus the container padding for an incoming item.
//! - [`DragArena`]: the scoped provider. Owns one [`DragState`] and the
//!   mounted controllers, and dispatches each [`PointerEvent`] to them in a
//!   fixed order.
//!
//! Controllers never call each other; all coordination goes through the
//! shared state. Independent arenas never interact.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use understory_drag_drop::{
//!     DragArena, DragHost, DragOutcome, DraggableConfig, DropZoneConfig, PointerEvent,
//! };
//!
//! /// Two columns of 40px cards, 200px wide, side by side.
//! struct Board {
//!     columns: [(&'static str, Vec<&'static str>); 2],
//! }
//!
//! impl Board {
//!     fn column(&self, zone: &str) -> Option<(f64, &Vec<&'static str>)> {
//!         let i = self.columns.iter().position(|(id, _)| *id == zone)?;
//!         Some((i as f64 * 200.0, &self.columns[i].1))
//!     }
//! }
//!
//! impl DragHost<&'static str, &'static str> for Board {
//!     fn item_bounds(&self, item: &&'static str) -> Option<Rect> {
//!         self.columns.iter().find_map(|(zone, items)| {
//!             let row = items.iter().position(|it| it == item)? as f64;
//!             let (x, _) = self.column(zone)?;
//!             Some(Rect::new(x, row * 40.0, x + 200.0, row * 40.0 + 40.0))
//!         })
//!     }
//!     fn zone_bounds(&self, zone: &&'static str) -> Option<Rect> {
//!         let (x, _) = self.column(zone)?;
//!         Some(Rect::new(x, 0.0, x + 200.0, 400.0))
//!     }
//!     fn zone_children(&self, zone: &&'static str, visit: &mut dyn FnMut(&&'static str, Rect)) {
//!         if let Some((_, items)) = self.column(zone) {
//!             for item in items {
//!                 if let Some(rect) = self.item_bounds(item) {
//!                     visit(item, rect);
//!                 }
//!             }
//!         }
//!     }
//!     fn on_drop(&mut self, zone: &&'static str, item: &&'static str, index: usize) -> bool {
//!         for (_, items) in &mut self.columns {
//!             items.retain(|it| it != item);
//!         }
//!         let Some((_, items)) = self.columns.iter_mut().find(|(id, _)| id == zone) else {
//!             return false;
//!         };
//!         items.insert(index.min(items.len()), *item);
//!         true
//!     }
//! }
//!
//! let mut board = Board {
//!     columns: [("todo", vec!["task-1", "task-2"]), ("done", vec![])],
//! };
//! let mut arena = DragArena::default();
//! arena.mount_draggable(DraggableConfig::new("task-1", "todo"));
//! arena.mount_draggable(DraggableConfig::new("task-2", "todo"));
//! arena.mount_drop_zone(DropZoneConfig::new("todo")).unwrap();
//! arena.mount_drop_zone(DropZoneConfig::new("done")).unwrap();
//!
//! arena.handle(&PointerEvent::mouse_down((100.0, 20.0)), &mut board);
//! arena.handle(&PointerEvent::mouse_move((250.0, 20.0)), &mut board);
//! assert!(arena.state().is_target(&"done"));
//!
//! let outcome = arena.handle(&PointerEvent::mouse_up((250.0, 20.0)), &mut board);
//! assert!(matches!(outcome, Some(DragOutcome::Dropped { zone: "done", index: 0, .. })));
//! assert_eq!(board.columns[1].1, ["task-1"]);
//! assert!(!arena.state().is_active());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: `no_std` float math for `kurbo`.
//! - `tracing`: emit `tracing` events for session start, drop, cancellation
//!   and hover changes.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod arena;
mod config;
mod draggable;
mod drop_zone;
mod error;
pub mod gesture;
mod host;
mod logging;
mod pointer;
mod reorder;
mod slots;
mod state;
mod types;

pub use arena::DragArena;
pub use config::{AutoScroll, DragConfig};
pub use draggable::{Draggable, DraggableConfig};
pub use drop_zone::{DropZone, DropZoneConfig, IndexScan, drop_index};
pub use error::ArenaError;
pub use host::DragHost;
pub use pointer::{PointerButton, PointerEvent, PointerId, PointerKind, PointerPhase};
pub use reorder::{ContainerStyle, ItemStyle, ItemStyles, ReorderPreview};
pub use state::{DragSession, DragState};
pub use types::{DragOutcome, DragTypes, DraggableKey, DropZoneKey};
