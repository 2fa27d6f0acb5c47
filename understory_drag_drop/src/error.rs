// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registration errors reported by [`DragArena`](crate::DragArena).
//!
//! Degenerate drags (release outside every zone, a rejected drop, the source
//! unmounting mid-drag) are not errors; they end as
//! [`DragOutcome::Cancelled`](crate::DragOutcome::Cancelled) or an unaccepted
//! [`DragOutcome::Dropped`](crate::DragOutcome::Dropped). Only misuse of the
//! registration API is reported here.

use core::fmt;

use crate::types::{DraggableKey, DropZoneKey};

/// Error returned by the registration methods of a drag arena.
#[derive(Clone, PartialEq, Eq)]
pub enum ArenaError<Z> {
    /// The draggable key was already unmounted, or belongs to another arena.
    StaleDraggable(DraggableKey),
    /// The drop-zone key was already unmounted, or belongs to another arena.
    StaleDropZone(DropZoneKey),
    /// A drop zone with this id is already mounted.
    DuplicateZone(Z),
}

impl<Z: fmt::Debug> fmt::Debug for ArenaError<Z> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleDraggable(key) => write!(f, "StaleDraggable({key:?})"),
            Self::StaleDropZone(key) => write!(f, "StaleDropZone({key:?})"),
            Self::DuplicateZone(zone) => write!(f, "DuplicateZone({zone:?})"),
        }
    }
}

impl<Z: fmt::Debug> fmt::Display for ArenaError<Z> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleDraggable(key) => write!(f, "draggable {key:?} is not mounted"),
            Self::StaleDropZone(key) => write!(f, "drop zone {key:?} is not mounted"),
            Self::DuplicateZone(zone) => write!(f, "drop zone {zone:?} is already mounted"),
        }
    }
}

impl<Z: fmt::Debug> core::error::Error for ArenaError<Z> {}
