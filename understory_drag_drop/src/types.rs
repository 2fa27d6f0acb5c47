// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared by the controllers: drag categories, registration keys and outcomes.

use crate::slots::SlotKey;

bitflags::bitflags! {
    /// Category tags carried by a drag and matched against what a drop zone accepts.
    ///
    /// A draggable usually carries a single bit; a drop zone accepts a union of
    /// bits. A zone claims the pointer only when the two intersect.
    ///
    /// Only [`DragTypes::ITEM`] is predefined. Applications define their own
    /// categories with [`DragTypes::from_bits_retain`]; every bit is accepted.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DragTypes: u32 {
        /// Generic orderable item. Default for draggables.
        const ITEM = 1 << 0;

        const _ = !0;
    }
}

impl Default for DragTypes {
    fn default() -> Self {
        Self::ITEM
    }
}

/// Handle to a draggable mounted in a [`DragArena`](crate::DragArena).
///
/// Keys are never reused: once a draggable is unmounted, its key is stale
/// forever and never aliases a later registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DraggableKey(pub(crate) SlotKey);

/// Handle to a drop zone mounted in a [`DragArena`](crate::DragArena).
///
/// Keys are never reused, see [`DraggableKey`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DropZoneKey(pub(crate) SlotKey);

/// Observable result of feeding a pointer event to the controllers.
///
/// Outcomes are informational. The only effect the host must act on is the
/// [`DragHost::on_drop`](crate::DragHost::on_drop) callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragOutcome<I, Z> {
    /// The pointer crossed the drag threshold and a session began.
    Started {
        /// The dragged item.
        item: I,
        /// The zone the item started in.
        zone: Z,
    },
    /// The item was released over a drop zone and the host was asked to move it.
    Dropped {
        /// The zone that received the drop.
        zone: Z,
        /// The dragged item.
        item: I,
        /// Insertion index in the zone, counted without the dragged item.
        index: usize,
        /// What the host's drop callback returned.
        accepted: bool,
    },
    /// The session ended without a drop (released outside every zone,
    /// unmounted, disabled, or cancelled by the platform).
    Cancelled {
        /// The dragged item.
        item: I,
    },
    /// The pointer was released before crossing the drag threshold.
    Click {
        /// The pressed item.
        item: I,
    },
}
