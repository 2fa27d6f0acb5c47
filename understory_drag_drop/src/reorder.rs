// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder preview: per-item offsets that part a zone's list at the drop index.
//!
//! [`ReorderPreview`] is a derived view over [`DragState`]. It remembers which
//! session it last armed for, so that the first frame of each drag snaps
//! instead of animating; everything else is recomputed from the state on each
//! call.
//!
//! While a zone is the target, items at or after the drop index (counted
//! without the dragged item) are shifted down by the dragged height, opening
//! a gap where the item would land. A target zone that is not the source also
//! grows by the dragged height through [`ContainerStyle`], making room for the
//! incoming item.
//!
//! ```
//! use kurbo::Size;
//! use understory_drag_drop::{DragConfig, DragState, DragTypes, ReorderPreview};
//!
//! let items = ["a", "b", "c", "d"];
//! let mut state = DragState::new();
//! state.begin_drag("c", "list", Size::new(200.0, 40.0), DragTypes::ITEM);
//! state.set_hovered_zone("list", 1);
//!
//! let mut preview = ReorderPreview::new();
//! let shifted: Vec<_> = preview
//!     .frame(&state, &"list", &items, &DragConfig::default())
//!     .filter(|(_, style)| style.translate_y > 0.0)
//!     .map(|(id, _)| *id)
//!     .collect();
//! assert_eq!(shifted, ["b", "d"]);
//! ```

use core::fmt;
use core::slice;

use crate::config::DragConfig;
use crate::state::DragState;

/// Presentation of one item in a zone.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ItemStyle {
    /// Vertical offset from the item's laid-out position.
    pub translate_y: f64,
    /// Duration of a linear transition on the offset, or `None` to snap.
    pub transition_ms: Option<u32>,
}

impl fmt::Display for ItemStyle {
    /// Formats as CSS declarations.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transform: translateY({}px)", self.translate_y)?;
        if let Some(ms) = self.transition_ms {
            write!(f, "; transition: transform {ms}ms linear")?;
        }
        Ok(())
    }
}

/// Presentation of a zone's container.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContainerStyle {
    /// Extra space reserved below the last item.
    pub padding_bottom: f64,
}

impl fmt::Display for ContainerStyle {
    /// Formats as a CSS declaration.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "padding-bottom: {}px", self.padding_bottom)
    }
}

/// Derives reorder offsets for one zone.
///
/// Keep one per rendered zone and call [`ReorderPreview::frame`] once per
/// frame.
#[derive(Clone, Debug, Default)]
pub struct ReorderPreview {
    /// Start revision of the session the last frame was produced for.
    armed: Option<u64>,
}

impl ReorderPreview {
    /// Creates a disarmed preview.
    #[must_use]
    pub const fn new() -> Self {
        Self { armed: None }
    }

    /// Returns `true` once a frame has been produced for the current drag.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Container style of `zone`.
    pub fn container_style<I, Z: PartialEq>(state: &DragState<I, Z>, zone: &Z) -> ContainerStyle {
        let incoming = state.target_zone() == Some(zone) && state.source_zone() != Some(zone);
        match state.dragged_size() {
            Some(size) if incoming => ContainerStyle {
                padding_bottom: size.height,
            },
            _ => ContainerStyle::default(),
        }
    }

    /// Styles for `items`, the ids currently rendered in `zone` in render order.
    ///
    /// The first frame of each session carries no transitions, later frames
    /// of the same session do, and an idle state disarms. A session that
    /// replaces another without an idle frame in between still snaps first.
    pub fn frame<'a, I, Z>(
        &mut self,
        state: &'a DragState<I, Z>,
        zone: &Z,
        items: &'a [I],
        config: &DragConfig,
    ) -> ItemStyles<'a, I>
    where
        I: PartialEq,
        Z: PartialEq,
    {
        let session = state.session().map(|s| s.started_revision());
        let animate = session.is_some() && self.armed == session;
        self.armed = session;
        let transition_ms = animate.then_some(config.transition_ms);
        let shift = match state.dragged_size() {
            Some(size) if state.target_zone() == Some(zone) => Some(size.height),
            _ => None,
        };
        ItemStyles {
            items: items.iter(),
            dragged: state.dragged_item(),
            shift,
            drop_index: state.drop_index(),
            position: 0,
            transition_ms,
        }
    }
}

/// Iterator over `(item, style)` pairs returned by [`ReorderPreview::frame`].
#[derive(Clone, Debug)]
pub struct ItemStyles<'a, I> {
    items: slice::Iter<'a, I>,
    dragged: Option<&'a I>,
    shift: Option<f64>,
    drop_index: usize,
    position: usize,
    transition_ms: Option<u32>,
}

impl<'a, I: PartialEq> Iterator for ItemStyles<'a, I> {
    type Item = (&'a I, ItemStyle);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.next()?;
        if self.dragged == Some(item) {
            return Some((item, ItemStyle::default()));
        }
        let index = self.position;
        self.position += 1;
        let translate_y = match self.shift {
            Some(height) if index >= self.drop_index => height,
            _ => 0.0,
        };
        Some((
            item,
            ItemStyle {
                translate_y,
                transition_ms: self.transition_ms,
            },
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<I: PartialEq> ExactSizeIterator for ItemStyles<'_, I> {}
