// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A kanban board host shared by the integration tests.
//!
//! Columns are laid out left to right, `COLUMN_PITCH` apart. Cards stack from
//! the top of their column and a column is exactly as tall as its cards, so
//! an empty column has zero height.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use kurbo::{Point, Rect, Size};
use understory_drag_drop::{DragArena, DragHost, DraggableConfig, DraggableKey, DropZoneConfig};

pub const COLUMN_PITCH: f64 = 200.0;
pub const CARD_WIDTH: f64 = 160.0;
pub const CARD_HEIGHT: f64 = 50.0;
pub const GRIP: f64 = 12.0;

pub type Arena = DragArena<u32, &'static str>;

#[derive(Debug, Default)]
pub struct Kanban {
    pub columns: Vec<(&'static str, Vec<u32>)>,
    /// Every `on_drop` call, accepted or not.
    pub drops: Vec<(&'static str, u32, usize)>,
    /// When set, `on_drop` declines and leaves the data untouched.
    pub reject: bool,
    /// Height override applied to every card, used to resize cards mid-drag.
    pub card_height: Option<f64>,
    pub placeholders: Vec<(u32, Size)>,
    pub detached: Option<(u32, Rect)>,
    pub scrolled: Vec<(&'static str, f64)>,
}

impl Kanban {
    pub fn new(columns: &[(&'static str, &[u32])]) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|(id, items)| (*id, items.to_vec()))
                .collect(),
            ..Self::default()
        }
    }

    /// Mounts a draggable for every card and a drop zone for every column.
    pub fn mount(&self, arena: &mut Arena) -> Vec<(u32, DraggableKey)> {
        let mut keys = Vec::new();
        for (zone, items) in &self.columns {
            for item in items {
                keys.push((*item, arena.mount_draggable(DraggableConfig::new(*item, *zone))));
            }
            arena
                .mount_drop_zone(DropZoneConfig::new(*zone))
                .expect("column ids are unique");
        }
        keys
    }

    pub fn items(&self, zone: &str) -> &[u32] {
        self.columns
            .iter()
            .find(|(id, _)| *id == zone)
            .map(|(_, items)| items.as_slice())
            .unwrap_or_default()
    }

    pub fn column_x(&self, zone: &str) -> Option<f64> {
        let idx = self.columns.iter().position(|(id, _)| *id == zone)?;
        Some(idx as f64 * COLUMN_PITCH)
    }

    pub fn center(&self, item: u32) -> Point {
        self.item_bounds(&item)
            .expect("card is rendered")
            .center()
    }

    /// A point inside `zone` at height `y`.
    pub fn in_column(&self, zone: &str, y: f64) -> Point {
        let x = self.column_x(zone).expect("column exists");
        Point::new(x + CARD_WIDTH / 2.0, y)
    }

    fn height(&self) -> f64 {
        self.card_height.unwrap_or(CARD_HEIGHT)
    }
}

impl DragHost<u32, &'static str> for Kanban {
    fn item_bounds(&self, item: &u32) -> Option<Rect> {
        let h = self.height();
        self.columns.iter().find_map(|(zone, items)| {
            let row = items.iter().position(|it| it == item)? as f64;
            let x = self.column_x(zone)?;
            Some(Rect::new(x, row * h, x + CARD_WIDTH, (row + 1.0) * h))
        })
    }

    fn handle_bounds(&self, item: &u32) -> Option<Rect> {
        let card = self.item_bounds(item)?;
        Some(Rect::from_origin_size(card.origin(), (GRIP, GRIP)))
    }

    fn zone_bounds(&self, zone: &&'static str) -> Option<Rect> {
        let x = self.column_x(zone)?;
        let height = self.items(zone).len() as f64 * self.height();
        Some(Rect::new(x, 0.0, x + CARD_WIDTH, height))
    }

    fn zone_children(&self, zone: &&'static str, visit: &mut dyn FnMut(&u32, Rect)) {
        for item in self.items(zone) {
            if let Some(rect) = self.item_bounds(item) {
                visit(item, rect);
            }
        }
    }

    fn on_drop(&mut self, zone: &&'static str, item: &u32, index: usize) -> bool {
        self.drops.push((*zone, *item, index));
        if self.reject || self.column_x(zone).is_none() {
            return false;
        }
        for (_, items) in &mut self.columns {
            items.retain(|it| it != item);
        }
        if let Some((_, items)) = self.columns.iter_mut().find(|(id, _)| id == zone) {
            let index = index.min(items.len());
            items.insert(index, *item);
        }
        true
    }

    fn insert_placeholder(&mut self, item: &u32, size: Size) {
        self.placeholders.push((*item, size));
    }

    fn remove_placeholder(&mut self, item: &u32) {
        self.placeholders.retain(|(it, _)| it != item);
    }

    fn detach(&mut self, item: &u32, frame: Rect) {
        self.detached = Some((*item, frame));
    }

    fn move_detached(&mut self, item: &u32, origin: Point) {
        if let Some((detached, frame)) = &mut self.detached {
            if detached == item {
                *frame = Rect::from_origin_size(origin, frame.size());
            }
        }
    }

    fn restore(&mut self, item: &u32) {
        if self.detached.is_some_and(|(it, _)| it == *item) {
            self.detached = None;
        }
    }

    fn scroll_zone(&mut self, zone: &&'static str, dy: f64) {
        self.scrolled.push((*zone, dy));
    }
}
