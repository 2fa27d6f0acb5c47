// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kanban drag and drop.
//!
//! Script a few pointer gestures over a three-column board and print the
//! session, the reorder preview styles and the resulting columns.
//!
//! Run:
//! - `cargo run -p understory_drag_drop --example kanban`

use kurbo::{Point, Rect, Size};
use understory_drag_drop::{
    DragArena, DragHost, DraggableConfig, DropZoneConfig, PointerEvent, ReorderPreview,
};

const PITCH: f64 = 220.0;
const CARD: Size = Size::new(200.0, 48.0);

struct Board {
    columns: Vec<(&'static str, Vec<&'static str>)>,
}

impl Board {
    fn column(&self, zone: &str) -> Option<(usize, &[&'static str])> {
        let idx = self.columns.iter().position(|(id, _)| *id == zone)?;
        Some((idx, self.columns[idx].1.as_slice()))
    }

    fn print(&self) {
        for (zone, items) in &self.columns {
            println!("  {zone:>6}: {items:?}");
        }
    }
}

impl DragHost<&'static str, &'static str> for Board {
    fn item_bounds(&self, item: &&'static str) -> Option<Rect> {
        self.columns.iter().enumerate().find_map(|(col, (_, items))| {
            let row = items.iter().position(|it| it == item)?;
            let origin = Point::new(col as f64 * PITCH, row as f64 * CARD.height);
            Some(Rect::from_origin_size(origin, CARD))
        })
    }

    fn zone_bounds(&self, zone: &&'static str) -> Option<Rect> {
        let (idx, items) = self.column(zone)?;
        let height = items.len() as f64 * CARD.height;
        Some(Rect::new(idx as f64 * PITCH, 0.0, idx as f64 * PITCH + CARD.width, height))
    }

    fn zone_children(&self, zone: &&'static str, visit: &mut dyn FnMut(&&'static str, Rect)) {
        let Some((_, items)) = self.column(zone) else {
            return;
        };
        for item in items {
            if let Some(rect) = self.item_bounds(item) {
                visit(item, rect);
            }
        }
    }

    fn on_drop(&mut self, zone: &&'static str, item: &&'static str, index: usize) -> bool {
        println!("  on_drop({zone}, {item}, {index})");
        for (_, items) in &mut self.columns {
            items.retain(|it| it != item);
        }
        match self.columns.iter_mut().find(|(id, _)| id == zone) {
            Some((_, items)) => {
                items.insert(index.min(items.len()), *item);
                true
            }
            None => false,
        }
    }

    fn detach(&mut self, item: &&'static str, frame: Rect) {
        println!("  detach {item} from {frame:?}");
    }

    fn restore(&mut self, item: &&'static str) {
        println!("  restore {item}");
    }
}

fn main() {
    let mut board = Board {
        columns: vec![
            ("todo", vec!["write", "review", "test", "ship"]),
            ("doing", vec!["design"]),
            ("done", vec![]),
        ],
    };
    let mut arena = DragArena::default();
    for (zone, items) in &board.columns {
        for item in items {
            arena.mount_draggable(DraggableConfig::new(*item, *zone));
        }
        if let Err(err) = arena.mount_drop_zone(DropZoneConfig::new(*zone)) {
            println!("{err}");
        }
    }
    let mut preview = ReorderPreview::new();

    println!("Start:");
    board.print();

    // Reorder "test" above "review", pausing to show the preview.
    println!("\nDrag \"test\" up one slot:");
    arena.handle(&PointerEvent::mouse_down((100.0, 120.0)), &mut board);
    arena.handle(&PointerEvent::mouse_move((100.0, 60.0)), &mut board);
    let state = arena.state();
    println!(
        "  target {:?} at index {}",
        state.target_zone(),
        state.drop_index()
    );
    let items = board.columns[0].1.clone();
    for (item, style) in preview.frame(state, &"todo", &items, arena.config()) {
        println!("  {item:>6} {{ {style} }}");
    }
    arena.handle(&PointerEvent::mouse_up((100.0, 60.0)), &mut board);
    board.print();

    // Move "ship" into the empty column; an empty column still has a hit area.
    println!("\nDrag \"ship\" to done:");
    arena.handle(&PointerEvent::mouse_down((100.0, 168.0)), &mut board);
    arena.handle(&PointerEvent::mouse_move((540.0, 10.0)), &mut board);
    println!(
        "  done {{ {} }}",
        ReorderPreview::container_style(arena.state(), &"done")
    );
    let outcome = arena.handle(&PointerEvent::mouse_up((540.0, 10.0)), &mut board);
    println!("  outcome: {outcome:?}");
    board.print();

    // Release in the gutter between columns: nothing moves.
    println!("\nDrop \"write\" in the gutter:");
    arena.handle(&PointerEvent::mouse_down((100.0, 24.0)), &mut board);
    arena.handle(&PointerEvent::mouse_move((210.0, 24.0)), &mut board);
    let outcome = arena.handle(&PointerEvent::mouse_up((210.0, 24.0)), &mut board);
    println!("  outcome: {outcome:?}");
    board.print();
}
