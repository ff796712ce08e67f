//! Pointer-down handling - hit testing, selection policy, gesture entry.
//!
//! Pointer-down decides which gesture owns the rest of the sequence. Corner
//! rotation handles win over item bodies, item bodies win over the canvas;
//! an empty-canvas press starts a marquee.

use super::coords::CanvasTransform;
use super::state::{ClonePreview, Gesture};
use super::{GestureController, PointerEvent};
use crate::plan::Plan;
use crate::types::ItemId;
use kurbo::{Point, Vec2};
use std::collections::HashMap;
use tracing::{debug, trace};

impl GestureController {
    pub fn handle_pointer_down(
        &mut self,
        plan: &mut Plan,
        transform: &CanvasTransform,
        event: &PointerEvent,
    ) {
        let Ok(cursor) = transform.screen_to_canvas(event.position) else {
            trace!("pointer-down dropped: no canvas transform");
            return;
        };
        self.last_cursor = Some(cursor);
        self.last_outcome = None;

        // Corner handles take priority and keep the press away from the
        // item body underneath them.
        if let Some(item) = plan.rotation_handle_at(cursor) {
            trace!(%item, "rotation started");
            self.state = Gesture::Rotating { item };
            return;
        }

        if let Some(item) = plan.item_at(cursor) {
            self.press_item(plan, cursor, item, event);
        } else {
            debug!(x = cursor.x, y = cursor.y, additive = event.modifiers.shift, "marquee start");
            self.state = Gesture::Marqueeing {
                start: cursor,
                current: cursor,
                additive: event.modifiers.shift,
            };
        }
    }

    fn press_item(&mut self, plan: &mut Plan, cursor: Point, item: ItemId, event: &PointerEvent) {
        // Selection policy, in order: shift toggles membership; a plain
        // click on an unselected item replaces the selection; a plain click
        // on an already-selected item leaves the selection intact so the
        // whole group can be dragged.
        if event.modifiers.shift {
            plan.toggle_item_selection(item);
        } else if !plan.is_selected(item) {
            plan.select_item(item);
        }

        let Some(pressed) = plan.get_item(item) else {
            return;
        };
        let origin = pressed.position();
        let offset = cursor - origin;

        if event.modifiers.alt {
            let preview = ClonePreview {
                id: ItemId::generate(),
                kind: pressed.kind,
                x: origin.x,
                y: origin.y,
                rotation_degrees: pressed.rotation_degrees,
            };
            trace!(source = %item, "clone preview started");
            self.state = Gesture::Cloning {
                source: item,
                origin,
                offset,
                preview,
            };
            return;
        }

        if plan.is_selected(item) && plan.selection().len() > 1 {
            let offsets: HashMap<ItemId, Vec2> = plan
                .selection()
                .iter()
                .filter_map(|id| plan.get_item(id).map(|other| (id, cursor - other.position())))
                .collect();
            self.state = Gesture::DraggingGroup {
                primary: item,
                offsets,
                pressed_at: cursor,
                moved: false,
                shift_held: event.modifiers.shift,
            };
        } else {
            self.state = Gesture::DraggingSolo {
                item,
                offset,
                origin,
                pressed_at: cursor,
                moved: false,
                shift_held: event.modifiers.shift,
            };
        }
    }
}
