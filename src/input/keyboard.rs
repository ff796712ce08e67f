//! Keyboard handling - deletion, alt-clone conversion and cancellation.
//!
//! Key events are global and independent of the pointer state, with two
//! exceptions that reach into an active gesture: pressing alt mid-drag
//! converts the drag into a clone, and releasing alt mid-clone falls back
//! to an ordinary drag.

use super::state::{ClonePreview, Gesture};
use super::{GestureController, Key};
use crate::plan::Plan;
use crate::types::ItemId;
use tracing::{debug, trace};

impl GestureController {
    /// Returns true when the key was consumed; the embedder must then
    /// prevent the event's default action.
    pub fn handle_key_down(&mut self, plan: &mut Plan, key: Key) -> bool {
        match key {
            Key::Delete | Key::Backspace => {
                if plan.selection().is_empty() {
                    return false;
                }
                let ids: Vec<ItemId> = plan.selection().iter().collect();
                debug!(count = ids.len(), "deleting selection");
                plan.remove_items(&ids);
                true
            }
            Key::Alt => {
                self.convert_drag_to_clone(plan);
                false
            }
        }
    }

    pub fn handle_key_up(&mut self, key: Key) {
        if key == Key::Alt {
            self.cancel_clone();
        }
    }

    /// Alt pressed while a solo drag is running: put the original back
    /// where the drag found it and continue the gesture as a clone. A
    /// repeated alt-down (key autorepeat) finds the state already Cloning
    /// and does nothing.
    fn convert_drag_to_clone(&mut self, plan: &mut Plan) {
        let (item, offset, origin) = match &self.state {
            Gesture::DraggingSolo {
                item,
                offset,
                origin,
                ..
            } => (*item, *offset, *origin),
            _ => return,
        };
        let Some(source) = plan.get_item(item) else {
            return;
        };
        let kind = source.kind;
        let rotation_degrees = source.rotation_degrees;

        // Ghost picks up at the live cursor; before any move the cursor is
        // still the press point.
        let cursor = self.last_cursor.unwrap_or(origin + offset);
        let ghost = cursor - offset;

        plan.update_item_position(item, origin.x, origin.y);
        trace!(source = %item, "drag converted to clone");
        self.state = Gesture::Cloning {
            source: item,
            origin,
            offset,
            preview: ClonePreview {
                id: ItemId::generate(),
                kind,
                x: ghost.x,
                y: ghost.y,
                rotation_degrees,
            },
        };
    }

    /// Alt released while cloning (pointer still down): discard the ghost
    /// and resume dragging the real item.
    fn cancel_clone(&mut self) {
        let (source, origin, offset) = match &self.state {
            Gesture::Cloning {
                source,
                origin,
                offset,
                ..
            } => (*source, *origin, *offset),
            _ => return,
        };
        trace!(%source, "clone cancelled, resuming drag");
        self.state = Gesture::DraggingSolo {
            item: source,
            offset,
            origin,
            pressed_at: origin + offset,
            moved: true,
            shift_held: false,
        };
    }
}
