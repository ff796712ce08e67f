//! Pointer-move handling - drag, clone ghost, rotation, marquee.
//!
//! Pointer-move is a hot path: it fires continuously during any drag.
//! Each arm does the minimum for its gesture, and updates are absolute
//! (recomputed from the live cursor) so repeated events cannot accumulate
//! error.

use super::coords::CanvasTransform;
use super::state::Gesture;
use super::{GestureController, PointerEvent};
use crate::plan::Plan;
use kurbo::Point;
use tracing::trace;

impl GestureController {
    pub fn handle_pointer_move(
        &mut self,
        plan: &mut Plan,
        transform: &CanvasTransform,
        event: &PointerEvent,
    ) {
        let Ok(cursor) = transform.screen_to_canvas(event.position) else {
            return;
        };
        self.last_cursor = Some(cursor);

        match &mut self.state {
            Gesture::Idle => {}

            Gesture::DraggingSolo {
                item,
                offset,
                pressed_at,
                moved,
                ..
            } => {
                if cursor != *pressed_at {
                    *moved = true;
                }
                let target = cursor - *offset;
                plan.update_item_position(*item, target.x, target.y);
            }

            Gesture::DraggingGroup {
                offsets,
                pressed_at,
                moved,
                ..
            } => {
                if cursor != *pressed_at {
                    *moved = true;
                }
                for (id, offset) in offsets.iter() {
                    let target = cursor - *offset;
                    plan.update_item_position(*id, target.x, target.y);
                }
            }

            Gesture::Cloning {
                offset, preview, ..
            } => {
                // Only the local ghost moves; the store is untouched until
                // the gesture commits.
                let target = cursor - *offset;
                preview.x = target.x;
                preview.y = target.y;
                trace!(x = preview.x, y = preview.y, "clone ghost moved");
            }

            Gesture::Rotating { item } => {
                let item = *item;
                let center = plan.get_item(item).map(|target| target.position());
                if let Some(center) = center {
                    plan.update_item_rotation(item, rotation_from_cursor(center, cursor));
                }
            }

            Gesture::Marqueeing { current, .. } => {
                *current = cursor;
            }
        }
    }
}

/// Absolute rotation for a cursor relative to the item center: `atan2` plus
/// a quarter turn, so a cursor straight above the center reads as zero.
pub(crate) fn rotation_from_cursor(center: Point, cursor: Point) -> f64 {
    let v = cursor - center;
    v.y.atan2(v.x).to_degrees() + 90.0
}
