//! Pointer-up handling - clone commit, marquee capture, outcome, reset.
//!
//! Pointer-up finalizes whatever gesture was active, resets all transient
//! state, and records a `GestureOutcome`. The trailing canvas click consumes
//! that outcome: a gesture that owned the interaction keeps the selection it
//! produced; only a no-op gesture (or a bare click) clears.

use super::state::{Gesture, GestureOutcome};
use super::GestureController;
use crate::plan::Plan;
use crate::types::ItemId;
use kurbo::{Point, Rect};
use tracing::debug;

impl GestureController {
    pub fn handle_pointer_up(&mut self, plan: &mut Plan) -> GestureOutcome {
        let outcome = match std::mem::take(&mut self.state) {
            Gesture::Idle => GestureOutcome::NoOp,

            Gesture::DraggingSolo {
                item,
                moved,
                shift_held,
                ..
            } => finish_drag(plan, item, moved, shift_held),

            Gesture::DraggingGroup {
                primary,
                moved,
                shift_held,
                ..
            } => finish_drag(plan, primary, moved, shift_held),

            Gesture::Cloning { preview, .. } => {
                let id = plan.add_item(
                    preview.kind,
                    preview.x,
                    preview.y,
                    preview.rotation_degrees,
                );
                // The fresh clone becomes the sole selection.
                plan.select_item(id);
                debug!(%id, x = preview.x, y = preview.y, "clone committed");
                GestureOutcome::Dragged
            }

            Gesture::Rotating { .. } => GestureOutcome::RotatedOnly,

            Gesture::Marqueeing {
                start,
                current,
                additive,
            } => finish_marquee(plan, start, current, additive),
        };

        self.last_outcome = Some(outcome);
        outcome
    }

    /// Canvas-level click, delivered after pointer-up. Consumes the stored
    /// gesture outcome; clears the selection only when no gesture claimed
    /// the interaction.
    pub fn handle_canvas_click(&mut self, plan: &mut Plan) {
        match self.last_outcome.take() {
            Some(GestureOutcome::NoOp) | None => plan.clear_selection(),
            Some(_) => {}
        }
    }
}

fn finish_drag(plan: &mut Plan, item: ItemId, moved: bool, shift_held: bool) -> GestureOutcome {
    if moved {
        return GestureOutcome::Dragged;
    }
    // Plain press-and-release with zero displacement on a multi-selected
    // item collapses the selection to just that item (click-to-isolate).
    if !shift_held && plan.is_selected(item) && plan.selection().len() > 1 {
        plan.select_item(item);
    }
    GestureOutcome::Selected
}

fn finish_marquee(plan: &mut Plan, start: Point, current: Point, additive: bool) -> GestureOutcome {
    let rect = Rect::from_points(start, current);
    let captured = plan.items_intersecting(rect);
    debug!(
        x0 = rect.x0,
        y0 = rect.y0,
        x1 = rect.x1,
        y1 = rect.y1,
        captured = captured.len(),
        "marquee end"
    );

    // An empty marquee leaves the selection alone; clearing is the click
    // handler's decision.
    if captured.is_empty() {
        return GestureOutcome::NoOp;
    }

    if additive {
        for id in &captured {
            plan.toggle_item_selection(*id);
        }
    } else {
        plan.select_multiple_items(captured);
    }
    GestureOutcome::Marqueed
}
