//! Composed editor state - plan, gesture controller, and canvas transform.
//!
//! `PlanEditor` is the facade the embedding shell talks to: the renderer
//! reads through it, the toolbar seeds items through it, and the event loop
//! forwards pointer/keyboard events through it. The pieces stay independent;
//! this struct only wires them together.

use crate::input::coords::CanvasTransform;
use crate::input::{GestureController, GestureOutcome, Key, PointerEvent};
use crate::plan::Plan;
use crate::types::{ItemId, ItemKind};

#[derive(Default)]
pub struct PlanEditor {
    pub plan: Plan,
    pub gestures: GestureController,
    pub transform: CanvasTransform,
}

impl PlanEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refit the canvas transform after the viewport (re)measures.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.transform = CanvasTransform::fit(width, height);
    }

    /// Palette entry point: drop a new item at the kind's default spot.
    pub fn add_item_from_palette(&mut self, kind: ItemKind) -> ItemId {
        let at = kind.spawn_position();
        self.plan.add_item(kind, at.x, at.y, 0.0)
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) {
        self.gestures
            .handle_pointer_down(&mut self.plan, &self.transform, event);
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) {
        self.gestures
            .handle_pointer_move(&mut self.plan, &self.transform, event);
    }

    pub fn pointer_up(&mut self) -> GestureOutcome {
        self.gestures.handle_pointer_up(&mut self.plan)
    }

    /// The synthetic click the canvas container receives after pointer-up.
    pub fn canvas_click(&mut self) {
        self.gestures.handle_canvas_click(&mut self.plan);
    }

    pub fn key_down(&mut self, key: Key) -> bool {
        self.gestures.handle_key_down(&mut self.plan, key)
    }

    pub fn key_up(&mut self, key: Key) {
        self.gestures.handle_key_up(key);
    }
}
