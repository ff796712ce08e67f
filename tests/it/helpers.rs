//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestPlanBuilder` - builder for plans (and editors) pre-seeded with items
//! - Pointer event constructors with the usual modifier combinations
//! - Gesture drivers that replay the full down/move/up/click sequence the
//!   way a real canvas delivers it
//! - Assertion helpers

use kurbo::Point;
use stageplan::{
    CanvasTransform, ItemId, ItemKind, Modifiers, Plan, PlanEditor, PointerEvent,
};

/// Install a test subscriber so `RUST_LOG=stageplan=trace` shows the
/// controller's event log while debugging a failing test.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// TestPlanBuilder
// ============================================================================

/// Builder for plans with items at known positions.
///
/// # Example
/// ```ignore
/// let (plan, ids) = TestPlanBuilder::new()
///     .with_item(ItemKind::Mic, 100.0, 100.0)
///     .with_item(ItemKind::Monitor, 200.0, 200.0)
///     .build();
/// ```
#[derive(Default)]
pub struct TestPlanBuilder {
    items: Vec<(ItemKind, f64, f64, f64)>,
}

impl TestPlanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, kind: ItemKind, x: f64, y: f64) -> Self {
        self.items.push((kind, x, y, 0.0));
        self
    }

    pub fn with_rotated_item(mut self, kind: ItemKind, x: f64, y: f64, degrees: f64) -> Self {
        self.items.push((kind, x, y, degrees));
        self
    }

    /// Build the plan; returns the ids in insertion order.
    pub fn build(self) -> (Plan, Vec<ItemId>) {
        let mut plan = Plan::new();
        let ids = self
            .items
            .into_iter()
            .map(|(kind, x, y, rotation)| plan.add_item(kind, x, y, rotation))
            .collect();
        (plan, ids)
    }

    /// Build an editor around the plan with screen space == canvas space,
    /// so tests can use item coordinates in pointer events directly.
    pub fn build_editor(self) -> (PlanEditor, Vec<ItemId>) {
        init_tracing();
        let (plan, ids) = self.build();
        let editor = PlanEditor {
            plan,
            gestures: Default::default(),
            transform: CanvasTransform::identity(),
        };
        (editor, ids)
    }
}

// ============================================================================
// Pointer event constructors
// ============================================================================

pub fn pointer(x: f64, y: f64) -> PointerEvent {
    PointerEvent::new(Point::new(x, y))
}

pub fn shift_pointer(x: f64, y: f64) -> PointerEvent {
    PointerEvent::with_modifiers(
        Point::new(x, y),
        Modifiers {
            shift: true,
            alt: false,
        },
    )
}

pub fn alt_pointer(x: f64, y: f64) -> PointerEvent {
    PointerEvent::with_modifiers(
        Point::new(x, y),
        Modifiers {
            shift: false,
            alt: true,
        },
    )
}

// ============================================================================
// Gesture drivers
// ============================================================================
//
// A real canvas delivers pointer-down, zero or more moves, pointer-up, and
// then a synthetic click on the container. The drivers replay that full
// sequence so suppression behavior is always exercised.

/// Press and release without movement, then the trailing canvas click.
pub fn click_at(editor: &mut PlanEditor, event: PointerEvent) {
    editor.pointer_down(&event);
    editor.pointer_up();
    editor.canvas_click();
}

/// Press at `from`, move to `to`, release, trailing click.
pub fn drag_between(editor: &mut PlanEditor, from: PointerEvent, to: PointerEvent) {
    editor.pointer_down(&from);
    editor.pointer_move(&to);
    editor.pointer_up();
    editor.canvas_click();
}

// ============================================================================
// Assertion helpers
// ============================================================================

pub fn assert_selected(plan: &Plan, expected: &[ItemId]) {
    assert_eq!(
        plan.selection().ids(),
        expected,
        "selection mismatch: {:?} != {:?}",
        plan.selection().ids(),
        expected
    );
}

pub fn assert_position(plan: &Plan, id: ItemId, x: f64, y: f64) {
    let item = plan.get_item(id).expect("item not found");
    assert!(
        (item.x - x).abs() < 1e-9 && (item.y - y).abs() < 1e-9,
        "item at ({}, {}), expected ({x}, {y})",
        item.x,
        item.y
    );
}

pub fn assert_rotation(plan: &Plan, id: ItemId, degrees: f64) {
    let item = plan.get_item(id).expect("item not found");
    assert!(
        (item.rotation_degrees - degrees).abs() < 1e-9,
        "item rotated {}, expected {degrees}",
        item.rotation_degrees
    );
}
