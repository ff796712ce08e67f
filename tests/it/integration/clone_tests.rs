//! Alt-drag clone workflows: preview, commit, mid-gesture conversion and
//! cancellation.

use crate::helpers::{alt_pointer, assert_position, assert_selected, pointer, TestPlanBuilder};
use stageplan::{GestureOutcome, ItemKind};

#[test]
fn test_alt_drag_commits_clone_on_release() {
    let (mut editor, ids) = TestPlanBuilder::new()
        .with_item(ItemKind::Mic, 100.0, 100.0)
        .build_editor();

    editor.pointer_down(&alt_pointer(100.0, 100.0));
    editor.pointer_move(&alt_pointer(150.0, 150.0));

    // While cloning, only the ghost moves; the store still has one item in
    // its original place.
    assert_eq!(editor.plan.len(), 1);
    assert_position(&editor.plan, ids[0], 100.0, 100.0);
    let ghost = editor.gestures.clone_preview().expect("ghost missing");
    assert_eq!((ghost.x, ghost.y), (150.0, 150.0));

    let outcome = editor.pointer_up();
    editor.canvas_click();

    assert_eq!(outcome, GestureOutcome::Dragged);
    assert_eq!(editor.plan.len(), 2);
    assert_position(&editor.plan, ids[0], 100.0, 100.0);

    let clone = editor
        .plan
        .items()
        .iter()
        .find(|item| item.id != ids[0])
        .expect("clone missing");
    assert_eq!(clone.kind, ItemKind::Mic);
    assert_eq!((clone.x, clone.y), (150.0, 150.0));
    // The fresh clone is the sole selection.
    assert_selected(&editor.plan, &[clone.id]);
}

#[test]
fn test_clone_preserves_rotation() {
    let (mut editor, ids) = TestPlanBuilder::new()
        .with_rotated_item(ItemKind::Amp, 300.0, 300.0, 45.0)
        .build_editor();

    editor.pointer_down(&alt_pointer(300.0, 300.0));
    editor.pointer_move(&alt_pointer(400.0, 300.0));
    editor.pointer_up();
    editor.canvas_click();

    let clone = editor
        .plan
        .items()
        .iter()
        .find(|item| item.id != ids[0])
        .expect("clone missing");
    assert_eq!(clone.rotation_degrees, 45.0);
}

#[test]
fn test_alt_mid_drag_converts_to_clone() {
    let (mut editor, ids) = TestPlanBuilder::new()
        .with_item(ItemKind::Mic, 100.0, 100.0)
        .build_editor();

    // Ordinary drag, grabbed off-center.
    editor.pointer_down(&pointer(110.0, 105.0));
    editor.pointer_move(&pointer(140.0, 120.0));
    assert_position(&editor.plan, ids[0], 130.0, 115.0);

    // Alt arrives mid-drag: the original snaps back to its pre-drag spot
    // and the ghost takes over at the cursor-derived position.
    editor.key_down(stageplan::Key::Alt);
    assert_position(&editor.plan, ids[0], 100.0, 100.0);
    let ghost = editor.gestures.clone_preview().expect("ghost missing");
    assert_eq!((ghost.x, ghost.y), (130.0, 115.0));

    editor.pointer_move(&pointer(160.0, 135.0));
    editor.pointer_up();
    editor.canvas_click();

    assert_eq!(editor.plan.len(), 2);
    assert_position(&editor.plan, ids[0], 100.0, 100.0);
    let clone = editor
        .plan
        .items()
        .iter()
        .find(|item| item.id != ids[0])
        .unwrap();
    assert_eq!((clone.x, clone.y), (150.0, 130.0));
}

#[test]
fn test_alt_release_cancels_clone_and_resumes_drag() {
    let (mut editor, ids) = TestPlanBuilder::new()
        .with_item(ItemKind::Mic, 100.0, 100.0)
        .build_editor();

    editor.pointer_down(&alt_pointer(100.0, 100.0));
    editor.pointer_move(&alt_pointer(150.0, 150.0));
    assert!(editor.gestures.clone_preview().is_some());

    // Alt released with the button still down: back to a plain drag.
    editor.key_up(stageplan::Key::Alt);
    assert!(editor.gestures.clone_preview().is_none());

    editor.pointer_move(&pointer(160.0, 160.0));
    let outcome = editor.pointer_up();
    editor.canvas_click();

    assert_eq!(outcome, GestureOutcome::Dragged);
    assert_eq!(editor.plan.len(), 1);
    assert_position(&editor.plan, ids[0], 160.0, 160.0);
}

#[test]
fn test_repeated_alt_keydown_is_harmless() {
    let (mut editor, ids) = TestPlanBuilder::new()
        .with_item(ItemKind::Mic, 100.0, 100.0)
        .build_editor();

    editor.pointer_down(&pointer(100.0, 100.0));
    editor.pointer_move(&pointer(120.0, 120.0));
    editor.key_down(stageplan::Key::Alt);
    let ghost_before = editor.gestures.clone_preview().cloned();

    // Key autorepeat delivers alt again; the active clone must not reset.
    editor.key_down(stageplan::Key::Alt);
    assert_eq!(editor.gestures.clone_preview().cloned(), ghost_before);

    editor.pointer_up();
    editor.canvas_click();
    assert_eq!(editor.plan.len(), 2);
    assert_position(&editor.plan, ids[0], 100.0, 100.0);
}
