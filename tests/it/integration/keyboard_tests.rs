//! Delete/backspace handling.

use crate::helpers::{drag_between, pointer, TestPlanBuilder};
use stageplan::{ItemKind, Key};

#[test]
fn test_delete_removes_selected_items() {
    let (mut editor, ids) = TestPlanBuilder::new()
        .with_item(ItemKind::Mic, 100.0, 100.0)
        .with_item(ItemKind::Monitor, 200.0, 200.0)
        .build_editor();
    editor.plan.select_multiple_items(ids.clone());

    // Consumed: the embedder must prevent the default key action.
    assert!(editor.key_down(Key::Delete));

    assert!(editor.plan.is_empty());
    assert!(editor.plan.selection().is_empty());
}

#[test]
fn test_backspace_behaves_like_delete() {
    let (mut editor, ids) = TestPlanBuilder::new()
        .with_item(ItemKind::Amp, 300.0, 300.0)
        .build_editor();
    editor.plan.select_item(ids[0]);

    assert!(editor.key_down(Key::Backspace));
    assert!(editor.plan.is_empty());
}

#[test]
fn test_delete_without_selection_is_not_consumed() {
    let (mut editor, _ids) = TestPlanBuilder::new()
        .with_item(ItemKind::Mic, 100.0, 100.0)
        .build_editor();

    assert!(!editor.key_down(Key::Delete));
    assert_eq!(editor.plan.len(), 1);
}

#[test]
fn test_drag_then_delete_removes_item_everywhere() {
    let (mut editor, ids) = TestPlanBuilder::new()
        .with_item(ItemKind::Mic, 100.0, 100.0)
        .build_editor();

    drag_between(&mut editor, pointer(100.0, 100.0), pointer(130.0, 90.0));
    assert!(editor.key_down(Key::Delete));

    assert!(editor.plan.get_item(ids[0]).is_none());
    assert!(editor.plan.selection().is_empty());
}

#[test]
fn test_alt_without_drag_is_ignored() {
    let (mut editor, ids) = TestPlanBuilder::new()
        .with_item(ItemKind::Mic, 100.0, 100.0)
        .build_editor();
    editor.plan.select_item(ids[0]);

    assert!(!editor.key_down(Key::Alt));
    editor.key_up(Key::Alt);

    assert!(editor.gestures.is_idle());
    assert_eq!(editor.plan.len(), 1);
}
