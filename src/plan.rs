//! The plan store - single source of truth for items and selection.
//!
//! All mutation goes through the operations below; the gesture controller
//! never touches item fields directly. Every operation bumps a monotonic
//! revision counter, which is the change notification: the renderer re-reads
//! items and selection whenever `revision()` advances.
//!
//! Defensive policy: a mutator addressed to an id that is no longer in the
//! collection is a silent no-op, never an error. This tolerates deletion
//! racing in-flight pointer events from a stale gesture.

use crate::constants::{HANDLE_HIT_RADIUS, ICON_HALF};
use crate::selection::SelectionManager;
use crate::spatial_index::SpatialIndex;
use crate::types::{ItemId, ItemKind, StageItem};
use kurbo::{Point, Rect};
use std::collections::HashSet;
use tracing::debug;

pub struct Plan {
    items: Vec<StageItem>,
    selection: SelectionManager,
    index: SpatialIndex,
    revision: u64,
}

impl Plan {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selection: SelectionManager::new(),
            index: SpatialIndex::new(),
            revision: 0,
        }
    }

    // ==================== Mutators ====================

    /// Append a new item with a freshly generated id and return that id.
    pub fn add_item(&mut self, kind: ItemKind, x: f64, y: f64, rotation_degrees: f64) -> ItemId {
        let id = ItemId::generate();
        self.items.push(StageItem {
            id,
            kind,
            x,
            y,
            rotation_degrees,
            label: None,
        });
        self.index.insert(id, Point::new(x, y));
        debug!(%id, ?kind, x, y, "item added");
        self.mark_changed();
        id
    }

    /// Replace the selection with the single given id. Unknown ids are
    /// dropped before the selection is persisted, so the no-dangling-ids
    /// invariant holds even for stale callers.
    pub fn select_item(&mut self, id: ItemId) {
        let valid = self.contains(id).then_some(id);
        self.selection.replace(valid);
        self.mark_changed();
    }

    /// Remove the id from the selection if present, else add it.
    pub fn toggle_item_selection(&mut self, id: ItemId) {
        if self.selection.contains(id) {
            self.selection.remove(id);
        } else if self.contains(id) {
            self.selection.insert(id);
        }
        self.mark_changed();
    }

    /// Replace the selection with the given ids, deduplicated and filtered
    /// to ids that exist in the item collection.
    pub fn select_multiple_items(&mut self, ids: impl IntoIterator<Item = ItemId>) {
        let existing: Vec<ItemId> = ids.into_iter().filter(|id| self.contains(*id)).collect();
        self.selection.replace(existing);
        self.mark_changed();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.mark_changed();
    }

    /// Set the item's center. No-op if the id is absent.
    pub fn update_item_position(&mut self, id: ItemId, x: f64, y: f64) {
        if let Some(item) = self.get_item_mut(id) {
            item.x = x;
            item.y = y;
            self.index.update(id, Point::new(x, y));
        }
        self.mark_changed();
    }

    /// Set the item's rotation to an absolute angle in degrees (not a
    /// delta). No-op if the id is absent.
    pub fn update_item_rotation(&mut self, id: ItemId, angle_degrees: f64) {
        if let Some(item) = self.get_item_mut(id) {
            item.rotation_degrees = angle_degrees;
        }
        self.mark_changed();
    }

    /// Delete every item whose id is in `ids` and prune the same ids from
    /// the selection in the same step.
    pub fn remove_items(&mut self, ids: &[ItemId]) {
        let doomed: HashSet<ItemId> = ids.iter().copied().collect();
        let before = self.items.len();
        self.items.retain(|item| !doomed.contains(&item.id));
        self.selection.retain(|id| !doomed.contains(id));
        for id in &doomed {
            self.index.remove(*id);
        }
        debug!(removed = before - self.items.len(), "items removed");
        self.mark_changed();
    }

    // ==================== Queries ====================

    /// Items in insertion order, which is also the renderer's z-order.
    pub fn items(&self) -> &[StageItem] {
        &self.items
    }

    pub fn get_item(&self, id: ItemId) -> Option<&StageItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get_item(id).is_some()
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selection.contains(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Monotonic change counter; bumped by every mutator call.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ==================== Hit Testing ====================

    /// Topmost item whose rotated body contains the point.
    pub fn item_at(&self, point: Point) -> Option<ItemId> {
        // The index stores axis-aligned boxes; a rotated body can stick out
        // past its entry, so the candidate query is padded by a half icon.
        let probe = Rect::new(
            point.x - ICON_HALF,
            point.y - ICON_HALF,
            point.x + ICON_HALF,
            point.y + ICON_HALF,
        );
        let candidates: HashSet<ItemId> = self.index.query_rect(probe).into_iter().collect();

        self.items
            .iter()
            .rev()
            .filter(|item| candidates.contains(&item.id))
            .find(|item| item.contains(point))
            .map(|item| item.id)
    }

    /// Topmost selected item with a corner rotation handle under the point.
    /// Handles exist only on selected items and take priority over bodies.
    pub fn rotation_handle_at(&self, point: Point) -> Option<ItemId> {
        self.items
            .iter()
            .rev()
            .filter(|item| self.selection.contains(item.id))
            .find(|item| {
                item.corner_handles()
                    .iter()
                    .any(|corner| (*corner - point).hypot() <= HANDLE_HIT_RADIUS)
            })
            .map(|item| item.id)
    }

    /// Items whose axis-aligned bounds intersect the rectangle (the marquee
    /// capture rule: rotation is ignored), in insertion order.
    pub fn items_intersecting(&self, rect: Rect) -> Vec<ItemId> {
        let hits: HashSet<ItemId> = self.index.query_rect(rect).into_iter().collect();
        self.items
            .iter()
            .filter(|item| hits.contains(&item.id))
            .map(|item| item.id)
            .collect()
    }

    fn get_item_mut(&mut self, id: ItemId) -> Option<&mut StageItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn mark_changed(&mut self) {
        self.revision += 1;
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self::new()
    }
}
