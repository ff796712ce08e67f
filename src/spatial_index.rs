//! Spatial Index Module
//!
//! R-tree based spatial indexing for efficient hit testing on the canvas.
//! Item icons are fixed-size squares centered on their position, so entries
//! carry only the center; the envelope is derived from the icon half-extent.
//! Queries run in O(log n) instead of a linear scan over all items.

use crate::constants::ICON_HALF;
use crate::types::ItemId;
use kurbo::{Point, Rect};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing one item's axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub item_id: ItemId,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn new(item_id: ItemId, center: Point) -> Self {
        Self {
            item_id,
            min_x: center.x - ICON_HALF,
            min_y: center.y - ICON_HALF,
            max_x: center.x + ICON_HALF,
            max_y: center.y + ICON_HALF,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// Spatial index over the plan's items.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ItemId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build a spatial index from an iterator of item centers.
    pub fn from_items<I>(items: I) -> Self
    where
        I: Iterator<Item = (ItemId, Point)>,
    {
        let entries: Vec<SpatialEntry> = items
            .map(|(id, center)| SpatialEntry::new(id, center))
            .collect();

        let entries_map: HashMap<ItemId, SpatialEntry> =
            entries.iter().map(|e| (e.item_id, *e)).collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
        }
    }

    pub fn insert(&mut self, item_id: ItemId, center: Point) {
        if let Some(old_entry) = self.entries.remove(&item_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(item_id, center);
        self.tree.insert(entry);
        self.entries.insert(item_id, entry);
    }

    pub fn remove(&mut self, item_id: ItemId) -> bool {
        if let Some(entry) = self.entries.remove(&item_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, item_id: ItemId, center: Point) {
        self.insert(item_id, center);
    }

    /// All items whose box contains the given point.
    pub fn query_point(&self, point: Point) -> Vec<ItemId> {
        let point_envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(point.x, point.y))
            .map(|entry| entry.item_id)
            .collect()
    }

    /// All items whose box intersects the rectangle. Touching edges count as
    /// intersecting; the marquee capture rule wants "not fully separated".
    pub fn query_rect(&self, rect: Rect) -> Vec<ItemId> {
        let envelope = AABB::from_corners([rect.x0, rect.y0], [rect.x1, rect.y1]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.item_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
