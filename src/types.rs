//! Core types for the stageplan canvas system.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: item identity, item kinds, and the placed item itself.

use crate::constants::ICON_HALF;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier for a stage item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a fresh id. Also used for the provisional id carried by a
    /// clone preview before it is committed to the store.
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The kinds of gear that can be placed on a plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Mic,
    Monitor,
    Amp,
    Keyboard,
}

impl ItemKind {
    /// Where the palette drops a new item of this kind.
    pub fn spawn_position(self) -> Point {
        match self {
            Self::Mic => Point::new(100.0, 100.0),
            Self::Monitor => Point::new(200.0, 200.0),
            Self::Amp => Point::new(300.0, 200.0),
            Self::Keyboard => Point::new(400.0, 300.0),
        }
    }

    /// Fill color the renderer uses for this kind's icon.
    pub fn icon_color(self) -> &'static str {
        match self {
            Self::Mic => "#000000",
            Self::Monitor | Self::Amp | Self::Keyboard => "#808080",
        }
    }
}

/// A single placed item. `(x, y)` is the icon center in canvas coordinates;
/// the icon is drawn rotated about that center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageItem {
    pub id: ItemId,
    pub kind: ItemKind,
    pub x: f64,
    pub y: f64,
    pub rotation_degrees: f64,
    pub label: Option<String>,
}

impl StageItem {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Axis-aligned bounds ignoring rotation. Marquee capture works on these
    /// bounds; the body hit test does not.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x - ICON_HALF,
            self.y - ICON_HALF,
            self.x + ICON_HALF,
            self.y + ICON_HALF,
        )
    }

    /// True if `point` lies inside the icon body, honoring the item's
    /// rotation: the point is mapped into the icon's local frame before the
    /// box test.
    pub fn contains(&self, point: Point) -> bool {
        let theta = self.rotation_degrees.to_radians();
        let (sin, cos) = theta.sin_cos();
        let v = point - self.position();
        let local_x = v.x * cos + v.y * sin;
        let local_y = -v.x * sin + v.y * cos;
        local_x.abs() <= ICON_HALF && local_y.abs() <= ICON_HALF
    }

    /// The four selection corner handles, rotated with the icon.
    pub fn corner_handles(&self) -> [Point; 4] {
        let theta = self.rotation_degrees.to_radians();
        let (sin, cos) = theta.sin_cos();
        let corner = |dx: f64, dy: f64| {
            Point::new(
                self.x + dx * cos - dy * sin,
                self.y + dx * sin + dy * cos,
            )
        };
        [
            corner(-ICON_HALF, -ICON_HALF),
            corner(ICON_HALF, -ICON_HALF),
            corner(-ICON_HALF, ICON_HALF),
            corner(ICON_HALF, ICON_HALF),
        ]
    }
}
