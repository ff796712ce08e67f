//! Gesture state machine - unified state for all pointer interactions.
//!
//! A single enum replaces scattered drag/rotate/marquee flags, making
//! impossible states unrepresentable: exactly one gesture can be active per
//! pointer-down sequence.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingSolo     (pointer-down on an item body)
//! Idle -> DraggingGroup    (pointer-down on a multi-selected item body)
//! Idle -> Cloning          (pointer-down on an item body with alt held)
//! Idle -> Rotating         (pointer-down on a selection corner handle)
//! Idle -> Marqueeing       (pointer-down on empty canvas)
//!
//! DraggingSolo -> Cloning  (alt pressed mid-drag)
//! Cloning -> DraggingSolo  (alt released mid-gesture)
//!
//! Any -> Idle              (pointer-up - finalizes the gesture)
//! ```

use crate::types::{ItemId, ItemKind};
use kurbo::{Point, Rect, Vec2};
use std::collections::HashMap;

/// Provisional, unpersisted copy of an item shown while alt is held. The
/// renderer draws it as a semi-transparent ghost; it reaches the store only
/// when the gesture commits on pointer-up.
#[derive(Clone, Debug, PartialEq)]
pub struct ClonePreview {
    /// Provisional id; becomes meaningless if the clone is cancelled.
    pub id: ItemId,
    pub kind: ItemKind,
    pub x: f64,
    pub y: f64,
    pub rotation_degrees: f64,
}

impl ClonePreview {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// What a completed pointer gesture amounted to. Computed once at
/// pointer-up and consumed by the trailing canvas click: only `NoOp` (or a
/// click with no preceding gesture) clears the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Selection changed (or was deliberately kept) without movement.
    Selected,
    /// A marquee captured at least one item.
    Marqueed,
    /// Items actually moved, or a clone was committed.
    Dragged,
    /// A rotation handle was worked; rotation was applied live.
    RotatedOnly,
    /// The gesture touched nothing the click handler should preserve.
    NoOp,
}

/// Mutually exclusive gesture for the active pointer-down sequence.
#[derive(Clone, Debug, Default)]
pub enum Gesture {
    #[default]
    Idle,

    /// Dragging a single item.
    DraggingSolo {
        item: ItemId,
        /// Cursor-to-center delta captured at pointer-down.
        offset: Vec2,
        /// The item's center when the drag started; restored if the drag
        /// converts into a clone.
        origin: Point,
        /// Canvas position of the pointer-down, for zero-displacement
        /// detection.
        pressed_at: Point,
        moved: bool,
        shift_held: bool,
    },

    /// Dragging every selected item, keeping relative positions fixed.
    DraggingGroup {
        /// The item under the cursor.
        primary: ItemId,
        /// Cursor-to-center delta for every selected item.
        offsets: HashMap<ItemId, Vec2>,
        pressed_at: Point,
        moved: bool,
        shift_held: bool,
    },

    /// Alt-dragging a ghost copy; the store is untouched until commit.
    Cloning {
        source: ItemId,
        /// Source center at drag start, for alt round trips.
        origin: Point,
        offset: Vec2,
        preview: ClonePreview,
    },

    /// Working a corner rotation handle.
    Rotating { item: ItemId },

    /// Rubber-band selection over empty canvas.
    Marqueeing {
        start: Point,
        current: Point,
        /// Shift was held at marquee start: captured items toggle instead
        /// of replacing the selection.
        additive: bool,
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(
            self,
            Self::DraggingSolo { .. } | Self::DraggingGroup { .. } | Self::Cloning { .. }
        )
    }

    pub fn is_cloning(&self) -> bool {
        matches!(self, Self::Cloning { .. })
    }

    pub fn is_rotating(&self) -> bool {
        matches!(self, Self::Rotating { .. })
    }

    pub fn is_marqueeing(&self) -> bool {
        matches!(self, Self::Marqueeing { .. })
    }

    /// Item under an active drag, if any.
    pub fn dragging_item(&self) -> Option<ItemId> {
        match self {
            Self::DraggingSolo { item, .. } => Some(*item),
            Self::DraggingGroup { primary, .. } => Some(*primary),
            Self::Cloning { source, .. } => Some(*source),
            _ => None,
        }
    }

    pub fn rotating_item(&self) -> Option<ItemId> {
        match self {
            Self::Rotating { item } => Some(*item),
            _ => None,
        }
    }

    pub fn clone_preview(&self) -> Option<&ClonePreview> {
        match self {
            Self::Cloning { preview, .. } => Some(preview),
            _ => None,
        }
    }

    /// Axis-aligned marquee rectangle, normalized for any drag direction.
    pub fn marquee_rect(&self) -> Option<Rect> {
        match self {
            Self::Marqueeing { start, current, .. } => {
                Some(Rect::from_points(*start, *current))
            }
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
