//! Pointer and keyboard input handling for the plan canvas.
//!
//! This module implements all mouse interaction logic for the stage plot:
//! item selection, solo and group dragging, alt-drag cloning, corner-handle
//! rotation, and marquee selection.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`Gesture`) to track the
//! current interaction mode. One gesture is active per pointer-down sequence;
//! pointer-up computes a `GestureOutcome` tag that the trailing canvas click
//! consumes, replacing the fragile suppress-clear boolean.
//!
//! ## Modules
//!
//! - `state` - gesture state machine, clone preview, gesture outcome
//! - `coords` - screen/canvas coordinate conversion
//! - `mouse_down` - pointer-down handling (hit test, selection, gesture entry)
//! - `drag` - pointer-move handling (drag, clone ghost, rotation, marquee)
//! - `mouse_up` - pointer-up handling (commit, capture, outcome, reset)
//! - `keyboard` - deletion and alt-clone conversion/cancellation

pub mod coords;
mod drag;
mod keyboard;
mod mouse_down;
mod mouse_up;
mod state;

pub use state::{ClonePreview, Gesture, GestureOutcome};

use crate::types::ItemId;
use kurbo::{Point, Rect};

/// Modifier keys sampled with each pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
}

/// A pointer event in screen coordinates. Conversion into canvas space goes
/// through the `CanvasTransform` handed to each handler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(position: Point, modifiers: Modifiers) -> Self {
        Self {
            position,
            modifiers,
        }
    }
}

/// Keys the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Alt,
}

/// Interprets the raw event stream into gestures and store calls.
///
/// Owns only transient interaction state; all durable state lives in the
/// `Plan`, which is passed into every handler explicitly.
#[derive(Debug, Default)]
pub struct GestureController {
    pub(crate) state: Gesture,
    /// Last pointer position seen, in canvas space. Needed when a key event
    /// (alt-convert) has to re-derive a cursor-relative position.
    pub(crate) last_cursor: Option<Point>,
    /// Outcome of the last completed gesture, not yet consumed by the
    /// canvas click handler.
    pub(crate) last_outcome: Option<GestureOutcome>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture(&self) -> &Gesture {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    /// Current marquee rectangle, if a marquee is being dragged.
    pub fn marquee_rect(&self) -> Option<Rect> {
        self.state.marquee_rect()
    }

    /// Clone ghost the renderer should draw, if alt-cloning.
    pub fn clone_preview(&self) -> Option<&ClonePreview> {
        self.state.clone_preview()
    }

    /// Item currently being rotated, if any. The cursor-image collaborator
    /// reads the angle off the store with this id.
    pub fn rotating_item(&self) -> Option<ItemId> {
        self.state.rotating_item()
    }

    /// Item under an active drag (solo primary, group primary, or clone
    /// source), if any.
    pub fn dragging_item(&self) -> Option<ItemId> {
        self.state.dragging_item()
    }
}
