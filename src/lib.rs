//! stageplan - interaction core for a stage-plot editor.
//!
//! Labeled, rotatable gear icons are arranged on a fixed-size canvas by
//! direct mouse manipulation: click and shift-click selection, marquee
//! selection, solo and group dragging, alt-drag cloning, and corner-handle
//! rotation.
//!
//! Two components carry the design:
//!
//! - [`plan::Plan`] is the single source of truth for item geometry and
//!   selection: pure state transitions, no interaction logic, and a
//!   revision counter as the redraw signal.
//! - [`input::GestureController`] interprets the raw pointer/keyboard event
//!   stream into one gesture at a time and writes back only through the
//!   plan's mutators.
//!
//! Rendering, the toolbar, and cursor-image generation are external
//! collaborators; [`editor::PlanEditor`] is the facade they share.

pub mod constants;
pub mod editor;
pub mod input;
pub mod plan;
pub mod selection;
pub mod spatial_index;
pub mod types;

pub use editor::PlanEditor;
pub use input::coords::{CanvasTransform, TransformError};
pub use input::{Gesture, GestureController, GestureOutcome, Key, Modifiers, PointerEvent};
pub use plan::Plan;
pub use selection::SelectionManager;
pub use types::{ItemId, ItemKind, StageItem};
