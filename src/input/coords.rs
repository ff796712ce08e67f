//! Coordinate conversion between screen space and canvas space.
//!
//! The canvas has fixed logical dimensions but is scaled and offset to fit
//! its viewport, so pointer events must pass through the inverse of that
//! mapping before any hit test. Until the viewport has been measured there
//! is no valid mapping; handlers abort on `TransformError` without mutating
//! any state.

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use kurbo::{Affine, Point};
use thiserror::Error;

/// Why a pointer position could not be mapped into canvas space.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("canvas viewport has not been measured yet")]
    ViewportNotMeasured,
    #[error("canvas transform is not invertible")]
    NonInvertible,
}

/// Mapping from canvas space into the viewport, with its (fallible) inverse.
#[derive(Clone, Copy, Debug)]
pub struct CanvasTransform {
    to_screen: Affine,
    to_canvas: Result<Affine, TransformError>,
}

impl CanvasTransform {
    /// The canvas is not mounted or measured yet; every conversion fails.
    pub fn unmeasured() -> Self {
        Self {
            to_screen: Affine::IDENTITY,
            to_canvas: Err(TransformError::ViewportNotMeasured),
        }
    }

    /// Screen space and canvas space coincide. Handy for tests and for
    /// embedders that render at logical size.
    pub fn identity() -> Self {
        Self {
            to_screen: Affine::IDENTITY,
            to_canvas: Ok(Affine::IDENTITY),
        }
    }

    /// Uniformly scale the canvas to fit a viewport of the given size,
    /// centered on the unused axis (the SVG `viewBox` fit behavior).
    pub fn fit(viewport_width: f64, viewport_height: f64) -> Self {
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            return Self::unmeasured();
        }
        let scale = (viewport_width / CANVAS_WIDTH).min(viewport_height / CANVAS_HEIGHT);
        let tx = (viewport_width - CANVAS_WIDTH * scale) / 2.0;
        let ty = (viewport_height - CANVAS_HEIGHT * scale) / 2.0;
        Self::from_affine(Affine::translate((tx, ty)) * Affine::scale(scale))
    }

    /// Use an arbitrary canvas-to-screen affine. Degenerate transforms are
    /// accepted but every screen-to-canvas conversion will fail.
    pub fn from_affine(to_screen: Affine) -> Self {
        let det = to_screen.determinant();
        let to_canvas = if det != 0.0 && det.is_finite() {
            Ok(to_screen.inverse())
        } else {
            Err(TransformError::NonInvertible)
        };
        Self {
            to_screen,
            to_canvas,
        }
    }

    pub fn is_measured(&self) -> bool {
        self.to_canvas.is_ok()
    }

    pub fn canvas_to_screen(&self, pos: Point) -> Point {
        self.to_screen * pos
    }

    pub fn screen_to_canvas(&self, pos: Point) -> Result<Point, TransformError> {
        Ok(self.to_canvas? * pos)
    }
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self::unmeasured()
    }
}
