//! Strongly-typed geometry primitives for sevenseg.
//!
//! Points are plain `glam::DVec2` values; sizes and bounding boxes get their
//! own types so display dimensions can be validated once at the edge.

use glam::{DVec2, dvec2};
use thiserror::Error;

use crate::defaults;

/// A point in display units (Y grows downward).
pub type Point = DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumericError {
    /// Value is NaN
    #[error("value is NaN")]
    NaN,
    /// Value is infinite
    #[error("value is infinite")]
    Infinite,
    /// Value is negative when non-negative required
    #[error("value is negative")]
    Negative,
}

/// Reject NaN, infinite and negative dimensions.
pub(crate) fn check_dimension(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// 2D size in display units
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// The design canvas every segment shape is defined in.
    pub const CANVAS: Size = Size::new(defaults::CANVAS_WIDTH, defaults::CANVAS_HEIGHT);

    /// Create a Size (unchecked).
    /// Use `try_new` for user-provided values.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    /// Create a Size with validation (rejects NaN, infinite, negative)
    pub fn try_new(width: f64, height: f64) -> Result<Self, NumericError> {
        Ok(Size {
            width: check_dimension(width)?,
            height: check_dimension(height)?,
        })
    }

    /// Width divided by height.
    ///
    /// A zero height yields an infinite (or NaN) aspect, same as plain `f64` division.
    #[inline]
    pub fn aspect(self) -> f64 {
        self.width / self.height
    }

    /// Per-axis factors that stretch `self` onto `target`.
    #[inline]
    pub fn scale_to(self, target: Size) -> DVec2 {
        dvec2(target.width / self.width, target.height / self.height)
    }

    #[inline]
    pub fn as_vec(self) -> DVec2 {
        dvec2(self.width, self.height)
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: dvec2(f64::MAX, f64::MAX),
            max: dvec2(f64::MIN, f64::MIN),
        }
    }

    /// Box spanning `origin` to `origin + size`.
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        BBox {
            min: origin,
            max: origin + size.as_vec(),
        }
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: Point) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include another box
    pub fn expand_bbox(&mut self, other: &BBox) {
        if !other.is_empty() {
            self.expand_point(other.min);
            self.expand_point(other.max);
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Does this box contain `other`, allowing `epsilon` of slack on each side?
    pub fn contains_bbox(&self, other: &BBox, epsilon: f64) -> bool {
        other.min.x >= self.min.x - epsilon
            && other.min.y >= self.min.y - epsilon
            && other.max.x <= self.max.x + epsilon
            && other.max.y <= self.max.y + epsilon
    }
}
