//! Core value types for the croptool selection engine.
//!
//! Two coordinate spaces are in play:
//! - **normalized**: fractions of the container size, `0.0..=1.0` on each axis
//! - **pixel**: integer pixels of the real (source) image
//!
//! `Selection` lives in normalized space and is what the interaction code
//! mutates. `PixelRect` is the shape handed to callbacks and public accessors.

use serde::{Deserialize, Serialize};

// ============================================================================
// Points and Sizes
// ============================================================================

/// A 2D point. Units depend on context (page pixels or normalized).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along the given axis.
    #[inline]
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// A width/height pair. Used for real image size and min/max pixel limits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// True if either dimension is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.w.is_finite() && self.h.is_finite()) || self.w <= 0.0 || self.h <= 0.0
    }
}

/// One of the two rectangle axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

// ============================================================================
// Selection
// ============================================================================

/// The selection rectangle in normalized container coordinates.
///
/// After every committed update `w >= 0`, `h >= 0`, `x >= 0`, `y >= 0`,
/// `x + w <= 1` and `y + h <= 1` (up to float rounding).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Selection {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// A zero-size selection seeded at a point.
    pub fn at_point(point: Point) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    #[inline]
    pub fn set_span(&mut self, axis: Axis, position: f64, length: f64) {
        match axis {
            Axis::Horizontal => {
                self.x = position;
                self.w = length;
            }
            Axis::Vertical => {
                self.y = position;
                self.h = length;
            }
        }
    }

    /// Shift the rectangle back inside the unit square without resizing it.
    ///
    /// A negative origin snaps to zero; otherwise any overflow past the far
    /// edge is subtracted from the origin.
    pub fn clamp_to_unit(&mut self) {
        if self.x < 0.0 {
            self.x = 0.0;
        } else if self.x + self.w > 1.0 {
            self.x -= self.x + self.w - 1.0;
        }

        if self.y < 0.0 {
            self.y = 0.0;
        } else if self.y + self.h > 1.0 {
            self.y -= self.y + self.h - 1.0;
        }
    }

    /// The selection as CSS-style percentage box edges.
    pub fn to_percent_box(&self) -> PercentBox {
        PercentBox {
            left: self.x * 100.0,
            top: self.y * 100.0,
            width: self.w * 100.0,
            height: self.h * 100.0,
        }
    }
}

/// Selection box expressed in percent of the container, ready for styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PercentBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Selection in real image pixels. This is the shape every callback receives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

impl std::fmt::Display for PixelRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.w, self.h, self.x, self.y)
    }
}

// ============================================================================
// Container geometry
// ============================================================================

/// The container's content box in page pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBox {
    /// Top-left corner relative to the page
    pub offset: Point,
    /// Rendered width and height
    pub size: Size,
}

impl ContentBox {
    pub const fn new(offset: Point, size: Size) -> Self {
        Self { offset, size }
    }
}
