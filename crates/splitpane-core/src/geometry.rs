#![forbid(unsafe_code)]

//! Geometric primitives.

/// A point in host surface coordinates (e.g. CSS pixels, `clientX`/`clientY`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in host surface coordinates.
///
/// Used for the measured container box and for the regions produced by the
/// render layout. Lengths are real-valued; a host may report zero or even
/// negative widths during teardown or animation, and consumers must cope.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    /// Width in host units.
    pub width: f64,
    /// Height in host units.
    pub height: f64,
}

impl Bounds {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Horizontal offset of `point` from the leading (left) edge.
    ///
    /// May be negative or exceed `width` when the pointer is outside the box.
    #[inline]
    #[must_use]
    pub fn relative_x(&self, point: Point) -> f64 {
        point.x - self.x
    }
}
