//! Core geometry types: Offset, Size.
//!
//! Positions and extents are measured in renderer pixels. Widgets keep their
//! own origin as an [`Offset`] and translate pointer coordinates into
//! track-local space before handing them to the interaction logic.

use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// A 2D position or displacement in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    /// The origin.
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    /// Create a new offset.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Offset {
    type Output = Offset;
    #[inline]
    fn add(self, rhs: Offset) -> Offset {
        Offset { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Offset {
    type Output = Offset;
    #[inline]
    fn sub(self, rhs: Offset) -> Offset {
        Offset { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in pixels (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Offset that places a box of size `inner` at the center of `self`.
    ///
    /// Components go negative when `inner` is larger than `self`.
    #[inline]
    pub fn center_of(self, inner: Size) -> Offset {
        Offset::new(
            (self.width - inner.width) / 2.0,
            (self.height - inner.height) / 2.0,
        )
    }

    /// Whether the local point (x, y) is inside `0..width` and `0..height`.
    #[inline]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= 0.0 && x < self.width && y >= 0.0 && y < self.height
    }
}

// ===========================================================================
// Tests
// ===========================================================================
