//! 2D geometry primitives
//!
//! `Point2` doubles as a position and a vector on the working plane (faces
//! are flattened to z=0 before they reach this crate). Two tolerances govern
//! comparisons: a fine one for geometric equality and a coarse one for
//! endpoint matching during boundary reordering, since duplicated arc
//! endpoints can drift from their source by a few hundredths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Tolerance for geometric near-equality of coordinates.
pub const GEOM_TOLERANCE: f64 = 0.0005;

/// Tolerance for endpoint matching while chaining boundary elements.
pub const ENDPOINT_TOLERANCE: f64 = 0.05;

/// A point (or vector) on the z=0 working plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product, treating both points as vectors.
    pub fn dot(self, other: Point2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Vector magnitude.
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Distance to another point.
    pub fn distance(self, other: Point2) -> f64 {
        (self - other).length()
    }

    /// Near-equality within [`GEOM_TOLERANCE`].
    pub fn near(self, other: Point2) -> bool {
        self.distance(other) < GEOM_TOLERANCE
    }

    /// Endpoint matching within the coarse [`ENDPOINT_TOLERANCE`].
    pub fn matches_endpoint(self, other: Point2) -> bool {
        self.distance(other) < ENDPOINT_TOLERANCE
    }

    /// Clockwise normal in a +y-down coordinate space: (x, y) -> (-y, x).
    pub fn cw_normal(self) -> Point2 {
        Point2::new(-self.y, self.x)
    }

    pub fn translated(self, dx: f64, dy: f64) -> Point2 {
        Point2::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Point2;

    fn mul(self, scalar: f64) -> Point2 {
        Point2::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Point2 {
    type Output = Point2;

    fn neg(self) -> Point2 {
        Point2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3},{:.3})", self.x, self.y)
    }
}

/// Axis-aligned bounding box accumulator.
///
/// Starts empty (inverted extents) and grows as points are fed in. Once a
/// loop is finalized the box is read, not mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds2 {
    /// An empty box that any expansion will overwrite.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Grow to include a point.
    pub fn expand(&mut self, p: Point2) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Grow to include another box.
    pub fn union(&mut self, other: &Bounds2) {
        if other.is_empty() {
            return;
        }
        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl fmt::Display for Bounds2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3},{:.3} {:.3},{:.3}]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
