//! Arc parameterization
//!
//! SVG arc commands want radii, an x-axis rotation, a sweep flag, and an
//! endpoint. Boundary arcs arrive instead as a generating ellipse: a center
//! and two conjugate radius vectors that need not be orthogonal or equal
//! length, plus parametric start/end angles. This module derives the
//! canonical parameters.
//!
//! The principal axes of a conjugate-diameter ellipse fall out of the
//! half-angle identity `t = atan2(2(A.B), A.A - B.B) / 2`; evaluating the
//! ellipse at `t` and `t + pi/2` gives the two orthogonal vertex vectors
//! whose magnitudes are the radii. See "Ellipse as an affine image of the
//! unit circle".
//!
//! Arcs spanning more than half the ellipse are flagged for splitting at the
//! angular midpoint: emitting two sub-arcs instead of a large-arc flag keeps
//! the degenerate closed case (start == end) unambiguous.

use crate::element::ArcElement;
use shaperkit_core::error::ProfileError;
use shaperkit_core::geom::{Point2, GEOM_TOLERANCE};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Canonical SVG-style parameters of one boundary arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParameters {
    /// Radius along the first principal vertex.
    pub rx: f64,
    /// Radius along the second principal vertex.
    pub ry: f64,
    /// Rotation of the rx vertex from the +x axis, degrees.
    pub rotation_deg: f64,
    /// Reported start point (reversal-aware).
    pub start: Point2,
    /// Reported end point (reversal-aware).
    pub end: Point2,
    /// Point at the angular midpoint, absolute.
    pub mid: Point2,
    /// Arc bends clockwise in +y-down space.
    pub sweep: bool,
    /// Angular span exceeds pi; emit as two sub-arcs via `mid`.
    pub large_arc: bool,
}

impl ArcParameters {
    /// Derive canonical parameters from a boundary arc.
    ///
    /// Fails with [`ProfileError::DegenerateEllipse`] when an axis vector is
    /// zero-length or non-finite. Inputs whose end angle does not exceed the
    /// start angle are lifted by one turn so the span is positive.
    pub fn from_arc(arc: &ArcElement) -> Result<Self, ProfileError> {
        let a = arc.xaxis;
        let b = arc.yaxis;

        if !a.is_finite() || !b.is_finite() || !arc.center.is_finite() {
            return Err(ProfileError::DegenerateEllipse {
                reason: "non-finite ellipse definition".to_string(),
            });
        }
        let len_a = a.length();
        let len_b = b.length();
        if len_a <= GEOM_TOLERANCE || len_b <= GEOM_TOLERANCE {
            return Err(ProfileError::DegenerateEllipse {
                reason: format!("axis lengths {:.6} and {:.6}", len_a, len_b),
            });
        }
        if !arc.start_angle.is_finite() || !arc.end_angle.is_finite() {
            return Err(ProfileError::DegenerateEllipse {
                reason: "non-finite arc angles".to_string(),
            });
        }

        let start_angle = arc.start_angle;
        let mut end_angle = arc.end_angle;
        if end_angle <= start_angle {
            end_angle += TAU;
        }

        // Relative point on the ellipse at parametric angle t
        let rel = |t: f64| a * t.cos() + b * t.sin();

        let dot = a.dot(b);
        let is_circle = dot.abs() <= GEOM_TOLERANCE && (len_a - len_b).abs() <= GEOM_TOLERANCE;

        let (vx, rx, ry) = if is_circle {
            (a, len_a, len_a)
        } else {
            let vertex_angle = 0.5 * (2.0 * dot).atan2(a.dot(a) - b.dot(b));
            let vx = rel(vertex_angle);
            let vy = rel(vertex_angle + FRAC_PI_2);
            (vx, vx.length(), vy.length())
        };

        let rotation_deg = vx.y.atan2(vx.x).to_degrees();

        let mid = arc.center + rel(0.5 * (start_angle + end_angle));
        let large_arc = end_angle - start_angle > PI;

        let start = arc.start_position();
        let end = arc.end_position();

        // Sweep to the midpoint is always < half a turn: the arc is
        // clockwise iff (center -> mid) lies on the clockwise side of
        // (center -> start), +y down.
        let c_to_s = start - arc.center;
        let c_to_m = mid - arc.center;
        let sweep = c_to_m.dot(c_to_s.cw_normal()) > 0.0;

        Ok(Self {
            rx,
            ry,
            rotation_deg,
            start,
            end,
            mid,
            sweep,
            large_arc,
        })
    }

    /// The SVG sweep flag character.
    pub fn sweep_flag(&self) -> char {
        if self.sweep {
            '1'
        } else {
            '0'
        }
    }
}
