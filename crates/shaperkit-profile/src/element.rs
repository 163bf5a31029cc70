//! Boundary path elements
//!
//! A face boundary arrives as independent records: straight segments and
//! elliptical arcs, each reporting its own endpoints in arbitrary order and
//! orientation. `PathElement` is the tagged-variant form of those records.
//! Reversal is logical: a reversed element swaps which end it reports as
//! start without altering the underlying curve definition.

use serde::{Deserialize, Serialize};
use shaperkit_core::geom::Point2;

/// A straight boundary segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }
}

/// An elliptical (or circular) arc defined by its generating ellipse.
///
/// The curve is `point(t) = center + xaxis*cos(t) + yaxis*sin(t)` for
/// `t` in `[start_angle, end_angle]`. The axes are conjugate radii: they need
/// not be orthogonal or equal length. Orthogonal equal-length axes make the
/// curve a circular arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcElement {
    pub center: Point2,
    /// Conjugate radius vector A.
    pub xaxis: Point2,
    /// Conjugate radius vector B.
    pub yaxis: Point2,
    /// Start angle in the ellipse's parametric frame, radians.
    pub start_angle: f64,
    /// End angle in the ellipse's parametric frame, radians.
    pub end_angle: f64,
    /// Whether the reported start/end are swapped.
    #[serde(default)]
    pub reversed: bool,
}

impl ArcElement {
    /// Point on the generating ellipse at parametric angle `t`, absolute.
    pub fn point_at(&self, t: f64) -> Point2 {
        self.center + self.xaxis * t.cos() + self.yaxis * t.sin()
    }

    fn curve_start(&self) -> Point2 {
        self.point_at(self.start_angle)
    }

    fn curve_end(&self) -> Point2 {
        self.point_at(self.end_angle)
    }

    pub fn start_position(&self) -> Point2 {
        if self.reversed {
            self.curve_end()
        } else {
            self.curve_start()
        }
    }

    pub fn end_position(&self) -> Point2 {
        if self.reversed {
            self.curve_start()
        } else {
            self.curve_end()
        }
    }
}

/// One element of a face boundary loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PathElement {
    Segment(Segment),
    Arc(ArcElement),
}

impl PathElement {
    /// Reported start, respecting reversal.
    pub fn start_position(&self) -> Point2 {
        match self {
            Self::Segment(seg) => seg.start,
            Self::Arc(arc) => arc.start_position(),
        }
    }

    /// Reported end, respecting reversal.
    pub fn end_position(&self) -> Point2 {
        match self {
            Self::Segment(seg) => seg.end,
            Self::Arc(arc) => arc.end_position(),
        }
    }

    /// A logically-flipped copy: start and end trade places, the underlying
    /// curve is untouched.
    pub fn reversed(&self) -> Self {
        match *self {
            Self::Segment(seg) => Self::Segment(Segment::new(seg.end, seg.start)),
            Self::Arc(arc) => Self::Arc(ArcElement {
                reversed: !arc.reversed,
                ..arc
            }),
        }
    }

    /// Copy shifted by (dx, dy) on the working plane. Arc axes are
    /// direction vectors and do not move.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        match *self {
            Self::Segment(seg) => Self::Segment(Segment::new(
                seg.start.translated(dx, dy),
                seg.end.translated(dx, dy),
            )),
            Self::Arc(arc) => Self::Arc(ArcElement {
                center: arc.center.translated(dx, dy),
                ..arc
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn quarter_circle() -> ArcElement {
        ArcElement {
            center: Point2::ORIGIN,
            xaxis: Point2::new(1.0, 0.0),
            yaxis: Point2::new(0.0, 1.0),
            start_angle: 0.0,
            end_angle: FRAC_PI_2,
            reversed: false,
        }
    }

    #[test]
    fn test_segment_endpoints() {
        let seg = PathElement::Segment(Segment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)));
        assert_eq!(seg.start_position(), Point2::new(0.0, 0.0));
        assert_eq!(seg.end_position(), Point2::new(1.0, 0.0));

        let rev = seg.reversed();
        assert_eq!(rev.start_position(), Point2::new(1.0, 0.0));
        assert_eq!(rev.end_position(), Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_arc_endpoints() {
        let arc = PathElement::Arc(quarter_circle());
        assert!(arc.start_position().near(Point2::new(1.0, 0.0)));
        assert!(arc.end_position().near(Point2::new(0.0, 1.0)));
    }

    #[test]
    fn test_arc_reversal_keeps_curve() {
        let arc = PathElement::Arc(quarter_circle());
        let rev = arc.reversed();

        assert!(rev.start_position().near(Point2::new(0.0, 1.0)));
        assert!(rev.end_position().near(Point2::new(1.0, 0.0)));

        // Double reversal restores the original reporting
        assert_eq!(rev.reversed(), arc);
    }

    #[test]
    fn test_point_at_oblique_axes() {
        let arc = ArcElement {
            center: Point2::new(1.0, 1.0),
            xaxis: Point2::new(2.0, 0.0),
            yaxis: Point2::new(1.0, 1.0),
            start_angle: 0.0,
            end_angle: FRAC_PI_2,
            reversed: false,
        };
        assert!(arc.point_at(0.0).near(Point2::new(3.0, 1.0)));
        assert!(arc.point_at(FRAC_PI_2).near(Point2::new(2.0, 2.0)));
    }

    #[test]
    fn test_translated() {
        let arc = PathElement::Arc(quarter_circle()).translated(2.0, 3.0);
        assert!(arc.start_position().near(Point2::new(3.0, 3.0)));
        assert!(arc.end_position().near(Point2::new(2.0, 4.0)));

        let seg = PathElement::Segment(Segment::new(Point2::ORIGIN, Point2::new(1.0, 0.0)))
            .translated(-1.0, 0.5);
        assert_eq!(seg.start_position(), Point2::new(-1.0, 0.5));
        assert_eq!(seg.end_position(), Point2::new(0.0, 0.5));
    }

    #[test]
    fn test_serde_tagged_form() {
        let json = r#"{"type":"segment","start":{"x":0.0,"y":0.0},"end":{"x":1.0,"y":0.0}}"#;
        let el: PathElement = serde_json::from_str(json).unwrap();
        assert_eq!(el.end_position(), Point2::new(1.0, 0.0));

        let json = r#"{
            "type": "arc",
            "center": {"x": 0.0, "y": 0.0},
            "xaxis": {"x": 1.0, "y": 0.0},
            "yaxis": {"x": 0.0, "y": 1.0},
            "start_angle": 0.0,
            "end_angle": 1.5707963267948966
        }"#;
        let el: PathElement = serde_json::from_str(json).unwrap();
        // reversed defaults to false when absent
        assert!(el.start_position().near(Point2::new(1.0, 0.0)));
    }
}
