//! Integration tests for the full export pipeline

use shaperkit_core::config::{ExportConfig, OutputMode};
use shaperkit_core::geom::Point2;
use shaperkit_core::units::Unit;
use shaperkit_profile::element::{ArcElement, PathElement, Segment};
use shaperkit_profile::face::{FaceMaterial, FaceProfile, ProfileJob};
use shaperkit_svg::write_job;
use std::f64::consts::{FRAC_PI_2, TAU};

fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> PathElement {
    PathElement::Segment(Segment::new(Point2::new(x0, y0), Point2::new(x1, y1)))
}

fn circle(center: (f64, f64), r: f64) -> Vec<PathElement> {
    vec![PathElement::Arc(ArcElement {
        center: Point2::new(center.0, center.1),
        xaxis: Point2::new(r, 0.0),
        yaxis: Point2::new(0.0, r),
        start_angle: 0.0,
        end_angle: TAU,
        reversed: false,
    })]
}

/// A rounded-corner plate with a circular bolt hole, boundary scrambled.
fn plate_with_hole() -> FaceProfile {
    let corner = PathElement::Arc(ArcElement {
        center: Point2::new(3.0, 1.0),
        xaxis: Point2::new(1.0, 0.0),
        yaxis: Point2::new(0.0, 1.0),
        start_angle: -FRAC_PI_2,
        end_angle: 0.0,
        reversed: false,
    });
    FaceProfile {
        outer: vec![
            seg(4.0, 1.0, 4.0, 2.0),
            corner,
            seg(0.0, 2.0, 4.0, 2.0), // backwards
            seg(0.0, 0.0, 3.0, 0.0),
            seg(0.0, 2.0, 0.0, 0.0),
        ],
        cutouts: vec![circle((1.0, 1.0), 0.25)],
        material: FaceMaterial::Plain,
    }
}

#[test]
fn test_full_job_single_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let job = ProfileJob {
        title: "plate".to_string(),
        faces: vec![plate_with_hole()],
        guides: vec![],
        config: None,
    };
    let config = ExportConfig {
        units: Unit::Inches,
        layout_spacing: 0.5,
        sheet_width: 24.0,
        cut_depth: 0.25,
        output_mode: OutputMode::SingleFile,
    };

    let written = write_job(&job, &config, dir.path()).unwrap();
    assert_eq!(written.len(), 1);
    assert!(written[0].ends_with("plate.svg"));

    let svg = std::fs::read_to_string(&written[0]).unwrap();

    // Document framing
    assert!(svg.starts_with("<!-- ARC is A"));
    assert!(svg.contains("xmlns:shaper='http://www.shapertools.com/namespaces/shaper'"));
    assert!(svg.contains("<title>plate cut profile"));

    // Outer boundary: filled black, through depth
    assert!(svg.contains("shaper:pathType='outer'"));
    assert!(svg.contains("fill='rgb(0,0,0)'"));
    assert!(svg.contains("shaper:cutDepth='0.250'"));

    // Bolt hole: white-filled inner cutout
    assert!(svg.contains("shaper:pathType='inner'"));
    assert!(svg.contains("fill='rgb(255,255,255)'"));

    // The full-circle cutout splits into two half arcs
    let inner_path = svg
        .lines()
        .find(|l| l.contains("pathType='inner'"))
        .unwrap();
    assert_eq!(inner_path.matches("A 0.250 0.250").count(), 2);

    // One move command per path, each closed
    for line in svg.lines().filter(|l| l.contains("<path")) {
        assert_eq!(line.matches("M ").count(), 1);
        assert!(line.contains("Z'") || line.contains("Z' "), "{line}");
    }
}

#[test]
fn test_pocket_and_guide_roles() {
    let dir = tempfile::tempdir().unwrap();
    let pocket = FaceProfile {
        outer: vec![
            seg(0.0, 0.0, 2.0, 0.0),
            seg(2.0, 0.0, 2.0, 1.0),
            seg(2.0, 1.0, 0.0, 1.0),
            seg(0.0, 1.0, 0.0, 0.0),
        ],
        // Pocket faces contribute the outer loop only
        cutouts: vec![circle((1.0, 0.5), 0.2)],
        material: FaceMaterial::Pocket { offset: 0.125 },
    };
    let job = ProfileJob {
        title: "tray".to_string(),
        faces: vec![pocket],
        guides: vec![circle((1.0, 0.5), 3.0)],
        config: None,
    };

    let written = write_job(&job, &ExportConfig::default(), dir.path()).unwrap();
    let svg = std::fs::read_to_string(&written[0]).unwrap();

    assert!(svg.contains("shaper:pathType='pocket'"));
    assert!(svg.contains("shaper:cutDepth='0.125'"));
    assert!(svg.contains("fill='rgb(128,128,128)'"));
    assert!(!svg.contains("shaper:pathType='inner'"));

    // Guide is stroked, unfilled, and carries no depth
    let guide_path = svg
        .lines()
        .find(|l| l.contains("pathType='guide'"))
        .unwrap();
    assert!(guide_path.contains("stroke='rgb(20,110,255)'"));
    assert!(!guide_path.contains("cutDepth"));
    assert!(!guide_path.contains("fill"));
}

#[test]
fn test_multi_file_export() {
    let dir = tempfile::tempdir().unwrap();
    let square = |s: f64| FaceProfile {
        outer: vec![
            seg(0.0, 0.0, s, 0.0),
            seg(s, 0.0, s, s),
            seg(s, s, 0.0, s),
            seg(0.0, s, 0.0, 0.0),
        ],
        cutouts: vec![],
        material: FaceMaterial::Plain,
    };
    let job = ProfileJob {
        title: "parts".to_string(),
        faces: vec![square(1.0), square(2.0)],
        guides: vec![],
        config: None,
    };
    let config = ExportConfig {
        output_mode: OutputMode::MultiFile,
        units: Unit::Millimeters,
        ..ExportConfig::default()
    };

    let written = write_job(&job, &config, dir.path()).unwrap();
    assert_eq!(written.len(), 2);
    assert!(written[0].ends_with("parts0.svg"));
    assert!(written[1].ends_with("parts1.svg"));

    let second = std::fs::read_to_string(&written[1]).unwrap();
    assert!(second.contains("width='2.000mm'"));
    assert!(second.contains("<title>parts cut profile 1"));
}

#[test]
fn test_malformed_face_surfaces_error() {
    let dir = tempfile::tempdir().unwrap();
    let broken = FaceProfile {
        outer: vec![seg(0.0, 0.0, 1.0, 0.0), seg(3.0, 3.0, 4.0, 3.0)],
        cutouts: vec![],
        material: FaceMaterial::Plain,
    };
    let job = ProfileJob {
        title: "broken".to_string(),
        faces: vec![broken],
        guides: vec![],
        config: None,
    };

    let err = write_job(&job, &ExportConfig::default(), dir.path()).unwrap_err();
    assert!(err.to_string().contains("Disconnected boundary"));
    // Nothing was written
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
