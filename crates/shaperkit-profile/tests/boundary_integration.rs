//! Integration tests for boundary reconstruction

use shaperkit_profile::{
    loop_bounds, reorder, ArcElement, ArcParameters, PathElement, Segment, ShelfPacker,
};
use shaperkit_core::geom::{Bounds2, Point2};
use std::f64::consts::{FRAC_PI_2, PI};

fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> PathElement {
    PathElement::Segment(Segment::new(Point2::new(x0, y0), Point2::new(x1, y1)))
}

fn arc(center: (f64, f64), r: f64, start_angle: f64, end_angle: f64) -> PathElement {
    PathElement::Arc(ArcElement {
        center: Point2::new(center.0, center.1),
        xaxis: Point2::new(r, 0.0),
        yaxis: Point2::new(0.0, r),
        start_angle,
        end_angle,
        reversed: false,
    })
}

#[test]
fn test_rounded_slot_boundary() {
    // A slot: two straight flanks joined by semicircular ends, reported in
    // scrambled order with one flank backwards.
    let elements = vec![
        arc((4.0, 1.0), 1.0, -FRAC_PI_2, FRAC_PI_2),
        seg(0.0, 2.0, 4.0, 2.0), // backwards
        arc((0.0, 1.0), 1.0, FRAC_PI_2, 1.5 * PI),
        seg(0.0, 0.0, 4.0, 0.0),
    ];

    let looped = reorder(elements).unwrap();
    assert_eq!(looped.len(), 4);

    for pair in looped.elements().windows(2) {
        assert!(pair[0]
            .end_position()
            .matches_endpoint(pair[1].start_position()));
    }
    let last = looped.elements().last().unwrap();
    assert!(last
        .end_position()
        .matches_endpoint(looped.elements()[0].start_position()));
}

#[test]
fn test_arc_parameters_of_reordered_loop() {
    // Reordering may flip an arc; its parameters must follow the flip
    let elements = vec![
        seg(0.0, 0.0, 1.0, 0.0),
        // Reported backwards: curve runs (0,1) -> (1,0) after reversal
        arc((0.0, 0.0), 1.0, 0.0, FRAC_PI_2).reversed(),
        seg(0.0, 1.0, 0.0, 0.0),
    ];
    let looped = reorder(elements).unwrap();

    let PathElement::Arc(reordered_arc) = looped.elements()[1] else {
        panic!("expected the arc second");
    };
    let params = ArcParameters::from_arc(&reordered_arc).unwrap();
    assert!(params.start.near(Point2::new(1.0, 0.0)));
    assert!(params.end.near(Point2::new(0.0, 1.0)));
    assert_eq!(params.sweep_flag(), '1');
}

#[test]
fn test_layout_of_measured_loops() {
    // Bounds from the boundary feed straight into the packer
    let tall = vec![
        seg(0.0, 0.0, 1.0, 0.0),
        seg(1.0, 0.0, 1.0, 3.0),
        seg(1.0, 3.0, 0.0, 3.0),
        seg(0.0, 3.0, 0.0, 0.0),
    ];
    let wide: Vec<PathElement> = tall
        .iter()
        .map(|e| match e {
            PathElement::Segment(s) => PathElement::Segment(Segment::new(
                Point2::new(s.start.y, s.start.x),
                Point2::new(s.end.y, s.end.x),
            )),
            other => *other,
        })
        .collect();

    let mut packer = ShelfPacker::new(6.0, 0.5);
    let p1 = packer.place(&loop_bounds(&tall));
    let p2 = packer.place(&loop_bounds(&wide));

    assert_eq!((p1.dx, p1.dy), (0.5, 0.5));
    assert_eq!((p2.dx, p2.dy), (2.0, 0.5));

    let viewport = packer.viewport();
    // Row height is the taller loop plus the sheet margin
    assert_eq!(viewport, Bounds2::new(0.0, 0.0, 5.5, 3.5));
}
