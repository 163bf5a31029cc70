//! Path data emission
//!
//! Walks an ordered loop and produces the SVG `d` attribute: a single
//! leading move to the first element's start, one line per segment, one or
//! two arc commands per arc (large arcs are pre-split at their angular
//! midpoint, so the large-arc flag is always 0), and a final close-path.
//! Coordinates, radii, and rotations are written with fixed 3-decimal
//! precision; rotation is in degrees.

use shaperkit_core::error::ProfileError;
use shaperkit_core::geom::Point2;
use shaperkit_profile::arc::ArcParameters;
use shaperkit_profile::element::PathElement;
use shaperkit_profile::order::OrderedLoop;

fn arc_command(params: &ArcParameters, to: Point2) -> String {
    format!(
        "A {:.3} {:.3} {:.3} 0 {} {:.3} {:.3}",
        params.rx,
        params.ry,
        params.rotation_deg,
        params.sweep_flag(),
        to.x,
        to.y
    )
}

/// Render an ordered loop as an SVG path `d` string.
///
/// Pure function of the loop; fails only if an arc's ellipse definition is
/// degenerate.
pub fn path_data(ordered: &OrderedLoop) -> Result<String, ProfileError> {
    let mut commands: Vec<String> = Vec::with_capacity(ordered.len() + 2);

    for (i, element) in ordered.iter().enumerate() {
        if i == 0 {
            let start = element.start_position();
            commands.push(format!("M {:.3} {:.3}", start.x, start.y));
        }
        match element {
            PathElement::Segment(seg) => {
                commands.push(format!("L {:.3} {:.3}", seg.end.x, seg.end.y));
            }
            PathElement::Arc(arc) => {
                let params = ArcParameters::from_arc(arc)?;
                if params.large_arc {
                    commands.push(arc_command(&params, params.mid));
                }
                commands.push(arc_command(&params, params.end));
            }
        }
    }

    commands.push("Z".to_string());
    Ok(commands.join(" "))
}
