//! Face and job input model
//!
//! Collaborators hand the pipeline faces that are already flattened onto the
//! z=0 working plane: an outer boundary loop, any interior cutout loops, and
//! a material marking. Pocket faces carry their externally-computed surface
//! offset; the pipeline routes that depth, it never computes it. A job is a
//! batch of faces plus optional free-standing guide loops, loadable from a
//! JSON file.

use crate::classify::LoopRole;
use crate::element::PathElement;
use serde::{Deserialize, Serialize};
use shaperkit_core::config::ExportConfig;
use shaperkit_core::error::{DocumentError, Result};
use shaperkit_core::geom::Bounds2;
use std::path::Path;

/// Material marking of a face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FaceMaterial {
    /// Ordinary face: outer loop and cutouts are cut through.
    Plain,
    /// Pocket face: only the outer loop is emitted, cleared to `offset`.
    Pocket {
        /// Depth below the reference surface, computed upstream.
        offset: f64,
    },
}

impl Default for FaceMaterial {
    fn default() -> Self {
        Self::Plain
    }
}

/// One planar face to cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceProfile {
    /// The outer boundary loop, unordered records.
    pub outer: Vec<PathElement>,
    /// Interior cutout loops, unordered records.
    #[serde(default)]
    pub cutouts: Vec<Vec<PathElement>>,
    #[serde(default)]
    pub material: FaceMaterial,
}

impl FaceProfile {
    /// Bounding box of the outer loop; cutouts lie inside it by definition.
    pub fn bounds(&self) -> Bounds2 {
        loop_bounds(&self.outer)
    }

    /// Copy with every loop shifted by (dx, dy).
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let shift =
            |elements: &[PathElement]| elements.iter().map(|e| e.translated(dx, dy)).collect();
        Self {
            outer: shift(&self.outer),
            cutouts: self.cutouts.iter().map(|l| shift(l)).collect(),
            material: self.material,
        }
    }

    /// The loops this face contributes, with their roles and the depth
    /// source per role: pockets use the routed surface offset for the outer
    /// loop only, everything else cuts through at the configured default.
    pub fn classified_loops(&self, default_depth: f64) -> Vec<(&[PathElement], LoopRole, f64)> {
        match self.material {
            FaceMaterial::Pocket { offset } => {
                vec![(self.outer.as_slice(), LoopRole::Pocket, offset)]
            }
            FaceMaterial::Plain => {
                let mut loops = vec![(self.outer.as_slice(), LoopRole::Outer, default_depth)];
                for cutout in &self.cutouts {
                    loops.push((cutout.as_slice(), LoopRole::Inner, default_depth));
                }
                loops
            }
        }
    }
}

/// A batch of faces to lay out and export together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileJob {
    /// Model title, used in document metadata and file naming.
    pub title: String,
    pub faces: Vec<FaceProfile>,
    /// Free-standing guide loops, drawn but never cut.
    #[serde(default)]
    pub guides: Vec<Vec<PathElement>>,
    /// Per-job overrides of the export settings.
    #[serde(default)]
    pub config: Option<ExportConfig>,
}

impl ProfileJob {
    /// Load a job description from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(DocumentError::Io)?;
        let job: Self = serde_json::from_str(&content).map_err(DocumentError::Serialization)?;
        Ok(job)
    }
}

/// Bounding box of a loop's elements.
///
/// Samples element endpoints plus each arc's angular midpoint, so arc bulges
/// past their chord still count toward the box.
pub fn loop_bounds(elements: &[PathElement]) -> Bounds2 {
    let mut bounds = Bounds2::empty();
    for element in elements {
        bounds.expand(element.start_position());
        bounds.expand(element.end_position());
        if let PathElement::Arc(arc) = element {
            bounds.expand(arc.point_at(0.5 * (arc.start_angle + arc.end_angle)));
        }
    }
    bounds
}
