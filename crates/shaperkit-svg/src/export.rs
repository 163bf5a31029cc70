//! Job export driver
//!
//! Runs the whole pipeline for a batch of faces: shelf-pack the face
//! bounding boxes, translate each face to its placement, reorder and
//! classify every loop, emit path data, and assemble the documents - one
//! per job in single-file mode, one per face in multi-file mode.
//!
//! Faces are written sequentially; in multi-file mode, documents already
//! written stay on disk when a later face fails, and the error propagates.

use crate::canvas::SvgDocument;
use crate::path_data::path_data;
use shaperkit_core::config::{ExportConfig, OutputMode};
use shaperkit_core::error::{DocumentError, Result};
use shaperkit_core::geom::Bounds2;
use shaperkit_profile::classify::{LoopAttributes, LoopRole};
use shaperkit_profile::element::PathElement;
use shaperkit_profile::face::{loop_bounds, FaceProfile, ProfileJob};
use shaperkit_profile::layout::ShelfPacker;
use shaperkit_profile::order::reorder;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Tool version recorded in the vendor namespace of every document.
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One emitted loop: draw commands plus rendering attributes.
#[derive(Debug, Clone)]
pub struct RenderedLoop {
    pub data: String,
    pub attrs: LoopAttributes,
}

/// A finished document and the file name it should be written under.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub file_name: String,
    pub document: SvgDocument,
}

/// Reorder, classify, and emit every loop a face contributes.
fn render_face_loops(face: &FaceProfile, default_depth: f64) -> Result<Vec<RenderedLoop>> {
    let mut rendered = Vec::new();
    for (elements, role, depth) in face.classified_loops(default_depth) {
        let ordered = reorder(elements.to_vec())?;
        let data = path_data(&ordered)?;
        debug!(role = %role, elements = ordered.len(), "rendered loop");
        rendered.push(RenderedLoop {
            data,
            attrs: LoopAttributes::for_role(role, depth),
        });
    }
    Ok(rendered)
}

/// Reorder and emit a free-standing guide loop.
fn render_guide(elements: &[PathElement]) -> Result<RenderedLoop> {
    let ordered = reorder(elements.to_vec())?;
    let data = path_data(&ordered)?;
    Ok(RenderedLoop {
        data,
        attrs: LoopAttributes::for_role(LoopRole::Guide, 0.0),
    })
}

/// Assemble the single-sheet document: all faces packed onto one viewport.
fn build_single_document(job: &ProfileJob, cfg: &ExportConfig) -> Result<RenderedDocument> {
    let mut packer = ShelfPacker::new(cfg.sheet_width, cfg.layout_spacing);
    let mut loops = Vec::new();

    for (index, face) in job.faces.iter().enumerate() {
        let placement = packer.place(&face.bounds());
        let placed = face.translated(placement.dx, placement.dy);
        let rendered = render_face_loops(&placed, cfg.cut_depth)
            .inspect_err(|e| warn!(face = index, %e, "face failed to render"))?;
        loops.extend(rendered);
    }

    let mut viewport = packer.viewport();
    for guide in &job.guides {
        loops.push(render_guide(guide)?);
        viewport.union(&loop_bounds(guide));
    }

    let mut document = SvgDocument::new(viewport, cfg.units, TOOL_VERSION);
    document.set_title(&format!("{} cut profile", job.title));
    document.set_desc(&format!("Shaper cut profile from model {}", job.title));
    for looped in &loops {
        document.add_path(&looped.data, &looped.attrs);
    }

    Ok(RenderedDocument {
        file_name: format!("{}.svg", job.title),
        document,
    })
}

/// Assemble one document for a single face, translated to its own origin.
fn build_face_document(
    face: &FaceProfile,
    index: usize,
    job: &ProfileJob,
    cfg: &ExportConfig,
) -> Result<RenderedDocument> {
    let bounds = face.bounds();
    let placed = face.translated(-bounds.min_x, -bounds.min_y);
    let viewport = Bounds2::new(0.0, 0.0, bounds.width(), bounds.height());

    let mut document = SvgDocument::new(viewport, cfg.units, TOOL_VERSION);
    document.set_title(&format!("{} cut profile {}", job.title, index));
    document.set_desc(&format!("Shaper cut profile from model {}", job.title));
    let rendered = render_face_loops(&placed, cfg.cut_depth)
        .inspect_err(|e| warn!(face = index, %e, "face failed to render"))?;
    for looped in rendered {
        document.add_path(&looped.data, &looped.attrs);
    }

    Ok(RenderedDocument {
        file_name: format!("{}{}.svg", job.title, index),
        document,
    })
}

/// Assemble every document the job produces, without writing anything.
pub fn build_documents(job: &ProfileJob, cfg: &ExportConfig) -> Result<Vec<RenderedDocument>> {
    match cfg.output_mode {
        OutputMode::SingleFile => Ok(vec![build_single_document(job, cfg)?]),
        OutputMode::MultiFile => job
            .faces
            .iter()
            .enumerate()
            .map(|(i, face)| build_face_document(face, i, job, cfg))
            .collect(),
    }
}

fn write_document(doc: &RenderedDocument, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(&doc.file_name);
    let file = File::create(&path).map_err(|e| DocumentError::SinkUnavailable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let mut sink = BufWriter::new(file);
    doc.document.write(&mut sink)?;
    info!(path = %path.display(), "wrote cut profile");
    Ok(path)
}

/// Export the job into `out_dir`, one file per document.
///
/// Documents are built and written face by face, so in multi-file mode a
/// failure partway through leaves the already-written files in place.
pub fn write_job(job: &ProfileJob, cfg: &ExportConfig, out_dir: &Path) -> Result<Vec<PathBuf>> {
    info!(
        faces = job.faces.len(),
        mode = ?cfg.output_mode,
        "exporting job {}",
        job.title
    );

    let mut written = Vec::new();
    match cfg.output_mode {
        OutputMode::SingleFile => {
            let doc = build_single_document(job, cfg)?;
            written.push(write_document(&doc, out_dir)?);
        }
        OutputMode::MultiFile => {
            for (i, face) in job.faces.iter().enumerate() {
                let doc = build_face_document(face, i, job, cfg)?;
                written.push(write_document(&doc, out_dir)?);
            }
        }
    }
    Ok(written)
}
