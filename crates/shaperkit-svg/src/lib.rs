//! # ShaperKit SVG
//!
//! Emission layer: turns ordered, classified boundary loops into Shaper
//! Origin SVG documents.
//!
//! - **path_data** - draw-command strings (move/line/arc, large arcs
//!   pre-split) from an ordered loop
//! - **node** - minimal XML element tree with ordered attributes
//! - **canvas** - the SVG document: root attributes, vendor namespace,
//!   title/desc, one path node per loop
//! - **export** - whole-job driver: layout, reorder, classify, emit, write

pub mod canvas;
pub mod export;
pub mod node;
pub mod path_data;

pub use canvas::SvgDocument;
pub use export::{build_documents, write_job, RenderedDocument, RenderedLoop};
pub use node::Node;
pub use path_data::path_data;
