//! SVG document assembly
//!
//! Builds the output document tree: an `svg` root sized to the sheet
//! viewport with the Shaper vendor namespace, optional title/description,
//! and one `path` node per rendered loop. Written once per output run, in a
//! single sequential pass.

use crate::node::Node;
use crate::path_data::path_data;
use shaperkit_core::error::{DocumentError, ProfileError};
use shaperkit_core::geom::Bounds2;
use shaperkit_core::units::Unit;
use shaperkit_profile::classify::LoopAttributes;
use shaperkit_profile::order::OrderedLoop;
use std::io::Write;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const SHAPER_NS: &str = "http://www.shapertools.com/namespaces/shaper";
const SVG_VERSION: &str = "1.1";

/// Documents the arc parameter order for anyone reading the output. The
/// large-arc flag is always 0 because arcs past half a turn are pre-split.
const ARC_COMMENT: &str =
    "<!-- ARC is A xrad yrad xrotation-degrees largearc sweep end_x end_y -->\n";

/// One cut-profile document under assembly.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    root: Node,
}

impl SvgDocument {
    /// Start a document covering `viewport`, with lengths suffixed by
    /// `units` and the tool version recorded in the vendor namespace.
    pub fn new(viewport: Bounds2, units: Unit, tool_version: &str) -> Self {
        let fmt_len = |v: f64| format!("{:.3}{}", v, units.suffix());
        let extents = format!(
            "{:.3} {:.3} {:.3} {:.3}",
            viewport.min_x, viewport.min_y, viewport.max_x, viewport.max_y
        );

        let root = Node::new("svg")
            .with_attr("enable-background", format!("new {}", extents))
            .with_attr("height", fmt_len(viewport.height()))
            .with_attr("width", fmt_len(viewport.width()))
            .with_attr("version", SVG_VERSION)
            .with_attr("viewBox", extents)
            .with_attr("x", fmt_len(viewport.min_x))
            .with_attr("y", fmt_len(viewport.min_y))
            .with_attr("xmlns", SVG_NS)
            .with_attr("xmlns:shaper", SHAPER_NS)
            .with_attr("shaper:application", format!("shaperkit {}", tool_version));

        Self { root }
    }

    /// Set the document title.
    pub fn set_title(&mut self, text: &str) {
        self.root.add_child(Node::new("title").with_text(text));
    }

    /// Set the document description.
    pub fn set_desc(&mut self, text: &str) {
        self.root.add_child(Node::new("desc").with_text(text));
    }

    /// Emit one ordered, classified loop as a path node.
    pub fn add_loop(
        &mut self,
        ordered: &OrderedLoop,
        attrs: &LoopAttributes,
    ) -> Result<(), ProfileError> {
        let data = path_data(ordered)?;
        self.add_path(&data, attrs);
        Ok(())
    }

    /// Add a path node from already-rendered draw commands.
    pub fn add_path(&mut self, data: &str, attrs: &LoopAttributes) {
        let mut path = Node::new("path")
            .with_attr("d", data)
            .with_attr("vector-effect", "non-scaling-stroke");
        if let Some(depth) = attrs.cut_depth {
            path.add_attr("shaper:cutDepth", format!("{:.3}", depth));
        }
        path.add_attr("shaper:pathType", attrs.role.label());
        if let Some(fill) = attrs.fill {
            path.add_attr("fill", fill);
        }
        if let Some(stroke) = attrs.stroke {
            path.add_attr("stroke", stroke);
        }
        if let Some(width) = attrs.stroke_width {
            path.add_attr("stroke-width", width.to_string());
        }
        self.root.add_child(path);
    }

    /// Write the document to a sink in one sequential pass.
    ///
    /// There is no partial-write recovery: a failure mid-write leaves the
    /// sink truncated.
    pub fn write<W: Write>(&self, sink: &mut W) -> Result<(), DocumentError> {
        sink.write_all(ARC_COMMENT.as_bytes())?;
        self.root.write(sink)?;
        sink.write_all(b"\n")?;
        Ok(())
    }
}
