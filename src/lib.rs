//! # ShaperKit
//!
//! Converts the boundaries of planar faces - reported as unordered
//! collections of straight segments and elliptical arcs - into ordered,
//! correctly-oriented cut profiles, and writes them as Shaper Origin SVG
//! documents with faces shelf-packed onto bounded sheets.
//!
//! ## Architecture
//!
//! ShaperKit is organized as a workspace with multiple crates:
//!
//! 1. **shaperkit-core** - geometry primitives, units, configuration, errors
//! 2. **shaperkit-profile** - boundary reordering, arc parameterization,
//!    loop classification, sheet layout, job input model
//! 3. **shaperkit-svg** - path-data emission and document assembly
//! 4. **shaperkit** - the command-line binary that ties them together

pub use shaperkit_core::{
    Bounds2, ConfigError, DocumentError, Error, ExportConfig, OutputMode, Point2, ProfileError,
    Result, Unit,
};

pub use shaperkit_profile::{
    loop_bounds, reorder, ArcElement, ArcParameters, FaceMaterial, FaceProfile, LoopAttributes,
    LoopRole, OrderedLoop, PathElement, Placement, ProfileJob, Segment, ShelfPacker,
};

pub use shaperkit_svg::{build_documents, path_data, write_job, Node, SvgDocument};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG environment
/// variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
