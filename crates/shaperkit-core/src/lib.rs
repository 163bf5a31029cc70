//! Core types and utilities for ShaperKit
//!
//! Provides the building blocks shared by every other crate in the
//! workspace:
//! - 2D geometry primitives and the tolerance model (`geom`)
//! - Output units (`units`)
//! - Export configuration with JSON persistence (`config`)
//! - Structured error types (`error`)

pub mod config;
pub mod error;
pub mod geom;
pub mod units;

pub use config::{ExportConfig, OutputMode};
pub use error::{ConfigError, DocumentError, Error, ProfileError, Result};
pub use geom::{Bounds2, Point2, ENDPOINT_TOLERANCE, GEOM_TOLERANCE};
pub use units::Unit;
