//! Error handling for ShaperKit
//!
//! Provides error types for the layers of the pipeline:
//! - Profile errors (boundary reordering, arc parameterization)
//! - Document errors (SVG assembly and writing)
//! - Config errors (settings loading/validation)
//!
//! All error types use `thiserror` for ergonomic error handling. Every
//! failure is surfaced to the operation that initiated the batch; nothing is
//! silently dropped.

use thiserror::Error;

/// Profile error type
///
/// Represents errors raised while reconstructing an ordered boundary from
/// raw edge/arc records. These are unrecoverable for the affected loop:
/// retrying without different input cannot succeed.
#[derive(Error, Debug, Clone)]
pub enum ProfileError {
    /// No remaining element continues the boundary chain.
    #[error(
        "Disconnected boundary: no element continues the chain at {tail} ({placed} placed, {remaining} unplaced)"
    )]
    DisconnectedBoundary {
        /// Formatted position of the chain tail that found no continuation.
        tail: String,
        /// Elements already placed in the chain.
        placed: usize,
        /// Elements still unplaced when the chain stalled.
        remaining: usize,
    },

    /// An arc's defining axes are numerically unusable.
    #[error("Degenerate ellipse: {reason}")]
    DegenerateEllipse {
        /// Why the ellipse definition is degenerate.
        reason: String,
    },

    /// A boundary loop carried no elements at all.
    #[error("Empty boundary loop")]
    EmptyBoundary,
}

/// Document error type
///
/// Represents errors raised while assembling or writing an output document.
/// A failure during assembly aborts the whole write.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The output destination could not be opened for writing.
    #[error("Cannot open output {path}: {reason}")]
    SinkUnavailable {
        /// The destination path.
        path: String,
        /// Why the sink could not be opened.
        reason: String,
    },

    /// I/O failure while writing to an already-open sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure on a job or config payload.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Config error type
///
/// Represents errors in export configuration files and values.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration value is outside its valid domain.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue {
        /// The configuration field name.
        name: String,
        /// Why the value is invalid.
        reason: String,
    },

    /// I/O failure while reading or writing a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Main error type for ShaperKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Profile error
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Config error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a profile (geometry) error
    pub fn is_profile_error(&self) -> bool {
        matches!(self, Error::Profile(_))
    }

    /// Check if this is a document (output) error
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
