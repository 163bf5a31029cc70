//! Export configuration
//!
//! Settings that control layout and output: unit, layout spacing, sheet
//! width, default cut depth, and whether the job becomes one document or one
//! per face. Stored as pretty-printed JSON.

use crate::error::ConfigError;
use crate::units::Unit;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Output document granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// All faces laid out onto one sheet in a single document
    SingleFile,
    /// One document per face, each at its own origin
    MultiFile,
}

impl Default for OutputMode {
    fn default() -> Self {
        Self::SingleFile
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Unit suffix for document dimensions
    pub units: Unit,
    /// Gap between placed faces and around the sheet edge
    pub layout_spacing: f64,
    /// Maximum row width before the layout wraps to a new row
    pub sheet_width: f64,
    /// Cut depth applied to loops without a computed pocket offset
    pub cut_depth: f64,
    /// Single document or one per face
    pub output_mode: OutputMode,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            units: Unit::Inches,
            layout_spacing: 0.5,
            sheet_width: 24.0,
            cut_depth: 0.25,
            output_mode: OutputMode::SingleFile,
        }
    }
}

impl ExportConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded export config");
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.layout_spacing.is_finite() || self.layout_spacing < 0.0 {
            return Err(ConfigError::InvalidValue {
                name: "layout_spacing".to_string(),
                reason: "must be zero or positive".to_string(),
            });
        }
        if !self.sheet_width.is_finite() || self.sheet_width <= 0.0 {
            return Err(ConfigError::InvalidValue {
                name: "sheet_width".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if !self.cut_depth.is_finite() || self.cut_depth <= 0.0 {
            return Err(ConfigError::InvalidValue {
                name: "cut_depth".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
