//! Output units for SVG documents
//!
//! The Shaper Origin accepts SVG lengths in inches, centimeters, or
//! millimeters. All geometry stays unit-agnostic; the unit only decides the
//! suffix on the document's width/height/origin attributes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SVG length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Inches ("in")
    Inches,
    /// Centimeters ("cm")
    Centimeters,
    /// Millimeters ("mm")
    Millimeters,
}

impl Unit {
    /// The suffix appended to SVG length attributes.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Inches => "in",
            Self::Centimeters => "cm",
            Self::Millimeters => "mm",
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::Inches
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(Self::Inches),
            "cm" | "centimeters" => Ok(Self::Centimeters),
            "mm" | "millimeters" => Ok(Self::Millimeters),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }
}
