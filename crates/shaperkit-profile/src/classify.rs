//! Loop classification
//!
//! Every emitted loop carries a role that fixes how the machine treats it:
//! the outer boundary is cut through, interior cutouts are cut through and
//! kept hollow, pockets are cleared to a partial depth, and guides are
//! drawn but never cut. The attribute set per role is closed and known at
//! compile time, so it is a fixed table rather than a dynamic map.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const FILL_BLACK: &str = "rgb(0,0,0)";
const FILL_WHITE: &str = "rgb(255,255,255)";
const FILL_POCKET_GRAY: &str = "rgb(128,128,128)";
const STROKE_GUIDE_BLUE: &str = "rgb(20,110,255)";

/// Role of a loop in the cut profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopRole {
    /// Outer boundary of a part, cut through at full depth.
    Outer,
    /// Interior cutout of a part, cut through at full depth.
    Inner,
    /// Region cleared to a partial, computed depth.
    Pocket,
    /// Diagnostic geometry, drawn but not cut.
    Guide,
}

impl LoopRole {
    /// The vendor path-type label emitted with the path.
    pub fn label(self) -> &'static str {
        match self {
            Self::Outer => "outer",
            Self::Inner => "inner",
            Self::Pocket => "pocket",
            Self::Guide => "guide",
        }
    }
}

impl fmt::Display for LoopRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LoopRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "outer" => Ok(Self::Outer),
            "inner" => Ok(Self::Inner),
            "pocket" => Ok(Self::Pocket),
            "guide" => Ok(Self::Guide),
            _ => Err(format!("Unknown loop role: {}", s)),
        }
    }
}

/// Rendering attributes of a classified loop.
///
/// `cut_depth` is routed in by the caller: the configured default for
/// through-cuts, a surface-offset computation for pockets, absent for
/// guides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopAttributes {
    pub role: LoopRole,
    pub fill: Option<&'static str>,
    pub stroke: Option<&'static str>,
    pub stroke_width: Option<u32>,
    pub cut_depth: Option<f64>,
}

impl LoopAttributes {
    /// The fixed attribute table for a role.
    pub fn for_role(role: LoopRole, cut_depth: f64) -> Self {
        match role {
            LoopRole::Outer => Self {
                role,
                fill: Some(FILL_BLACK),
                stroke: None,
                stroke_width: None,
                cut_depth: Some(cut_depth),
            },
            LoopRole::Pocket => Self {
                role,
                fill: Some(FILL_POCKET_GRAY),
                stroke: Some(FILL_POCKET_GRAY),
                stroke_width: Some(2),
                cut_depth: Some(cut_depth),
            },
            LoopRole::Inner => Self {
                role,
                fill: Some(FILL_WHITE),
                stroke: Some(FILL_BLACK),
                stroke_width: Some(2),
                cut_depth: Some(cut_depth),
            },
            LoopRole::Guide => Self {
                role,
                fill: None,
                stroke: Some(STROKE_GUIDE_BLUE),
                stroke_width: Some(2),
                cut_depth: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(LoopRole::Outer.label(), "outer");
        assert_eq!(LoopRole::Pocket.label(), "pocket");
        assert_eq!("inner".parse::<LoopRole>().unwrap(), LoopRole::Inner);
        assert!("edge".parse::<LoopRole>().is_err());
    }

    #[test]
    fn test_outer_attributes() {
        let attrs = LoopAttributes::for_role(LoopRole::Outer, 0.25);
        assert_eq!(attrs.fill, Some("rgb(0,0,0)"));
        assert_eq!(attrs.stroke, None);
        assert_eq!(attrs.stroke_width, None);
        assert_eq!(attrs.cut_depth, Some(0.25));
    }

    #[test]
    fn test_pocket_attributes() {
        let attrs = LoopAttributes::for_role(LoopRole::Pocket, 0.125);
        assert_eq!(attrs.fill, Some("rgb(128,128,128)"));
        assert_eq!(attrs.stroke, Some("rgb(128,128,128)"));
        assert_eq!(attrs.stroke_width, Some(2));
        assert_eq!(attrs.cut_depth, Some(0.125));
    }

    #[test]
    fn test_inner_attributes() {
        let attrs = LoopAttributes::for_role(LoopRole::Inner, 0.25);
        assert_eq!(attrs.fill, Some("rgb(255,255,255)"));
        assert_eq!(attrs.stroke, Some("rgb(0,0,0)"));
        assert_eq!(attrs.stroke_width, Some(2));
        assert_eq!(attrs.cut_depth, Some(0.25));
    }

    #[test]
    fn test_guide_attributes() {
        let attrs = LoopAttributes::for_role(LoopRole::Guide, 0.25);
        assert_eq!(attrs.fill, None);
        assert_eq!(attrs.stroke, Some("rgb(20,110,255)"));
        assert_eq!(attrs.stroke_width, Some(2));
        // Guides are never cut; the passed depth is not applicable
        assert_eq!(attrs.cut_depth, None);
    }
}
