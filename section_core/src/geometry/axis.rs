//! Flexural axes of a cross-section.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SectionError;

/// The orthogonal in-plane axes about which flexure (bending) occurs.
///
/// By convention X-X is the horizontal (major) axis, parallel to the section
/// width, and Y-Y is the vertical (minor) axis, parallel to the depth. The set
/// is closed: matching on both variants is always exhaustive.
///
/// Serializes as `"X-X"` / `"Y-Y"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlexuralAxis {
    /// Horizontal (major) axis
    #[serde(rename = "X-X")]
    XX,
    /// Vertical (minor) axis
    #[serde(rename = "Y-Y")]
    YY,
}

impl FlexuralAxis {
    /// Both axes, major first
    pub const ALL: [FlexuralAxis; 2] = [FlexuralAxis::XX, FlexuralAxis::YY];

    /// Conventional name, `"X-X"` or `"Y-Y"`
    pub fn display_name(&self) -> &'static str {
        match self {
            FlexuralAxis::XX => "X-X",
            FlexuralAxis::YY => "Y-Y",
        }
    }

    /// The other principal axis
    pub fn orthogonal(&self) -> FlexuralAxis {
        match self {
            FlexuralAxis::XX => FlexuralAxis::YY,
            FlexuralAxis::YY => FlexuralAxis::XX,
        }
    }
}

impl fmt::Display for FlexuralAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for FlexuralAxis {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X-X" | "XX" => Ok(FlexuralAxis::XX),
            "Y-Y" | "YY" => Ok(FlexuralAxis::YY),
            _ => Err(SectionError::unknown_axis(s)),
        }
    }
}
