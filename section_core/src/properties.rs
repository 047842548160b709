//! # Section Property Summary
//!
//! Collects every property of a section into one JSON-serializable record,
//! the form downstream capacity checks and reports consume.
//!
//! ## Example
//!
//! ```rust
//! use section_core::{FlexuralAxis, Rectangle, SectionProperties};
//!
//! let props = SectionProperties::of(&Rectangle::new(10.0, 20.0).unwrap());
//! assert_eq!(props.area, 200.0);
//! assert_eq!(props.second_moment(FlexuralAxis::XX), props.second_moment_xx);
//!
//! let json = serde_json::to_string_pretty(&props).unwrap();
//! assert!(json.contains("\"second_moment_xx\""));
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::{ElasticSection, FlexuralAxis};

/// Geometric properties of a cross-section, in powers of the input length unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area (L²)
    pub area: f64,

    /// Perimeter (L)
    pub perimeter: f64,

    /// Second moment of area about X-X (L⁴)
    pub second_moment_xx: f64,

    /// Second moment of area about Y-Y (L⁴)
    pub second_moment_yy: f64,

    /// Radius of gyration about X-X (L)
    pub radius_of_gyration_xx: f64,

    /// Radius of gyration about Y-Y (L)
    pub radius_of_gyration_yy: f64,

    /// Elastic section modulus about X-X (L³)
    pub elastic_modulus_xx: f64,

    /// Elastic section modulus about Y-Y (L³)
    pub elastic_modulus_yy: f64,
}

impl SectionProperties {
    /// Compute all properties of `shape`
    pub fn of<S: ElasticSection + ?Sized>(shape: &S) -> Self {
        Self {
            area: shape.area(),
            perimeter: shape.perimeter(),
            second_moment_xx: shape.second_moment_of_area(FlexuralAxis::XX),
            second_moment_yy: shape.second_moment_of_area(FlexuralAxis::YY),
            radius_of_gyration_xx: shape.radius_of_gyration(FlexuralAxis::XX),
            radius_of_gyration_yy: shape.radius_of_gyration(FlexuralAxis::YY),
            elastic_modulus_xx: shape.elastic_section_modulus(FlexuralAxis::XX),
            elastic_modulus_yy: shape.elastic_section_modulus(FlexuralAxis::YY),
        }
    }

    /// Second moment of area about `axis`
    pub fn second_moment(&self, axis: FlexuralAxis) -> f64 {
        match axis {
            FlexuralAxis::XX => self.second_moment_xx,
            FlexuralAxis::YY => self.second_moment_yy,
        }
    }

    /// Radius of gyration about `axis`
    pub fn radius_of_gyration(&self, axis: FlexuralAxis) -> f64 {
        match axis {
            FlexuralAxis::XX => self.radius_of_gyration_xx,
            FlexuralAxis::YY => self.radius_of_gyration_yy,
        }
    }

    /// Elastic section modulus about `axis`
    pub fn elastic_modulus(&self, axis: FlexuralAxis) -> f64 {
        match axis {
            FlexuralAxis::XX => self.elastic_modulus_xx,
            FlexuralAxis::YY => self.elastic_modulus_yy,
        }
    }

    /// The axis with the larger second moment of area (X-X on a tie)
    pub fn major_axis(&self) -> FlexuralAxis {
        if self.second_moment_yy > self.second_moment_xx {
            FlexuralAxis::YY
        } else {
            FlexuralAxis::XX
        }
    }
}
