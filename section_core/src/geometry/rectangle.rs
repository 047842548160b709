//! Solid rectangular section.

use serde::{Deserialize, Serialize};

use super::{ElasticSection, FlexuralAxis, Shape2D};
use crate::equations::section;
use crate::errors::{require_positive, SectionError, SectionResult};

/// A solid rectangular section.
///
/// ```text
///          Y
///          │
///     ┌────┼────┐
///     │    │    │
///   d │────┼────│── X      X-X is parallel to the width
///     │    │    │
///     └────┼────┘
///          b
/// ```
///
/// Both dimensions are strictly positive for the life of the value; the
/// fields are private and only set by [`Rectangle::new`].
///
/// ## JSON Example
///
/// ```json
/// { "width": 10.0, "depth": 20.0 }
/// ```
///
/// Deserializing runs the same validation as [`Rectangle::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectangleDimensions")]
pub struct Rectangle {
    width: f64,
    depth: f64,
}

/// Unvalidated serde representation of a [`Rectangle`].
#[derive(Deserialize)]
struct RectangleDimensions {
    width: f64,
    depth: f64,
}

impl TryFrom<RectangleDimensions> for Rectangle {
    type Error = SectionError;

    fn try_from(dims: RectangleDimensions) -> SectionResult<Self> {
        Rectangle::new(dims.width, dims.depth)
    }
}

impl Rectangle {
    /// Create a rectangle from its width (parallel to the local x-axis) and
    /// depth (parallel to the local y-axis).
    ///
    /// Width is checked before depth; the first invalid dimension is the one
    /// reported.
    ///
    /// # Example
    /// ```rust
    /// use section_core::{FlexuralAxis, Rectangle, Shape2D};
    ///
    /// let rect = Rectangle::new(10.0, 20.0).unwrap();
    /// assert_eq!(rect.area(), 200.0);
    /// assert_eq!(rect.perimeter(), 60.0);
    /// assert!(rect.second_moment_of_area(FlexuralAxis::XX) > rect.second_moment_of_area(FlexuralAxis::YY));
    ///
    /// assert!(Rectangle::new(0.0, 5.0).is_err());
    /// ```
    pub fn new(width: f64, depth: f64) -> SectionResult<Self> {
        let width = require_positive("width", width, "Width")?;
        let depth = require_positive("depth", depth, "Depth")?;
        Ok(Self { width, depth })
    }

    /// Create a square section
    pub fn square(side: f64) -> SectionResult<Self> {
        Self::new(side, side)
    }

    /// Width, parallel to the local x-axis
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Depth, parallel to the local y-axis
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// True when width and depth are equal
    pub fn is_square(&self) -> bool {
        self.width == self.depth
    }
}

impl Shape2D for Rectangle {
    fn area(&self) -> f64 {
        section::rectangular_area(self.width, self.depth)
    }

    fn perimeter(&self) -> f64 {
        section::rectangular_perimeter(self.width, self.depth)
    }

    fn second_moment_of_area(&self, axis: FlexuralAxis) -> f64 {
        match axis {
            FlexuralAxis::XX => section::rectangular_moment_of_inertia(self.width, self.depth),
            FlexuralAxis::YY => section::rectangular_moment_of_inertia(self.depth, self.width),
        }
    }

    fn radius_of_gyration(&self, axis: FlexuralAxis) -> f64 {
        match axis {
            FlexuralAxis::XX => section::rectangular_radius_of_gyration(self.depth),
            FlexuralAxis::YY => section::rectangular_radius_of_gyration(self.width),
        }
    }
}

impl ElasticSection for Rectangle {
    fn extreme_fibre_distance(&self, axis: FlexuralAxis) -> f64 {
        match axis {
            FlexuralAxis::XX => self.depth / 2.0,
            FlexuralAxis::YY => self.width / 2.0,
        }
    }

    fn elastic_section_modulus(&self, axis: FlexuralAxis) -> f64 {
        match axis {
            FlexuralAxis::XX => section::rectangular_section_modulus(self.width, self.depth),
            FlexuralAxis::YY => section::rectangular_section_modulus(self.depth, self.width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_rectangle_10x20() {
        let rect = Rectangle::new(10.0, 20.0).unwrap();
        assert_eq!(rect.area(), 200.0);
        assert_eq!(rect.perimeter(), 60.0);

        let ixx = rect.second_moment_of_area(FlexuralAxis::XX);
        assert!(approx_eq(ixx, 10.0 * 20.0_f64.powi(3) / 12.0), "Ixx = {}", ixx);
        assert!(approx_eq(ixx, 6666.666_666_666_667), "Ixx = {}", ixx);

        let iyy = rect.second_moment_of_area(FlexuralAxis::YY);
        assert!(approx_eq(iyy, 20.0 * 10.0_f64.powi(3) / 12.0), "Iyy = {}", iyy);
    }

    #[test]
    fn test_swapped_dimensions_swap_axes() {
        let a = Rectangle::new(3.5, 11.25).unwrap();
        let b = Rectangle::new(11.25, 3.5).unwrap();
        assert_eq!(
            a.second_moment_of_area(FlexuralAxis::XX),
            b.second_moment_of_area(FlexuralAxis::YY)
        );
        assert_eq!(
            a.second_moment_of_area(FlexuralAxis::YY),
            b.second_moment_of_area(FlexuralAxis::XX)
        );
    }

    #[test]
    fn test_square_is_axis_independent() {
        let sq = Rectangle::square(5.0).unwrap();
        assert!(sq.is_square());
        assert_eq!(
            sq.second_moment_of_area(FlexuralAxis::XX),
            sq.second_moment_of_area(FlexuralAxis::YY)
        );
    }

    #[test]
    fn test_invalid_dimensions() {
        for (w, d) in [(0.0, 5.0), (5.0, 0.0), (-1.0, 5.0), (5.0, -1.0)] {
            let err = Rectangle::new(w, d).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_DIMENSION", "({}, {})", w, d);
        }
    }

    #[test]
    fn test_width_checked_first() {
        match Rectangle::new(-1.0, -1.0) {
            Err(SectionError::InvalidDimension { field, .. }) => assert_eq!(field, "width"),
            other => panic!("expected InvalidDimension, got {:?}", other),
        }
        match Rectangle::new(1.0, 0.0) {
            Err(SectionError::InvalidDimension { field, .. }) => assert_eq!(field, "depth"),
            other => panic!("expected InvalidDimension, got {:?}", other),
        }
    }

    #[test]
    fn test_tiny_dimensions_accepted() {
        let rect = Rectangle::new(1e-9, 1e-9).unwrap();
        assert!(rect.area() > 0.0);
    }

    #[test]
    fn test_section_modulus_and_gyration() {
        let rect = Rectangle::new(1.5, 9.25).unwrap();

        let sxx = rect.elastic_section_modulus(FlexuralAxis::XX);
        assert!(approx_eq(sxx, 1.5 * 9.25_f64.powi(2) / 6.0), "Sxx = {}", sxx);

        let syy = rect.elastic_section_modulus(FlexuralAxis::YY);
        assert!(approx_eq(syy, 9.25 * 1.5_f64.powi(2) / 6.0), "Syy = {}", syy);

        let rxx = rect.radius_of_gyration(FlexuralAxis::XX);
        assert!(approx_eq(rxx, 9.25 / 12.0_f64.sqrt()), "rxx = {}", rxx);
    }

    #[test]
    fn test_tiny_section_derived_properties_are_finite() {
        // A and I both underflow to 0 here, so √(I/A) would be NaN
        let rect = Rectangle::new(1e-200, 1e-200).unwrap();
        assert_eq!(rect.area(), 0.0);
        assert_eq!(rect.second_moment_of_area(FlexuralAxis::XX), 0.0);

        for axis in FlexuralAxis::ALL {
            let r = rect.radius_of_gyration(axis);
            assert!(approx_eq(r, 1e-200 / 12.0_f64.sqrt()), "r = {}", r);
            assert!(r > 0.0, "r = {}", r);

            let s = rect.elastic_section_modulus(axis);
            assert!(!s.is_nan() && s >= 0.0, "S = {}", s);
        }
    }

    #[test]
    fn test_huge_section_overflows_to_infinity() {
        let rect = Rectangle::new(1e100, 1e100).unwrap();
        assert_eq!(rect.second_moment_of_area(FlexuralAxis::XX), f64::INFINITY);
        assert!(rect.area().is_finite());
        assert!(rect.radius_of_gyration(FlexuralAxis::XX).is_finite());
    }

    #[test]
    fn test_section_modulus_uses_closed_form() {
        let rect = Rectangle::new(1.5, 9.25).unwrap();
        assert_eq!(
            rect.elastic_section_modulus(FlexuralAxis::XX),
            section::rectangular_section_modulus(1.5, 9.25)
        );
        assert_eq!(
            rect.elastic_section_modulus(FlexuralAxis::YY),
            section::rectangular_section_modulus(9.25, 1.5)
        );
    }

    #[test]
    fn test_serialization() {
        let rect = Rectangle::new(10.0, 20.0).unwrap();
        let json = serde_json::to_string(&rect).unwrap();
        assert_eq!(json, r#"{"width":10.0,"depth":20.0}"#);

        let roundtrip: Rectangle = serde_json::from_str(&json).unwrap();
        assert_eq!(rect, roundtrip);
    }

    #[test]
    fn test_deserialization_validates() {
        let result = serde_json::from_str::<Rectangle>(r#"{"width":0.0,"depth":20.0}"#);
        assert!(result.is_err());
    }
}
