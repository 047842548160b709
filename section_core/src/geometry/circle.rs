//! Solid circular section.

use serde::{Deserialize, Serialize};

use super::{ElasticSection, FlexuralAxis, Shape2D};
use crate::equations::section;
use crate::errors::{require_positive, SectionError, SectionResult};

/// A solid circular section.
///
/// The radius is derived once at construction. Only the diameter is
/// serialized:
///
/// ```json
/// { "diameter": 10.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleDimensions", into = "CircleDimensions")]
pub struct Circle {
    diameter: f64,
    radius: f64,
}

#[derive(Serialize, Deserialize)]
struct CircleDimensions {
    diameter: f64,
}

impl TryFrom<CircleDimensions> for Circle {
    type Error = SectionError;

    fn try_from(dims: CircleDimensions) -> SectionResult<Self> {
        Circle::new(dims.diameter)
    }
}

impl From<Circle> for CircleDimensions {
    fn from(circle: Circle) -> Self {
        CircleDimensions {
            diameter: circle.diameter,
        }
    }
}

impl Circle {
    /// Create a circle from its diameter.
    ///
    /// # Example
    /// ```rust
    /// use section_core::{Circle, FlexuralAxis, Shape2D};
    ///
    /// let circle = Circle::new(10.0).unwrap();
    /// assert!((circle.area() - 78.5398).abs() < 1e-4);
    /// assert!((circle.perimeter() - 31.4159).abs() < 1e-4);
    /// assert!((circle.second_moment_of_area(FlexuralAxis::XX) - 490.874).abs() < 1e-3);
    ///
    /// assert!(Circle::new(0.0).is_err());
    /// ```
    pub fn new(diameter: f64) -> SectionResult<Self> {
        let diameter = require_positive("diameter", diameter, "Diameter")?;
        Ok(Self {
            diameter,
            radius: diameter / 2.0,
        })
    }

    /// Create a circle from its radius
    pub fn from_radius(radius: f64) -> SectionResult<Self> {
        let radius = require_positive("radius", radius, "Radius")?;
        Self::new(radius * 2.0)
    }

    /// Diameter, as given at construction
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Radius, half the diameter
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape2D for Circle {
    fn area(&self) -> f64 {
        section::circular_area(self.diameter)
    }

    fn perimeter(&self) -> f64 {
        section::circular_perimeter(self.diameter)
    }

    /// Identical about both axes (circular symmetry).
    fn second_moment_of_area(&self, axis: FlexuralAxis) -> f64 {
        match axis {
            FlexuralAxis::XX | FlexuralAxis::YY => section::circular_moment_of_inertia(self.diameter),
        }
    }

    fn radius_of_gyration(&self, axis: FlexuralAxis) -> f64 {
        match axis {
            FlexuralAxis::XX | FlexuralAxis::YY => section::circular_radius_of_gyration(self.diameter),
        }
    }
}

impl ElasticSection for Circle {
    fn extreme_fibre_distance(&self, _axis: FlexuralAxis) -> f64 {
        self.radius
    }

    fn elastic_section_modulus(&self, axis: FlexuralAxis) -> f64 {
        match axis {
            FlexuralAxis::XX | FlexuralAxis::YY => section::circular_section_modulus(self.diameter),
        }
    }
}
