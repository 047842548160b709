//! Prismatic members: a cross-section swept along a straight length.

use serde::Serialize;

use super::{Shape2D, Shape3D};
use crate::errors::{require_positive, SectionResult};

/// A cross-section extruded along a member length.
///
/// # Example
/// ```rust
/// use section_core::{Extrusion, Rectangle, Shape3D};
///
/// let beam = Extrusion::new(Rectangle::new(10.0, 20.0).unwrap(), 3.0).unwrap();
/// assert_eq!(beam.volume(), 600.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extrusion<S> {
    profile: S,
    length: f64,
}

impl<S: Shape2D> Extrusion<S> {
    /// Sweep `profile` along `length`, which must be finite and greater than 0.
    pub fn new(profile: S, length: f64) -> SectionResult<Self> {
        let length = require_positive("length", length, "Length")?;
        Ok(Self { profile, length })
    }

    pub fn profile(&self) -> &S {
        &self.profile
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Lateral surface area per unit length (the profile perimeter)
    pub fn surface_area_per_length(&self) -> f64 {
        self.profile.perimeter()
    }

    /// Lateral surface area over the whole length, excluding the end faces
    pub fn lateral_surface_area(&self) -> f64 {
        self.profile.perimeter() * self.length
    }
}

impl<S: Shape2D> Shape3D for Extrusion<S> {
    fn volume(&self) -> f64 {
        self.profile.area() * self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Rectangle, Section};
    use std::f64::consts::PI;

    #[test]
    fn test_rectangular_prism() {
        let beam = Extrusion::new(Rectangle::new(10.0, 20.0).unwrap(), 3.0).unwrap();
        assert_eq!(beam.volume(), 600.0);
        assert_eq!(beam.surface_area_per_length(), 60.0);
        assert_eq!(beam.lateral_surface_area(), 180.0);
        assert_eq!(beam.profile().width(), 10.0);
    }

    #[test]
    fn test_borrowed_profile() {
        let section = Section::from(Circle::new(2.0).unwrap());
        let rod = Extrusion::new(&section, 5.0).unwrap();
        assert!((rod.volume() - 5.0 * PI).abs() < 1e-12, "V = {}", rod.volume());
    }

    #[test]
    fn test_serialization() {
        let beam = Extrusion::new(Rectangle::new(10.0, 20.0).unwrap(), 3.0).unwrap();
        let json = serde_json::to_string(&beam).unwrap();
        assert_eq!(json, r#"{"profile":{"width":10.0,"depth":20.0},"length":3.0}"#);
    }

    #[test]
    fn test_invalid_length() {
        let rect = Rectangle::new(1.0, 1.0).unwrap();
        for length in [0.0, -2.0, f64::INFINITY] {
            let err = Extrusion::new(rect, length).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_DIMENSION", "length = {}", length);
        }
    }
}
