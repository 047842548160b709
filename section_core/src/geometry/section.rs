//! Closed set of section shapes.

use serde::{Deserialize, Serialize};

use super::{Circle, ElasticSection, FlexuralAxis, Rectangle, Shape2D};

/// Enum wrapper for all section shapes.
///
/// Lets heterogeneous sections live in one collection and travel as JSON,
/// while still exposing the [`Shape2D`] contract.
///
/// ## JSON Example
///
/// ```json
/// [
///   { "shape": "Rectangle", "width": 10.0, "depth": 20.0 },
///   { "shape": "Circle", "diameter": 10.0 }
/// ]
/// ```
///
/// ```rust
/// use section_core::{Section, Shape2D};
///
/// let json = r#"{ "shape": "Rectangle", "width": 10.0, "depth": 20.0 }"#;
/// let section: Section = serde_json::from_str(json).unwrap();
/// assert_eq!(section.area(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum Section {
    /// Solid rectangle
    Rectangle(Rectangle),
    /// Solid circle
    Circle(Circle),
}

impl Section {
    /// Get the shape name as a string
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Rectangle(_) => "Rectangle",
            Section::Circle(_) => "Circle",
        }
    }
}

impl From<Rectangle> for Section {
    fn from(rect: Rectangle) -> Self {
        Section::Rectangle(rect)
    }
}

impl From<Circle> for Section {
    fn from(circle: Circle) -> Self {
        Section::Circle(circle)
    }
}

impl Shape2D for Section {
    fn area(&self) -> f64 {
        match self {
            Section::Rectangle(r) => r.area(),
            Section::Circle(c) => c.area(),
        }
    }

    fn perimeter(&self) -> f64 {
        match self {
            Section::Rectangle(r) => r.perimeter(),
            Section::Circle(c) => c.perimeter(),
        }
    }

    fn second_moment_of_area(&self, axis: FlexuralAxis) -> f64 {
        match self {
            Section::Rectangle(r) => r.second_moment_of_area(axis),
            Section::Circle(c) => c.second_moment_of_area(axis),
        }
    }

    fn radius_of_gyration(&self, axis: FlexuralAxis) -> f64 {
        match self {
            Section::Rectangle(r) => r.radius_of_gyration(axis),
            Section::Circle(c) => c.radius_of_gyration(axis),
        }
    }
}

impl ElasticSection for Section {
    fn extreme_fibre_distance(&self, axis: FlexuralAxis) -> f64 {
        match self {
            Section::Rectangle(r) => r.extreme_fibre_distance(axis),
            Section::Circle(c) => c.extreme_fibre_distance(axis),
        }
    }

    fn elastic_section_modulus(&self, axis: FlexuralAxis) -> f64 {
        match self {
            Section::Rectangle(r) => r.elastic_section_modulus(axis),
            Section::Circle(c) => c.elastic_section_modulus(axis),
        }
    }
}
