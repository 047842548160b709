//! # section_core - Cross-Section Property Engine
//!
//! `section_core` computes the geometric properties of structural
//! cross-sections (area, perimeter, second moment of area, radius of
//! gyration, elastic section modulus) for use in structural capacity
//! calculations.
//!
//! ## Design Philosophy
//!
//! - **Valid by construction**: shapes are immutable values; constructors
//!   reject zero, negative and non-finite dimensions
//! - **Total accessors**: once a shape exists, no property can fail
//! - **Unit-agnostic**: inputs are plain `f64` in any consistent length unit
//! - **JSON-Friendly**: shapes and property summaries implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use section_core::{Circle, FlexuralAxis, Rectangle, Shape2D};
//!
//! let rect = Rectangle::new(10.0, 20.0).unwrap();
//! assert_eq!(rect.area(), 200.0);
//! assert_eq!(rect.perimeter(), 60.0);
//! let ixx = rect.second_moment_of_area(FlexuralAxis::XX);
//! assert!((ixx - 6666.667).abs() < 0.001);
//!
//! let circle = Circle::new(10.0).unwrap();
//! assert_eq!(
//!     circle.second_moment_of_area(FlexuralAxis::XX),
//!     circle.second_moment_of_area(FlexuralAxis::YY),
//! );
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Shape traits, axes, and shape types
//! - [`equations`] - Closed-form section property formulas
//! - [`properties`] - Serializable section property summary
//! - [`errors`] - Structured error types

pub mod equations;
pub mod errors;
pub mod geometry;
pub mod properties;

// Re-export commonly used types at crate root for convenience
pub use errors::{SectionError, SectionResult};
pub use geometry::{
    Circle, ElasticSection, Extrusion, FlexuralAxis, Rectangle, Section, Shape2D, Shape3D,
};
pub use properties::SectionProperties;
