//! # Geometry
//!
//! The shape contracts and the shapes that implement them.
//!
//! Each shape is an immutable value built through a validating constructor
//! that returns either a fully valid instance or a
//! [`SectionError::InvalidDimension`](crate::SectionError::InvalidDimension).
//! There is no partially initialised state and no accessor can fail.
//!
//! ## Shapes
//!
//! - [`Rectangle`] - solid rectangle (width × depth)
//! - [`Circle`] - solid circle (diameter)
//! - [`Section`] - tagged enum over all of the above
//! - [`Extrusion`] - any profile swept along a length ([`Shape3D`])
//!
//! ## Example
//!
//! ```rust
//! use section_core::geometry::{Circle, FlexuralAxis, Rectangle, Shape2D};
//!
//! fn stiffer<A: Shape2D, B: Shape2D>(a: &A, b: &B, axis: FlexuralAxis) -> bool {
//!     a.second_moment_of_area(axis) > b.second_moment_of_area(axis)
//! }
//!
//! let rect = Rectangle::new(10.0, 20.0).unwrap();
//! let circle = Circle::new(10.0).unwrap();
//! assert!(stiffer(&rect, &circle, FlexuralAxis::XX));
//! ```

mod axis;
mod circle;
mod extrusion;
mod rectangle;
mod section;
mod traits;

pub use axis::FlexuralAxis;
pub use circle::Circle;
pub use extrusion::Extrusion;
pub use rectangle::Rectangle;
pub use section::Section;
pub use traits::{ElasticSection, Shape2D, Shape3D};
