//! Core shape traits.
//!
//! Callers that only need section properties should be generic over
//! [`Shape2D`] rather than naming a concrete shape; new shapes can then be
//! added without touching those callers.

use super::FlexuralAxis;
use crate::equations::section;

/// A planar (2D) geometry with the section properties used in structural
/// capacity calculations.
///
/// Implementors are validated at construction, so none of these methods can
/// fail and every result is non-negative.
///
/// Results are plain `f64` arithmetic with no range checks. Very large
/// dimensions can overflow to `+∞` (a rectangle of `1e100 × 1e100` has
/// `I = ∞`, as does a circle of diameter `1e80`), and very small ones can
/// underflow to `0`. Neither case produces NaN.
///
/// # Implementors
///
/// - [`Rectangle`](crate::Rectangle)
/// - [`Circle`](crate::Circle)
/// - [`Section`](crate::Section), delegating to the shape it wraps
pub trait Shape2D {
    /// The enclosed planar area.
    fn area(&self) -> f64;

    /// The boundary length.
    fn perimeter(&self) -> f64;

    /// The second moment of area about `axis`, the axis about which the
    /// section bends.
    fn second_moment_of_area(&self, axis: FlexuralAxis) -> f64;

    /// The radius of gyration about `axis`, √(I/A).
    ///
    /// Implementors with a closed form in their dimensions should override
    /// this: the default divides two separately rounded values and yields
    /// NaN once both underflow to `0`.
    fn radius_of_gyration(&self, axis: FlexuralAxis) -> f64 {
        section::radius_of_gyration(self.second_moment_of_area(axis), self.area())
    }
}

/// A solid (3D) geometry.
pub trait Shape3D {
    /// The enclosed volume.
    fn volume(&self) -> f64;
}

/// A [`Shape2D`] whose extreme fibre distance is known, giving its elastic
/// section modulus.
pub trait ElasticSection: Shape2D {
    /// Distance from the centroidal `axis` to the furthest fibre of the
    /// section.
    fn extreme_fibre_distance(&self, axis: FlexuralAxis) -> f64;

    /// Elastic section modulus about `axis`, I/c.
    fn elastic_section_modulus(&self, axis: FlexuralAxis) -> f64 {
        self.second_moment_of_area(axis) / self.extreme_fibre_distance(axis)
    }
}

impl<T: Shape2D + ?Sized> Shape2D for &T {
    fn area(&self) -> f64 {
        (**self).area()
    }

    fn perimeter(&self) -> f64 {
        (**self).perimeter()
    }

    fn second_moment_of_area(&self, axis: FlexuralAxis) -> f64 {
        (**self).second_moment_of_area(axis)
    }

    fn radius_of_gyration(&self, axis: FlexuralAxis) -> f64 {
        (**self).radius_of_gyration(axis)
    }
}
