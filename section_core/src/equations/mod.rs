//! # Section Property Equations
//!
//! Every closed-form formula the shapes use lives here, in one place, so
//! it can be checked against references independently of the shape types.
//!
//! ## Modules
//!
//! - [`section`] - Cross-section properties (A, P, I, S, r)
//!
//! `radius_of_gyration(i, a)` is the general √(I/A) relationship behind the
//! `Shape2D` default; Rectangle and Circle use their closed forms instead.
//!
//! ## Axis Convention
//!
//! - **X-X**: horizontal (major) axis, parallel to the section width
//! - **Y-Y**: vertical (minor) axis, parallel to the section depth

pub mod section;

pub use section::{
    circular_area,
    circular_moment_of_inertia,
    circular_perimeter,
    circular_radius_of_gyration,
    circular_section_modulus,
    radius_of_gyration,
    rectangular_area,
    rectangular_moment_of_inertia,
    rectangular_perimeter,
    rectangular_radius_of_gyration,
    rectangular_section_modulus,
};
