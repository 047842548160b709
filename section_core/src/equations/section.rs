//! # Cross-Section Property Formulas
//!
//! Closed-form geometric properties of solid cross-sections. The shape
//! types in [`crate::geometry`] delegate to these functions, so each formula
//! is written exactly once.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `P` = Perimeter
//! - `I` = Second moment of area (moment of inertia)
//! - `S` = Elastic section modulus (I/c, where c = distance to extreme fibre)
//! - `r` = Radius of gyration (√(I/A))
//! - `b` = Width of section
//! - `d` = Depth of section, or diameter for circular sections
//!
//! All functions are unit-agnostic: the result is in the matching power of
//! whatever length unit the inputs use.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1
//! - SCI P363 (Steel Building Design: Design Data), section property notation

use std::f64::consts::PI;

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Cross-sectional area of a solid rectangle
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × d
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(10.0, 20.0);
/// assert_eq!(area, 200.0);
/// ```
#[inline]
pub fn rectangular_area(b: f64, d: f64) -> f64 {
    b * d
}

/// Perimeter of a solid rectangle
///
/// # Formula
/// P = 2b + 2d
#[inline]
pub fn rectangular_perimeter(b: f64, d: f64) -> f64 {
    2.0 * b + 2.0 * d
}

/// Second moment of area of a rectangle about the centroidal axis parallel to `b`
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │ ════════│ ← bending axis at d/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bd³/12
///
/// Bending about the other axis is the same formula with the arguments
/// swapped: I = db³/12.
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_moment_of_inertia;
///
/// // I = 10 × 20³ / 12 = 6666.67
/// let i = rectangular_moment_of_inertia(10.0, 20.0);
/// assert!((i - 6666.667).abs() < 0.001);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

/// Elastic section modulus of a rectangle about the axis parallel to `b`
///
/// # Formula
/// S = I/c = bd³/12 ÷ d/2 = bd²/6
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_section_modulus;
///
/// // S = 1.5 × 9.25² / 6 = 21.39
/// let s = rectangular_section_modulus(1.5, 9.25);
/// assert!((s - 21.39).abs() < 0.01);
/// ```
#[inline]
pub fn rectangular_section_modulus(b: f64, d: f64) -> f64 {
    b * d.powi(2) / 6.0
}

/// Radius of gyration of a rectangle about the axis perpendicular to `d`
///
/// Used for column slenderness (L/r).
///
/// # Formula
/// r = √(I/A) = √(bd³/12 ÷ bd) = d/√12 ≈ 0.289d
///
/// Written in terms of `d` alone so it stays finite when `I` and `A`
/// underflow for very small sections.
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_radius_of_gyration;
///
/// // r = 9.25 / √12 = 2.67
/// let r = rectangular_radius_of_gyration(9.25);
/// assert!((r - 2.67).abs() < 0.01);
/// ```
#[inline]
pub fn rectangular_radius_of_gyration(d: f64) -> f64 {
    d / 12.0_f64.sqrt()
}

// =============================================================================
// CIRCULAR SECTION PROPERTIES
// =============================================================================

/// Cross-sectional area of a solid circle
///
/// ```text
///        ╭───╮
///      ╱       ╲
///     │    ●────│ d/2
///      ╲       ╱
///        ╰───╯
/// ```
///
/// # Formula
/// A = πd²/4
///
/// # Example
/// ```rust
/// use section_core::equations::section::circular_area;
///
/// let area = circular_area(10.0);
/// assert!((area - 78.5398).abs() < 0.0001);
/// ```
#[inline]
pub fn circular_area(d: f64) -> f64 {
    PI * d.powi(2) / 4.0
}

/// Circumference of a circle
///
/// # Formula
/// P = πd
#[inline]
pub fn circular_perimeter(d: f64) -> f64 {
    PI * d
}

/// Second moment of area of a solid circle about any centroidal axis
///
/// # Formula
/// I = πd⁴/64
///
/// # Example
/// ```rust
/// use section_core::equations::section::circular_moment_of_inertia;
///
/// let i = circular_moment_of_inertia(10.0);
/// assert!((i - 490.874).abs() < 0.001);
/// ```
#[inline]
pub fn circular_moment_of_inertia(d: f64) -> f64 {
    PI * d.powi(4) / 64.0
}

/// Elastic section modulus of a solid circle
///
/// # Formula
/// S = I/c = πd⁴/64 ÷ d/2 = πd³/32
#[inline]
pub fn circular_section_modulus(d: f64) -> f64 {
    PI * d.powi(3) / 32.0
}

/// Radius of gyration of a solid circle about any centroidal axis
///
/// # Formula
/// r = √(πd⁴/64 ÷ πd²/4) = d/4
#[inline]
pub fn circular_radius_of_gyration(d: f64) -> f64 {
    d / 4.0
}

// =============================================================================
// GENERAL RELATIONSHIPS
// =============================================================================

/// Radius of gyration from second moment of area and area
///
/// Used for member slenderness (L/r) in buckling checks.
///
/// # Formula
/// r = √(I/A)
///
/// # Example
/// ```rust
/// use section_core::equations::section::radius_of_gyration;
///
/// // Rectangle 3.5 x 11.25: r = d/√12
/// let r = radius_of_gyration(3.5 * 11.25_f64.powi(3) / 12.0, 3.5 * 11.25);
/// assert!((r - 11.25 / 12.0_f64.sqrt()).abs() < 1e-9);
/// ```
#[inline]
pub fn radius_of_gyration(i: f64, a: f64) -> f64 {
    (i / a).sqrt()
}

// =============================================================================
// UNIT TESTS
// =============================================================================
