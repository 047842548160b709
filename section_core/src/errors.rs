//! # Error Types
//!
//! Structured error types for section_core. Every failure in this crate
//! happens at construction time; once a shape exists, all of its accessors
//! are total.
//!
//! ## Example
//!
//! ```rust
//! use section_core::errors::{SectionError, SectionResult};
//!
//! fn validate_thickness(thickness: f64) -> SectionResult<f64> {
//!     if thickness <= 0.0 {
//!         return Err(SectionError::invalid_dimension(
//!             "thickness",
//!             thickness,
//!             "Thickness must be greater than 0",
//!         ));
//!     }
//!     Ok(thickness)
//! }
//!
//! let err = validate_thickness(0.0).unwrap_err();
//! assert_eq!(err.error_code(), "INVALID_DIMENSION");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for section_core operations
pub type SectionResult<T> = Result<T, SectionError>;

/// Structured error type for section construction.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SectionError {
    /// A dimension is zero, negative, or not a finite number
    #[error("Invalid dimension '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: f64,
        reason: String,
    },

    /// A flexural axis name could not be parsed
    #[error("Unknown flexural axis: '{value}' (expected \"X-X\" or \"Y-Y\")")]
    UnknownAxis { value: String },
}

impl SectionError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        SectionError::InvalidDimension {
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Create an UnknownAxis error
    pub fn unknown_axis(value: impl Into<String>) -> Self {
        SectionError::UnknownAxis {
            value: value.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SectionError::InvalidDimension { .. } => "INVALID_DIMENSION",
            SectionError::UnknownAxis { .. } => "UNKNOWN_AXIS",
        }
    }
}

/// Check that a dimension is finite and strictly positive.
///
/// Zero is rejected as well as negative values. The returned error names
/// `field` so callers can tell which of several dimensions was at fault.
pub(crate) fn require_positive(field: &'static str, value: f64, label: &str) -> SectionResult<f64> {
    if !value.is_finite() {
        tracing::debug!(field, value, "rejected non-finite dimension");
        return Err(SectionError::invalid_dimension(
            field,
            value,
            format!("{label} must be a finite number."),
        ));
    }
    if value <= 0.0 {
        tracing::debug!(field, value, "rejected non-positive dimension");
        return Err(SectionError::invalid_dimension(
            field,
            value,
            format!("{label} must be greater than 0."),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SectionError::invalid_dimension("width", -5.0, "Width must be greater than 0.");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidDimension\""), "json = {}", json);
        let roundtrip: SectionError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SectionError::invalid_dimension("depth", 0.0, "zero").error_code(),
            "INVALID_DIMENSION"
        );
        assert_eq!(SectionError::unknown_axis("Z-Z").error_code(), "UNKNOWN_AXIS");
    }

    #[test]
    fn test_error_display() {
        let error = SectionError::invalid_dimension("diameter", 0.0, "Diameter must be greater than 0.");
        assert_eq!(
            error.to_string(),
            "Invalid dimension 'diameter': 0 - Diameter must be greater than 0."
        );
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("width", 2.5, "Width"), Ok(2.5));
        assert!(require_positive("width", 1e-9, "Width").is_ok());
        assert!(require_positive("width", 0.0, "Width").is_err());
        assert!(require_positive("width", -0.0, "Width").is_err());
        assert!(require_positive("width", -1.0, "Width").is_err());
        assert!(require_positive("width", f64::NAN, "Width").is_err());
        assert!(require_positive("width", f64::INFINITY, "Width").is_err());
    }
}
