//! # Error Types
//!
//! Structured error types for booth_core. Every error names the offending
//! field and value so a caller (or a form front end) can point at it directly.
//!
//! ## Example
//!
//! ```rust
//! use booth_core::errors::{EstimateError, EstimateResult};
//! use rust_decimal::Decimal;
//!
//! fn validate_weight(weight_kg: Decimal) -> EstimateResult<()> {
//!     if weight_kg.is_sign_negative() {
//!         return Err(EstimateError::invalid_rate(
//!             "logistics.weight_kg",
//!             weight_kg.to_string(),
//!             "Weight cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_weight(Decimal::from(-5)).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for booth_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for estimation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// Area is not positive, or its unit tag is unknown
    #[error("Invalid area: {value} {unit} - {reason}")]
    InvalidArea {
        value: String,
        unit: String,
        reason: String,
    },

    /// A rate, percentage or quantity is negative
    #[error("Invalid rate for '{field}': {value} - {reason}")]
    InvalidRate {
        field: String,
        value: String,
        reason: String,
    },

    /// Contingency base selector is neither pre-tax nor post-tax
    #[error("Invalid contingency base: '{value}' (expected pre_tax or post_tax)")]
    InvalidContingencyBase { value: String },

    /// An intermediate or final amount exceeds the decimal range
    #[error("Amount overflow in '{field}': result exceeds the supported range")]
    AmountOverflow { field: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File I/O error (rate cards, input documents)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl EstimateError {
    /// Create an InvalidArea error
    pub fn invalid_area(value: impl Into<String>, unit: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimateError::InvalidArea {
            value: value.into(),
            unit: unit.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidRate error
    pub fn invalid_rate(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimateError::InvalidRate {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidContingencyBase error
    pub fn invalid_contingency_base(value: impl Into<String>) -> Self {
        EstimateError::InvalidContingencyBase { value: value.into() }
    }

    /// Create an AmountOverflow error
    pub fn amount_overflow(field: impl Into<String>) -> Self {
        EstimateError::AmountOverflow { field: field.into() }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        EstimateError::SerializationError { reason: reason.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimateError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the values in a `CalculationInput`
    /// (as opposed to reading or parsing it).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EstimateError::InvalidArea { .. }
                | EstimateError::InvalidRate { .. }
                | EstimateError::InvalidContingencyBase { .. }
                | EstimateError::AmountOverflow { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidArea { .. } => "INVALID_AREA",
            EstimateError::InvalidRate { .. } => "INVALID_RATE",
            EstimateError::InvalidContingencyBase { .. } => "INVALID_CONTINGENCY_BASE",
            EstimateError::AmountOverflow { .. } => "AMOUNT_OVERFLOW",
            EstimateError::SerializationError { .. } => "SERIALIZATION_ERROR",
            EstimateError::FileError { .. } => "FILE_ERROR",
        }
    }
}

impl From<serde_json::Error> for EstimateError {
    fn from(err: serde_json::Error) -> Self {
        EstimateError::serialization(err.to_string())
    }
}
