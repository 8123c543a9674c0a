//! # Error Types
//!
//! Structured error types for mooring_core. Every failure terminates the
//! current evaluation; nothing is retried internally. The variants map onto
//! four families:
//!
//! - **Input** - `InvalidInput`, `MissingField`, `UnknownMaterial`
//! - **Domain** - `OutOfDomain` (value outside a validated empirical curve)
//! - **Math** - `MathError` (e.g. a catenary with insufficient load/depth ratio)
//! - **Provider** - `ProviderError` (property or geotechnical lookup failed)
//!
//! ## Example
//!
//! ```rust
//! use mooring_core::errors::{MooringError, MooringResult};
//!
//! fn validate_depth(depth_m: f64) -> MooringResult<()> {
//!     if depth_m <= 0.0 {
//!         return Err(MooringError::invalid_input(
//!             "depth_m",
//!             depth_m.to_string(),
//!             "Depth must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_depth(-3.0).unwrap_err().is_input_error());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mooring_core operations
pub type MooringResult<T> = Result<T, MooringError>;

/// Structured error type for cost-model operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum MooringError {
    /// An input value is invalid, contradictory, or out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Material, anchor kind, soil or shape keyword not supported
    #[error("Unknown {category}: '{name}'")]
    UnknownMaterial { category: String, name: String },

    /// A value lies outside the validated range of an empirical curve
    #[error("{quantity} {value} outside valid domain [{min}, {max}]: {reason}")]
    OutOfDomain {
        quantity: String,
        value: String,
        min: String,
        max: String,
        reason: String,
    },

    /// A formula has no real solution for the given inputs
    #[error("Math error in {operation}: {reason}")]
    MathError { operation: String, reason: String },

    /// An external property or geotechnical provider failed
    #[error("Provider error ({provider}): {reason}")]
    ProviderError { provider: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl MooringError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        MooringError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        MooringError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownMaterial error for any unsupported keyword
    pub fn unknown(category: impl Into<String>, name: impl Into<String>) -> Self {
        MooringError::UnknownMaterial {
            category: category.into(),
            name: name.into(),
        }
    }

    /// Create an OutOfDomain error. Open bounds render as "-inf"/"inf".
    pub fn out_of_domain(
        quantity: impl Into<String>,
        value: f64,
        min: Option<f64>,
        max: Option<f64>,
        reason: impl Into<String>,
    ) -> Self {
        MooringError::OutOfDomain {
            quantity: quantity.into(),
            value: value.to_string(),
            min: min.map_or_else(|| "-inf".to_string(), |m| m.to_string()),
            max: max.map_or_else(|| "inf".to_string(), |m| m.to_string()),
            reason: reason.into(),
        }
    }

    /// Create a MathError
    pub fn math(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        MooringError::MathError {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a ProviderError
    pub fn provider(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        MooringError::ProviderError {
            provider: provider.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        MooringError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        MooringError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller's input (fixable by re-entering data)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MooringError::InvalidInput { .. }
                | MooringError::MissingField { .. }
                | MooringError::UnknownMaterial { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            MooringError::InvalidInput { .. } => "INVALID_INPUT",
            MooringError::MissingField { .. } => "MISSING_FIELD",
            MooringError::UnknownMaterial { .. } => "UNKNOWN_MATERIAL",
            MooringError::OutOfDomain { .. } => "OUT_OF_DOMAIN",
            MooringError::MathError { .. } => "MATH_ERROR",
            MooringError::ProviderError { .. } => "PROVIDER_ERROR",
            MooringError::FileError { .. } => "FILE_ERROR",
            MooringError::SerializationError { .. } => "SERIALIZATION_ERROR",
            MooringError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
