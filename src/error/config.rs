//! Configuration validation error types

use thiserror::Error;

/// A configuration value that fails validation outright.
///
/// Produced by [`HttpConfig::validate`](crate::http_client::HttpConfig::validate)
/// before a client is built, so misconfiguration surfaces at startup instead
/// of as odd transport behavior later.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigValidationError {
    /// Value exceeds the maximum this client supports
    #[error("{field}: value {value} exceeds maximum {max}")]
    ValueTooHigh {
        /// Configuration field name
        field: &'static str,
        /// The rejected value
        value: String,
        /// The maximum allowed
        max: String,
    },

    /// Value is below the minimum this client supports
    #[error("{field}: value {value} is below minimum {min}")]
    ValueTooLow {
        /// Configuration field name
        field: &'static str,
        /// The rejected value
        value: String,
        /// The minimum allowed
        min: String,
    },

    /// Value is invalid for a reason other than range
    #[error("{field}: {message}")]
    ValueInvalid {
        /// Configuration field name
        field: &'static str,
        /// Why the value is unusable
        message: String,
    },
}

impl ConfigValidationError {
    /// Creates a too-high validation error
    pub fn too_high(field: &'static str, value: impl ToString, max: impl ToString) -> Self {
        Self::ValueTooHigh {
            field,
            value: value.to_string(),
            max: max.to_string(),
        }
    }

    /// Creates a too-low validation error
    pub fn too_low(field: &'static str, value: impl ToString, min: impl ToString) -> Self {
        Self::ValueTooLow {
            field,
            value: value.to_string(),
            min: min.to_string(),
        }
    }

    /// Creates an invalid value error
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::ValueInvalid {
            field,
            message: message.into(),
        }
    }

    /// Returns the name of the offending field
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::ValueTooHigh { field, .. }
            | Self::ValueTooLow { field, .. }
            | Self::ValueInvalid { field, .. } => field,
        }
    }
}

/// Outcome of a validation pass that succeeded but may carry warnings.
///
/// Warnings flag values that are legal yet likely unintended, such as a
/// sub-second request timeout.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Non-fatal warnings collected during validation
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates an empty result with no warnings
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Returns true if validation produced no warnings
    pub fn is_ok(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Returns true if any warnings were recorded
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
