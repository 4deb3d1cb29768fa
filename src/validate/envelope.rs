//! Uniform error envelope.
//!
//! Every failure surfaced to a caller is normalized into the same
//! `{error, details, code}` shape, classified into exactly one category.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Code for input that failed schema constraints.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
/// Code for any other failure raised while performing an operation.
pub const OPERATION_ERROR: &str = "OPERATION_ERROR";
/// Code for failure values that are not structured errors at all.
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// Normalized failure report handed to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always `"<category> in <operation>"`.
    pub error: String,
    pub details: String,
    pub code: String,
}

impl ErrorEnvelope {
    /// Envelope for a failure that never materialized as a typed error.
    pub fn unknown(rendering: impl Into<String>, operation: &str) -> Self {
        Self {
            error: format!("Unknown error in {}", operation),
            details: rendering.into(),
            code: UNKNOWN_ERROR.to_string(),
        }
    }
}

/// Classify a caught error into its envelope.
///
/// Validation failures keep their aggregate issue message; anything else is
/// an operation failure carrying the error's own message.
pub fn error_envelope(err: &(dyn std::error::Error + 'static), operation: &str) -> ErrorEnvelope {
    if let Some(validation) = err.downcast_ref::<ValidationError>() {
        ErrorEnvelope {
            error: format!("Validation error in {}", operation),
            details: validation.to_string(),
            code: VALIDATION_ERROR.to_string(),
        }
    } else {
        ErrorEnvelope {
            error: format!("Operation error in {}", operation),
            details: err.to_string(),
            code: OPERATION_ERROR.to_string(),
        }
    }
}
