//! Validation layer.
//!
//! Stateless transformation and error classification sitting between the
//! transport boundary and the store: sanitize input, check it against the
//! operation's schema, and normalize any failure into a uniform envelope.
//! Every external entry point funnels through here before the store is
//! touched.

mod envelope;
mod error;
mod rules;
mod sanitize;


pub use envelope::{
    ErrorEnvelope, OPERATION_ERROR, UNKNOWN_ERROR, VALIDATION_ERROR, error_envelope,
};
pub use error::{Issue, ValidationError};
pub use rules::Validate;
pub use sanitize::{sanitize, sanitized};
