//! Error types for field analysis.

use thiserror::Error;

/// Result type alias using FieldError.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors raised before any scan of a scalar field begins.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// An argument can never produce a meaningful result (zero bands, empty region).
    #[error("Invalid argument '{param}': {message}")]
    InvalidArgument { param: String, message: String },

    /// The region of interest is not contained in the field.
    #[error("Region {requested} is outside field bounds {field}")]
    OutOfBounds { requested: String, field: String },
}

impl FieldError {
    /// Shorthand for [`FieldError::InvalidArgument`].
    pub fn invalid(param: &str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param: param.to_string(),
            message: message.into(),
        }
    }

    /// Name of the offending parameter, if any.
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { param, .. } => Some(param),
            Self::OutOfBounds { .. } => None,
        }
    }
}
