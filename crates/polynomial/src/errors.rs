//! Error types for polynomial operations.

use thiserror::Error;

/// Errors that can occur while building a polynomial.
///
/// Arithmetic between constructed polynomials is total. Errors come from the
/// constructors and from scaling by a non-finite scalar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// Structurally invalid input (e.g., an empty coefficient sequence or a non-finite coefficient)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl PolynomialError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        PolynomialError::InvalidArgument {
            message: message.into(),
        }
    }
}
