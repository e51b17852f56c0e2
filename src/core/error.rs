//! # Errors
//!
//! Everything that can go wrong with a vector is local and synchronous:
//! bad input at construction, a corrupt buffer at decode time, or a request
//! the vector's arity can't satisfy. Nothing here is transient, so nothing
//! is retried.

/// Result type for vector operations
pub type VectorResult<T> = Result<T, VectorError>;

/// Errors raised by the vector types and their codec
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VectorError {
    /// A component converted to a non-finite value
    #[error("Invalid component at index {index}: {value} is not finite")]
    InvalidComponent { index: usize, value: f64 },

    /// Wrong number of components for a fixed-arity vector
    #[error("Arity mismatch: expected {expected} components, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    /// Decode tag byte is unknown or not accepted by the codec config
    #[error("Unsupported encoding tag: {0:#04x}")]
    UnsupportedEncoding(u8),

    /// Decode buffer length doesn't describe a whole vector
    #[error("Malformed buffer: {reason}")]
    MalformedBuffer { reason: String },

    /// Operation isn't defined for this vector type
    #[error("Undefined operation: {0}")]
    UndefinedOperation(&'static str),

    /// Format spec couldn't be parsed
    #[error("Invalid format spec {spec:?}: {reason}")]
    InvalidFormatSpec { spec: String, reason: String },

    /// Text couldn't be parsed as a vector
    #[error("Cannot parse {input:?} as a vector: {reason}")]
    Parse { input: String, reason: String },
}

impl VectorError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        VectorError::MalformedBuffer {
            reason: reason.into(),
        }
    }

    pub(crate) fn bad_spec(spec: &str, reason: impl Into<String>) -> Self {
        VectorError::InvalidFormatSpec {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        VectorError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
