//! Error handling for the key agreement stack
//!
//! Every failure is recoverable at the call site. Boundary failures
//! (`MalformedEncoding`, `InvalidPeerPoint`, ...) are routine and carry a
//! distinct variant so a protocol layer can tell a peer's misbehaviour apart
//! from a local bug.

mod traits;

pub use traits::ResultExt;

/// Primary error type for ecka operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Scalar outside `[1, n)`
    #[error("{context}: invalid scalar ({reason})")]
    InvalidScalar {
        context: &'static str,
        reason: &'static str,
    },

    /// Point does not satisfy the curve equation
    #[error("{context}: point is not on the curve")]
    InvalidPoint { context: &'static str },

    /// Peer-supplied public point rejected during key agreement
    #[error("{context}: peer public point rejected ({reason})")]
    InvalidPeerPoint {
        context: &'static str,
        reason: &'static str,
    },

    /// Inversion of the zero field element
    #[error("{context}: division by zero")]
    DivisionByZero { context: &'static str },

    /// Wrong length or tag byte in a point/key encoding
    #[error("{context}: malformed encoding ({reason})")]
    MalformedEncoding {
        context: &'static str,
        reason: &'static str,
    },

    /// Encoded coordinate is not less than the field prime
    #[error("{context}: field element out of range")]
    FieldElementOutOfRange { context: &'static str },

    /// Key agreement produced the point at infinity
    #[error("{context}: shared point is the identity")]
    DegenerateSecret { context: &'static str },

    /// The randomness source could not supply a usable value
    #[error("{context}: randomness source exhausted")]
    RandomnessExhausted { context: &'static str },

    /// Curve name does not resolve to a known parameter set
    #[error("unknown curve '{name}'")]
    UnknownCurve { name: String },

    /// A parameter set is internally inconsistent
    #[error("{context}: invalid curve parameters ({reason})")]
    InvalidParameters {
        context: &'static str,
        reason: &'static str,
    },
}

/// Result type for ecka operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidScalar { reason, .. } => Self::InvalidScalar { context, reason },
            Self::InvalidPoint { .. } => Self::InvalidPoint { context },
            Self::InvalidPeerPoint { reason, .. } => Self::InvalidPeerPoint { context, reason },
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::MalformedEncoding { reason, .. } => Self::MalformedEncoding { context, reason },
            Self::FieldElementOutOfRange { .. } => Self::FieldElementOutOfRange { context },
            Self::DegenerateSecret { .. } => Self::DegenerateSecret { context },
            Self::RandomnessExhausted { .. } => Self::RandomnessExhausted { context },
            Self::UnknownCurve { name } => Self::UnknownCurve { name },
            Self::InvalidParameters { reason, .. } => Self::InvalidParameters { context, reason },
        }
    }

    /// True for failures caused by untrusted input rather than local state
    pub fn is_boundary_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPoint { .. }
                | Self::InvalidPeerPoint { .. }
                | Self::MalformedEncoding { .. }
                | Self::FieldElementOutOfRange { .. }
                | Self::DegenerateSecret { .. }
        )
    }
}
