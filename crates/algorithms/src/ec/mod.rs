//! Elliptic Curve Primitives
//!
//! Constant-time arithmetic on NIST P-256: the base field, the scalar field,
//! the curve group, scalar multiplication and the SEC 1 point codec. These
//! are the building blocks for the ECDH layer.

pub mod p256;

// Re-export types with consistent naming scheme.
pub use p256::{
    CurveGroup as P256CurveGroup, FieldElement as P256FieldElement, Point as P256Point,
    PointFormat, Scalar as P256Scalar,
};
