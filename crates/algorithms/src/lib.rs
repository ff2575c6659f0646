//! Elliptic-curve arithmetic with constant-time implementation
//!
//! This crate provides the arithmetic behind ecka's key agreement: 𝔽ₚ field
//! elements, scalars modulo the group order, the P-256 curve group and
//! scalar multiplication, plus the SEC 1 point encodings.
//!
//! # Security Features
//!
//! - Secret-dependent work is branch-free: field and scalar operations run on
//!   fixed limb counts, point formulas are complete, and scalar
//!   multiplication processes every bit the same way
//! - Scalars zeroize on drop and never print their value
//! - Decoded points are range-checked; curve membership is an explicit
//!   [`ec::p256::CurveGroup::validate`] step

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{p256, P256CurveGroup, P256FieldElement, P256Point, P256Scalar, PointFormat};
