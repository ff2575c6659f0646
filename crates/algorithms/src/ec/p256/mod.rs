//! NIST P-256 Elliptic Curve Primitives
//!
//! This module implements the NIST P-256 elliptic curve operations in constant time.
//! The curve equation is y² = x³ - 3x + b over the prime field F_p where:
//! - p = 2^256 - 2^224 + 2^192 + 2^96 - 1 (NIST P-256 prime)
//! - The curve order n = 0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551
//!
//! The implementation uses:
//! - Montgomery multiplication over 4 × 64-bit limbs for field and scalar arithmetic
//! - Homogeneous projective coordinates with complete addition formulas
//! - Double-and-always-add scalar multiplication with constant-time point selection

mod codec;
mod constants;
mod field;
mod group;
mod limbs;
mod mul;
mod point;
mod scalar;

pub use codec::{
    decode, decode_compressed, decode_uncompressed, detect_format, encode, encode_compressed,
    encode_uncompressed, PointFormat,
};
pub use constants::{
    P256_FIELD_ELEMENT_SIZE, P256_POINT_COMPRESSED_SIZE, P256_POINT_IDENTITY_SIZE,
    P256_POINT_UNCOMPRESSED_SIZE, P256_SCALAR_BITS, P256_SCALAR_SIZE,
};
pub use field::FieldElement;
pub use group::CurveGroup;
pub use mul::{multiply, multiply_base};
pub use point::Point;
pub use scalar::{Scalar, MAX_SCALAR_DRAWS};

use crate::error::Result;
use rand::{CryptoRng, RngCore};

/// Get the standard base point G of the P-256 curve
pub fn base_point_g() -> Point {
    CurveGroup::p256().generator()
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Result<Point> {
    multiply_base(CurveGroup::p256(), scalar)
}

/// General scalar multiplication on P-256: scalar * point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Result<Point> {
    multiply(CurveGroup::p256(), scalar, point)
}

/// Generate a key pair `(d, d·G)` in `group`
///
/// The secret scalar is drawn uniformly from `[1, n)` by rejection sampling
/// (see [`Scalar::random`]).
pub fn generate_keypair<R: CryptoRng + RngCore>(
    group: &CurveGroup,
    rng: &mut R,
) -> Result<(Scalar, Point)> {
    let private_key = Scalar::random(rng)?;
    let public_key = multiply_base(group, &private_key)?;
    Ok((private_key, public_key))
}
