//! Constant-time scalar multiplication

use crate::ec::p256::{
    constants::P256_SCALAR_BITS, group::CurveGroup, point::Point, point::ProjectivePoint,
    scalar::Scalar,
};
use crate::error::{Error, Result, ResultExt};
use subtle::ConditionallySelectable;

/// Compute `scalar · point` in `group`.
///
/// Double-and-always-add over all 256 scalar bits, most significant first:
/// every step performs one doubling and one addition and keeps the sum
/// through a constant-time select. The operation sequence and memory access
/// pattern are the same for every scalar; leading zero bits are processed
/// like any other bit.
///
/// A zeroized scalar is rejected with [`Error::InvalidScalar`] and a point
/// off the curve with [`Error::InvalidPoint`].
pub fn multiply(group: &CurveGroup, scalar: &Scalar, point: &Point) -> Result<Point> {
    if bool::from(scalar.is_zero()) {
        return Err(Error::InvalidScalar {
            context: "ScalarMul::multiply",
            reason: "scalar is zero",
        });
    }
    group.validate(point).with_context("ScalarMul::multiply")?;

    let base = point.to_projective();
    let mut acc = ProjectivePoint::IDENTITY;

    for i in (0..P256_SCALAR_BITS).rev() {
        acc = group.double_projective(&acc);
        let sum = group.add_projective(&acc, &base);
        acc = ProjectivePoint::conditional_select(&acc, &sum, scalar.bit(i));
    }

    Ok(acc.to_affine())
}

/// Compute `scalar · G` for the group's base point
pub fn multiply_base(group: &CurveGroup, scalar: &Scalar) -> Result<Point> {
    multiply(group, scalar, &group.generator())
}
