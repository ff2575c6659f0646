//! P-256 elliptic curve point representations

use crate::ec::p256::{
    constants::P256_FIELD_ELEMENT_SIZE, field::FieldElement, group::CurveGroup, mul,
    scalar::Scalar,
};
use crate::error::Result;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Affine coordinates (x, y) or the identity
///
/// A `Point` is not by itself a promise of curve membership: decoded points
/// are only checked by [`CurveGroup::validate`]. Everything the group
/// operations return from valid inputs is valid.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Homogeneous projective coordinates (X:Y:Z) with x = X/Z and y = Y/Z
///
/// The identity is any (0:Y:0); the complete formulas never need to test
/// for it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl Point {
    /// Create a new affine point from uncompressed byte coordinates
    ///
    /// Rejects coordinates `≥ p` and points off the P-256 curve.
    pub fn new_uncompressed(
        x_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let point = Self::from_affine(
            FieldElement::from_bytes(x_bytes)?,
            FieldElement::from_bytes(y_bytes)?,
        );
        CurveGroup::p256().validate(&point)?;
        Ok(point)
    }

    /// Wrap affine coordinates without checking the curve equation
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Self {
        Point {
            is_identity: Choice::from(0),
            x,
            y,
        }
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// The x-coordinate (zero for the identity)
    pub fn x_coordinate(&self) -> FieldElement {
        self.x
    }

    /// The y-coordinate (zero for the identity)
    pub fn y_coordinate(&self) -> FieldElement {
        self.y
    }

    /// Big-endian bytes of the x-coordinate
    pub fn x_coordinate_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Big-endian bytes of the y-coordinate
    pub fn y_coordinate_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// Scalar multiplication on the P-256 group: `scalar · self`
    pub fn mul(&self, scalar: &Scalar) -> Result<Self> {
        mul::multiply(CurveGroup::p256(), scalar, self)
    }

    pub(crate) fn to_projective(self) -> ProjectivePoint {
        let finite = ProjectivePoint {
            x: self.x,
            y: self.y,
            z: FieldElement::one(),
        };
        ProjectivePoint::conditional_select(&finite, &ProjectivePoint::IDENTITY, self.is_identity)
    }
}

impl ConstantTimeEq for Point {
    fn ct_eq(&self, other: &Self) -> Choice {
        let both_identity = self.is_identity & other.is_identity;
        let both_finite = !self.is_identity & !other.is_identity;
        both_identity | (both_finite & self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y))
    }
}

impl ConditionallySelectable for Point {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let flag = u8::conditional_select(
            &a.is_identity.unwrap_u8(),
            &b.is_identity.unwrap_u8(),
            choice,
        );
        Point {
            is_identity: Choice::from(flag),
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Point {}

impl ProjectivePoint {
    /// (0 : 1 : 0)
    pub(crate) const IDENTITY: Self = ProjectivePoint {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    /// Normalize to affine coordinates
    ///
    /// Z = 0 inverts to zero, so the identity falls out as (0, 0) with the
    /// identity flag set; no branch on the point is taken.
    pub(crate) fn to_affine(&self) -> Point {
        let z_inv = self.z.invert_or_zero();
        Point {
            is_identity: self.z.is_zero(),
            x: self.x.mul(&z_inv),
            y: self.y.mul(&z_inv),
        }
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}
