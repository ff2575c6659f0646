//! The group of points on a short-Weierstrass curve over the P-256 field
//!
//! A [`CurveGroup`] pairs a parameter set with the precomputed Montgomery
//! forms of its coefficients. Addition and doubling use the complete
//! projective formulas of Renes, Costello and Batina (ePrint 2015/1060,
//! Algorithms 1 and 3): they are correct for every input pair, including
//! the identity, equal points and inverse points, so group operations never
//! branch on coordinates.

use crate::ec::p256::{
    field::{self, FieldElement},
    limbs,
    point::{Point, ProjectivePoint},
    scalar,
};
use crate::error::{validate, Error, Result};
use ecka_params::traditional::curves::{CurveName, CurveParams, NIST_P256};
use once_cell::sync::Lazy;
use subtle::ConstantTimeEq;

static P256_GROUP: Lazy<CurveGroup> =
    Lazy::new(|| CurveGroup::new(&NIST_P256).expect("built-in P-256 parameters must be valid"));

/// Curve group `E(𝔽ₚ)` for `y² = x³ + a·x + b`
#[derive(Clone, Debug)]
pub struct CurveGroup {
    params: &'static CurveParams,
    a: FieldElement,
    b: FieldElement,
    b3: FieldElement,
    generator: Point,
}

impl CurveGroup {
    /// Build a group from a parameter set, checking it against the compiled
    /// field and scalar arithmetic.
    ///
    /// Rejects parameter sets whose prime or order differ from the P-256
    /// moduli, whose cofactor is not 1, whose discriminant vanishes or
    /// whose base point is off the curve.
    pub fn new(params: &'static CurveParams) -> Result<Self> {
        validate::parameter(
            limbs::from_be_bytes(&params.p) == field::P.m,
            "CurveGroup::new",
            "prime does not match the field implementation",
        )?;
        validate::parameter(
            limbs::from_be_bytes(&params.n) == scalar::N.m,
            "CurveGroup::new",
            "order does not match the scalar implementation",
        )?;
        validate::parameter(params.h == 1, "CurveGroup::new", "cofactor must be 1")?;

        let group = Self::build(params)?;

        // 4a³ + 27b² ≠ 0
        let four_a3 = FieldElement::from_u64(4).mul(&group.a.square().mul(&group.a));
        let twenty_seven_b2 = FieldElement::from_u64(27).mul(&group.b.square());
        validate::parameter(
            !bool::from(four_a3.add(&twenty_seven_b2).is_zero()),
            "CurveGroup::new",
            "curve is singular",
        )?;
        validate::parameter(
            group.is_on_curve(&group.generator),
            "CurveGroup::new",
            "base point is not on the curve",
        )?;

        tracing::debug!(curve = params.name, "curve group constructed");
        Ok(group)
    }

    /// The process-wide NIST P-256 group
    pub fn p256() -> &'static CurveGroup {
        &P256_GROUP
    }

    /// Group for a configured curve name
    pub fn for_curve(name: CurveName) -> &'static CurveGroup {
        match name {
            CurveName::P256 => Self::p256(),
        }
    }

    /// Resolve a curve by name ("P-256", "secp256r1", "prime256v1", ...)
    pub fn from_name(name: &str) -> Result<&'static CurveGroup> {
        CurveName::from_name(name)
            .map(Self::for_curve)
            .ok_or_else(|| Error::UnknownCurve {
                name: name.to_string(),
            })
    }

    /// Canonical curve name
    pub fn name(&self) -> &'static str {
        self.params.name
    }

    /// Underlying parameter set
    pub fn params(&self) -> &'static CurveParams {
        self.params
    }

    /// Base point G
    pub fn generator(&self) -> Point {
        self.generator
    }

    /// Group order n, big-endian
    pub fn order(&self) -> [u8; 32] {
        self.params.n
    }

    /// Curve coefficient a
    pub fn a(&self) -> FieldElement {
        self.a
    }

    /// Curve coefficient b
    pub fn b(&self) -> FieldElement {
        self.b
    }

    /// Is `point` the identity?
    pub fn is_identity(&self, point: &Point) -> bool {
        point.is_identity()
    }

    /// Does `point` satisfy `y² = x³ + a·x + b`? The identity always does.
    ///
    /// Both sides are always evaluated; the result is combined with the
    /// identity flag without branching.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        let lhs = point.y.square();
        let rhs = self.curve_rhs(&point.x);
        (point.is_identity | lhs.ct_eq(&rhs)).into()
    }

    /// Reject points that are not on the curve with [`Error::InvalidPoint`]
    pub fn validate(&self, point: &Point) -> Result<()> {
        if !self.is_on_curve(point) {
            return Err(Error::InvalidPoint {
                context: "CurveGroup::validate",
            });
        }
        Ok(())
    }

    /// Group law `p + q`
    pub fn add(&self, p: &Point, q: &Point) -> Point {
        self.add_projective(&p.to_projective(), &q.to_projective())
            .to_affine()
    }

    /// `2·p`
    pub fn double(&self, p: &Point) -> Point {
        self.double_projective(&p.to_projective()).to_affine()
    }

    /// `−p`; the identity is its own inverse
    pub fn negate(&self, p: &Point) -> Point {
        Point {
            is_identity: p.is_identity,
            x: p.x,
            y: p.y.negate(),
        }
    }

    /// `x³ + a·x + b`
    pub(crate) fn curve_rhs(&self, x: &FieldElement) -> FieldElement {
        x.square().mul(x).add(&self.a.mul(x)).add(&self.b)
    }

    /// Complete addition (RCB Algorithm 1, generic a)
    pub(crate) fn add_projective(
        &self,
        lhs: &ProjectivePoint,
        rhs: &ProjectivePoint,
    ) -> ProjectivePoint {
        let a = &self.a;
        let b3 = &self.b3;

        let t0 = lhs.x.mul(&rhs.x); // 1
        let t1 = lhs.y.mul(&rhs.y); // 2
        let t2 = lhs.z.mul(&rhs.z); // 3
        let t3 = lhs.x.add(&lhs.y); // 4
        let t4 = rhs.x.add(&rhs.y); // 5
        let t3 = t3.mul(&t4); // 6
        let t4 = t0.add(&t1); // 7
        let t3 = t3.sub(&t4); // 8
        let t4 = lhs.x.add(&lhs.z); // 9
        let t5 = rhs.x.add(&rhs.z); // 10
        let t4 = t4.mul(&t5); // 11
        let t5 = t0.add(&t2); // 12
        let t4 = t4.sub(&t5); // 13
        let t5 = lhs.y.add(&lhs.z); // 14
        let x3 = rhs.y.add(&rhs.z); // 15
        let t5 = t5.mul(&x3); // 16
        let x3 = t1.add(&t2); // 17
        let t5 = t5.sub(&x3); // 18
        let z3 = a.mul(&t4); // 19
        let x3 = b3.mul(&t2); // 20
        let z3 = x3.add(&z3); // 21
        let x3 = t1.sub(&z3); // 22
        let z3 = t1.add(&z3); // 23
        let y3 = x3.mul(&z3); // 24
        let t1 = t0.add(&t0); // 25
        let t1 = t1.add(&t0); // 26
        let t2 = a.mul(&t2); // 27
        let t4 = b3.mul(&t4); // 28
        let t1 = t1.add(&t2); // 29
        let t2 = t0.sub(&t2); // 30
        let t2 = a.mul(&t2); // 31
        let t4 = t4.add(&t2); // 32
        let t0 = t1.mul(&t4); // 33
        let y3 = y3.add(&t0); // 34
        let t0 = t5.mul(&t4); // 35
        let x3 = t3.mul(&x3); // 36
        let x3 = x3.sub(&t0); // 37
        let t0 = t3.mul(&t1); // 38
        let z3 = t5.mul(&z3); // 39
        let z3 = z3.add(&t0); // 40

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Exception-free doubling (RCB Algorithm 3, generic a)
    pub(crate) fn double_projective(&self, point: &ProjectivePoint) -> ProjectivePoint {
        let a = &self.a;
        let b3 = &self.b3;

        let t0 = point.x.square(); // 1
        let t1 = point.y.square(); // 2
        let t2 = point.z.square(); // 3
        let t3 = point.x.mul(&point.y); // 4
        let t3 = t3.add(&t3); // 5
        let z3 = point.x.mul(&point.z); // 6
        let z3 = z3.add(&z3); // 7
        let x3 = a.mul(&z3); // 8
        let y3 = b3.mul(&t2); // 9
        let y3 = x3.add(&y3); // 10
        let x3 = t1.sub(&y3); // 11
        let y3 = t1.add(&y3); // 12
        let y3 = x3.mul(&y3); // 13
        let x3 = t3.mul(&x3); // 14
        let z3 = b3.mul(&z3); // 15
        let t2 = a.mul(&t2); // 16
        let t3 = t0.sub(&t2); // 17
        let t3 = a.mul(&t3); // 18
        let t3 = t3.add(&z3); // 19
        let z3 = t0.add(&t0); // 20
        let t0 = z3.add(&t0); // 21
        let t0 = t0.add(&t2); // 22
        let t0 = t0.mul(&t3); // 23
        let y3 = y3.add(&t0); // 24
        let t2 = point.y.mul(&point.z); // 25
        let t2 = t2.add(&t2); // 26
        let t0 = t2.mul(&t3); // 27
        let x3 = x3.sub(&t0); // 28
        let z3 = t2.mul(&t1); // 29
        let z3 = z3.add(&z3); // 30
        let z3 = z3.add(&z3); // 31

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    fn build(params: &'static CurveParams) -> Result<Self> {
        let a = FieldElement::from_bytes(&params.a)?;
        let b = FieldElement::from_bytes(&params.b)?;
        let g_x = FieldElement::from_bytes(&params.g_x)?;
        let g_y = FieldElement::from_bytes(&params.g_y)?;
        Ok(CurveGroup {
            params,
            a,
            b,
            b3: b.mul(&FieldElement::from_u64(3)),
            generator: Point::from_affine(g_x, g_y),
        })
    }
}
