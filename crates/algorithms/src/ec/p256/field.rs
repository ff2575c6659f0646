//! P-256 base field arithmetic
//!
//! Elements of 𝔽ₚ with p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1, held in Montgomery
//! form `a·R mod p` (R = 2²⁵⁶) as four little-endian 64-bit limbs. Values are
//! always fully reduced, so equality of limbs is equality of elements.

use crate::ec::p256::constants::P256_FIELD_ELEMENT_SIZE;
use crate::ec::p256::limbs::{self, Limbs, Modulus};
use crate::error::{Error, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Montgomery parameters of p
pub(crate) const P: Modulus = Modulus {
    m: [
        0xFFFF_FFFF_FFFF_FFFF,
        0x0000_0000_FFFF_FFFF,
        0x0000_0000_0000_0000,
        0xFFFF_FFFF_0000_0001,
    ],
    r2: [
        0x0000_0000_0000_0003,
        0xFFFF_FFFB_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFE,
        0x0000_0004_FFFF_FFFD,
    ],
    one: [
        0x0000_0000_0000_0001,
        0xFFFF_FFFF_0000_0000,
        0xFFFF_FFFF_FFFF_FFFF,
        0x0000_0000_FFFF_FFFE,
    ],
    // -p⁻¹ mod 2⁶⁴; the low limb of p is all ones
    inv: 1,
};

/// p − 2, the Fermat inversion exponent
const P_MINUS_2: Limbs = [
    0xFFFF_FFFF_FFFF_FFFD,
    0x0000_0000_FFFF_FFFF,
    0x0000_0000_0000_0000,
    0xFFFF_FFFF_0000_0001,
];

/// (p + 1) / 4, the square-root exponent (p ≡ 3 mod 4)
const P_PLUS_1_DIV_4: Limbs = [
    0x0000_0000_0000_0000,
    0x0000_0000_4000_0000,
    0x4000_0000_0000_0000,
    0x3FFF_FFFF_C000_0000,
];

/// Element of the P-256 base field
#[derive(Clone, Copy, Debug, Default, Zeroize)]
pub struct FieldElement(pub(crate) Limbs);

impl FieldElement {
    /// The additive identity
    pub const ZERO: Self = FieldElement([0; 4]);

    /// The multiplicative identity
    pub const ONE: Self = FieldElement(P.one);

    /// The additive identity: 0
    #[inline]
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// The multiplicative identity: 1
    #[inline]
    pub fn one() -> Self {
        Self::ONE
    }

    /// Build a field element from a small integer
    pub fn from_u64(n: u64) -> Self {
        FieldElement(limbs::to_montgomery(&[n, 0, 0, 0], &P))
    }

    /// Parse a big-endian byte string.
    ///
    /// Values `≥ p` are rejected with [`Error::FieldElementOutOfRange`];
    /// they are never silently reduced.
    pub fn from_bytes(bytes: &[u8; P256_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let raw = limbs::from_be_bytes(bytes);
        if !bool::from(limbs::lt(&raw, &P.m)) {
            return Err(Error::FieldElementOutOfRange {
                context: "FieldElement::from_bytes",
            });
        }
        Ok(FieldElement(limbs::to_montgomery(&raw, &P)))
    }

    /// Canonical 32-byte big-endian encoding
    pub fn to_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        limbs::to_be_bytes(&limbs::from_montgomery(&self.0, &P))
    }

    /// Constant-time zero test
    #[inline]
    pub fn is_zero(&self) -> Choice {
        limbs::is_zero(&self.0)
    }

    /// Low bit of the canonical integer value
    pub fn is_odd(&self) -> Choice {
        let canonical = limbs::from_montgomery(&self.0, &P);
        Choice::from((canonical[0] & 1) as u8)
    }

    /// (self + rhs) mod p
    #[inline]
    pub fn add(&self, rhs: &Self) -> Self {
        FieldElement(limbs::add_mod(&self.0, &rhs.0, &P.m))
    }

    /// (self − rhs) mod p
    #[inline]
    pub fn sub(&self, rhs: &Self) -> Self {
        FieldElement(limbs::sub_mod(&self.0, &rhs.0, &P.m))
    }

    /// (self · rhs) mod p
    #[inline]
    pub fn mul(&self, rhs: &Self) -> Self {
        FieldElement(limbs::mont_mul(&self.0, &rhs.0, &P))
    }

    /// self² mod p
    #[inline]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// 2·self mod p
    #[inline]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// −self mod p; zero maps to zero
    #[inline]
    pub fn negate(&self) -> Self {
        Self::ZERO.sub(self)
    }

    /// Multiplicative inverse via Fermat's little theorem, self^(p−2).
    ///
    /// The exponentiation always runs; only the final zero check branches.
    pub fn invert(&self) -> Result<Self> {
        let inv = self.invert_or_zero();
        if bool::from(self.is_zero()) {
            return Err(Error::DivisionByZero {
                context: "FieldElement::invert",
            });
        }
        Ok(inv)
    }

    /// self^(p−2), which is zero for zero input
    pub(crate) fn invert_or_zero(&self) -> Self {
        FieldElement(limbs::mont_pow(&self.0, &P_MINUS_2, &P))
    }

    /// Square root, if one exists.
    ///
    /// With p ≡ 3 (mod 4) the candidate is self^((p+1)/4); it is accepted
    /// only if it squares back to self. Which of the two roots is returned
    /// is unspecified; callers pick the parity they need.
    pub fn sqrt(&self) -> Option<Self> {
        let candidate = FieldElement(limbs::mont_pow(&self.0, &P_PLUS_1_DIV_4, &P));
        let is_root = candidate.square().ct_eq(self);
        if bool::from(is_root) {
            Some(candidate)
        } else {
            None
        }
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement(limbs::select(&a.0, &b.0, choice))
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}
