//! P-256 scalar arithmetic operations

use crate::ec::p256::constants::P256_SCALAR_SIZE;
use crate::ec::p256::limbs::{self, Limbs, Modulus};
use crate::error::{validate, Error, Result};
use core::fmt;
use ecka_common::security::SecretBuffer;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq, CtOption};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Montgomery parameters of the group order n
pub(crate) const N: Modulus = Modulus {
    m: [
        0xF3B9_CAC2_FC63_2551,
        0xBCE6_FAAD_A717_9E84,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_0000_0000,
    ],
    r2: [
        0x8324_4C95_BE79_EEA2,
        0x4699_799C_49BD_6FA6,
        0x2845_B239_2B6B_EC59,
        0x66E1_2D94_F3D9_5620,
    ],
    one: [
        0x0C46_353D_039C_DAAF,
        0x4319_0552_58E8_617B,
        0x0000_0000_0000_0000,
        0x0000_0000_FFFF_FFFF,
    ],
    inv: 0xCCD1_C8AA_EE00_BC4F,
};

/// Upper bound on draws when sampling a scalar.
///
/// A uniform 256-bit draw lands outside `[1, n)` with probability below
/// 2⁻³², so hitting this limit means the source is broken.
pub const MAX_SCALAR_DRAWS: usize = 64;

/// P-256 scalar value for use in elliptic curve operations
///
/// Always an integer in `[1, n)`: construction rejects zero and values
/// `≥ n` instead of reducing them. Automatically zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar(Limbs);

impl Scalar {
    /// Create a scalar from big-endian bytes
    ///
    /// Returns [`Error::InvalidScalar`] for zero or for any value `≥ n`.
    pub fn new(mut bytes: [u8; P256_SCALAR_SIZE]) -> Result<Self> {
        let scalar: Option<Self> = Self::from_repr(&bytes).into();
        bytes.zeroize();
        scalar.ok_or(Error::InvalidScalar {
            context: "Scalar::new",
            reason: "scalar is zero or not below the group order",
        })
    }

    /// Constant-time range check and construction
    ///
    /// The returned option is `None` exactly when `bytes` is zero or `≥ n`;
    /// deciding that does not branch on the value.
    pub fn from_repr(bytes: &[u8; P256_SCALAR_SIZE]) -> CtOption<Self> {
        let raw = limbs::from_be_bytes(bytes);
        let in_range = !limbs::is_zero(&raw) & limbs::lt(&raw, &N.m);
        CtOption::new(Scalar(raw), in_range)
    }

    /// Create a scalar from an existing SecretBuffer
    pub fn from_secret_buffer(buffer: &SecretBuffer<P256_SCALAR_SIZE>) -> Result<Self> {
        let mut bytes = [0u8; P256_SCALAR_SIZE];
        bytes.copy_from_slice(buffer.as_ref());
        let scalar = Self::new(bytes);
        bytes.zeroize();
        scalar
    }

    /// Deserialize a scalar from a byte slice with validation
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("Scalar::deserialize", bytes.len(), P256_SCALAR_SIZE)?;

        let mut scalar_bytes = [0u8; P256_SCALAR_SIZE];
        scalar_bytes.copy_from_slice(bytes);
        let scalar = Self::new(scalar_bytes);
        scalar_bytes.zeroize();
        scalar
    }

    /// Draw a uniformly random scalar in `[1, n)` by rejection sampling
    ///
    /// 32 bytes are read from `rng` per attempt. A failing source, or
    /// [`MAX_SCALAR_DRAWS`] consecutive out-of-range draws, yields
    /// [`Error::RandomnessExhausted`].
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; P256_SCALAR_SIZE];

        for attempt in 0..MAX_SCALAR_DRAWS {
            if rng.try_fill_bytes(&mut bytes).is_err() {
                bytes.zeroize();
                return Err(Error::RandomnessExhausted {
                    context: "Scalar::random",
                });
            }

            let candidate: Option<Self> = Self::from_repr(&bytes).into();
            if let Some(scalar) = candidate {
                bytes.zeroize();
                if attempt > 0 {
                    tracing::trace!(rejected = attempt, "scalar draw needed rejection sampling");
                }
                return Ok(scalar);
            }
        }

        bytes.zeroize();
        Err(Error::RandomnessExhausted {
            context: "Scalar::random",
        })
    }

    /// Serialize the scalar as 32 big-endian bytes inside a zeroizing buffer
    pub fn serialize(&self) -> SecretBuffer<P256_SCALAR_SIZE> {
        SecretBuffer::new(limbs::to_be_bytes(&self.0))
    }

    /// Constant-time zero test
    ///
    /// Constructors never produce zero, but an explicitly zeroized scalar is.
    pub fn is_zero(&self) -> Choice {
        limbs::is_zero(&self.0)
    }

    /// Bit `i` of the scalar (bit 0 is least significant)
    #[inline(always)]
    pub(crate) fn bit(&self, i: usize) -> Choice {
        Choice::from(((self.0[i / 64] >> (i % 64)) & 1) as u8)
    }

    /// Add two scalars modulo the curve order n
    ///
    /// Fails with [`Error::InvalidScalar`] when the sum is ≡ 0 (mod n).
    pub fn add_mod_n(&self, other: &Self) -> Result<Self> {
        Self::nonzero(limbs::add_mod(&self.0, &other.0, &N.m), "Scalar::add_mod_n")
    }

    /// Subtract two scalars modulo the curve order n
    ///
    /// Fails with [`Error::InvalidScalar`] when the operands are equal.
    pub fn sub_mod_n(&self, other: &Self) -> Result<Self> {
        Self::nonzero(limbs::sub_mod(&self.0, &other.0, &N.m), "Scalar::sub_mod_n")
    }

    /// Multiply two scalars modulo the curve order n
    ///
    /// n is prime and both factors are non-zero, so the product never
    /// vanishes.
    pub fn mul_mod_n(&self, other: &Self) -> Result<Self> {
        // (a·b·R⁻¹)·R²·R⁻¹ = a·b
        let mut partial = limbs::mont_mul(&self.0, &other.0, &N);
        let product = limbs::mont_mul(&partial, &N.r2, &N);
        partial.zeroize();
        Self::nonzero(product, "Scalar::mul_mod_n")
    }

    /// Compute the additive inverse n − self
    ///
    /// Total on `[1, n)`: the result is again in `[1, n)`.
    pub fn negate(&self) -> Self {
        Scalar(limbs::sub_mod(&[0; 4], &self.0, &N.m))
    }

    fn nonzero(mut raw: Limbs, context: &'static str) -> Result<Self> {
        if bool::from(limbs::is_zero(&raw)) {
            raw.zeroize();
            return Err(Error::InvalidScalar {
                context,
                reason: "result is zero modulo the group order",
            });
        }
        Ok(Scalar(raw))
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar([REDACTED])")
    }
}
