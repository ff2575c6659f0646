//! Four-limb (4 × 64-bit, little-endian) multiprecision helpers
//!
//! Both the base field 𝔽ₚ and the scalar field ℤ/nℤ run on the same
//! Montgomery engine; they differ only in the modulus, `R² mod m` and
//! `-m⁻¹ mod 2⁶⁴`. Every routine here is branch-free in its data arguments.

use subtle::{Choice, ConditionallySelectable};

/// Little-endian 256-bit integer
pub(crate) type Limbs = [u64; 4];

/// Parameters of a Montgomery domain with `R = 2²⁵⁶`
#[derive(Clone, Copy, Debug)]
pub(crate) struct Modulus {
    /// The odd modulus m
    pub(crate) m: Limbs,
    /// R² mod m
    pub(crate) r2: Limbs,
    /// R mod m, i.e. Montgomery form of 1
    pub(crate) one: Limbs,
    /// -m⁻¹ mod 2⁶⁴
    pub(crate) inv: u64,
}

/// a + b + carry, returning (sum, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// a - b - borrow, returning (difference, borrow ∈ {0, 1})
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (ret as u64, (ret >> 127) as u64)
}

/// a + b·c + carry, returning (low, high)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Parse 32 big-endian bytes into little-endian limbs
#[inline(always)]
pub(crate) fn from_be_bytes(bytes: &[u8; 32]) -> Limbs {
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let start = 24 - i * 8;
        let mut word = [0u8; 8];
        word.copy_from_slice(&bytes[start..start + 8]);
        *limb = u64::from_be_bytes(word);
    }
    limbs
}

/// Serialize little-endian limbs as 32 big-endian bytes
#[inline(always)]
pub(crate) fn to_be_bytes(limbs: &Limbs) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        let start = 24 - i * 8;
        out[start..start + 8].copy_from_slice(&limb.to_be_bytes());
    }
    out
}

/// `a < b` as a constant-time choice
#[inline(always)]
pub(crate) fn lt(a: &Limbs, b: &Limbs) -> Choice {
    let (_, borrow) = sbb(a[0], b[0], 0);
    let (_, borrow) = sbb(a[1], b[1], borrow);
    let (_, borrow) = sbb(a[2], b[2], borrow);
    let (_, borrow) = sbb(a[3], b[3], borrow);
    Choice::from(borrow as u8)
}

/// `a == 0` as a constant-time choice
#[inline(always)]
pub(crate) fn is_zero(a: &Limbs) -> Choice {
    let folded = a[0] | a[1] | a[2] | a[3];
    // Top bit of (x | -x) is set iff x != 0
    let nonzero = ((folded | folded.wrapping_neg()) >> 63) as u8;
    Choice::from(1 - nonzero)
}

/// Pick `b` when `choice` is set, `a` otherwise
#[inline(always)]
pub(crate) fn select(a: &Limbs, b: &Limbs, choice: Choice) -> Limbs {
    [
        u64::conditional_select(&a[0], &b[0], choice),
        u64::conditional_select(&a[1], &b[1], choice),
        u64::conditional_select(&a[2], &b[2], choice),
        u64::conditional_select(&a[3], &b[3], choice),
    ]
}

/// Subtract m from a five-limb value `w < 2m` when the result stays
/// non-negative
#[inline(always)]
fn reduce_once(w: [u64; 5], m: &Limbs) -> Limbs {
    let (d0, borrow) = sbb(w[0], m[0], 0);
    let (d1, borrow) = sbb(w[1], m[1], borrow);
    let (d2, borrow) = sbb(w[2], m[2], borrow);
    let (d3, borrow) = sbb(w[3], m[3], borrow);
    let (_, borrow) = sbb(w[4], 0, borrow);

    // A final borrow means w < m: keep w
    let keep = Choice::from(borrow as u8);
    select(&[d0, d1, d2, d3], &[w[0], w[1], w[2], w[3]], keep)
}

/// (a + b) mod m for a, b < m
#[inline(always)]
pub(crate) fn add_mod(a: &Limbs, b: &Limbs, m: &Limbs) -> Limbs {
    let (s0, carry) = adc(a[0], b[0], 0);
    let (s1, carry) = adc(a[1], b[1], carry);
    let (s2, carry) = adc(a[2], b[2], carry);
    let (s3, carry) = adc(a[3], b[3], carry);
    reduce_once([s0, s1, s2, s3, carry], m)
}

/// (a - b) mod m for a, b < m
#[inline(always)]
pub(crate) fn sub_mod(a: &Limbs, b: &Limbs, m: &Limbs) -> Limbs {
    let (d0, borrow) = sbb(a[0], b[0], 0);
    let (d1, borrow) = sbb(a[1], b[1], borrow);
    let (d2, borrow) = sbb(a[2], b[2], borrow);
    let (d3, borrow) = sbb(a[3], b[3], borrow);

    // Add m back when the subtraction wrapped
    let mask = 0u64.wrapping_sub(borrow);
    let (r0, carry) = adc(d0, m[0] & mask, 0);
    let (r1, carry) = adc(d1, m[1] & mask, carry);
    let (r2, carry) = adc(d2, m[2] & mask, carry);
    let (r3, _) = adc(d3, m[3] & mask, carry);
    [r0, r1, r2, r3]
}

/// Montgomery product a·b·R⁻¹ mod m (CIOS), for a, b < m
#[allow(clippy::needless_range_loop)] // Index used for multiple arrays
pub(crate) fn mont_mul(a: &Limbs, b: &Limbs, modulus: &Modulus) -> Limbs {
    let m = &modulus.m;
    let mut t = [0u64; 6];

    for i in 0..4 {
        let mut carry = 0u64;
        for j in 0..4 {
            let (lo, hi) = mac(t[j], a[j], b[i], carry);
            t[j] = lo;
            carry = hi;
        }
        let (lo, hi) = adc(t[4], carry, 0);
        t[4] = lo;
        t[5] = hi;

        let k = t[0].wrapping_mul(modulus.inv);
        let (_, mut carry) = mac(t[0], k, m[0], 0);
        for j in 1..4 {
            let (lo, hi) = mac(t[j], k, m[j], carry);
            t[j - 1] = lo;
            carry = hi;
        }
        let (lo, hi) = adc(t[4], carry, 0);
        t[3] = lo;
        t[4] = t[5] + hi;
    }

    reduce_once([t[0], t[1], t[2], t[3], t[4]], m)
}

/// Enter the Montgomery domain: a·R mod m
#[inline(always)]
pub(crate) fn to_montgomery(a: &Limbs, modulus: &Modulus) -> Limbs {
    mont_mul(a, &modulus.r2, modulus)
}

/// Leave the Montgomery domain: a·R⁻¹ mod m
#[inline(always)]
pub(crate) fn from_montgomery(a: &Limbs, modulus: &Modulus) -> Limbs {
    mont_mul(a, &[1, 0, 0, 0], modulus)
}

/// Montgomery exponentiation by a public exponent
///
/// The exponent is a fixed constant of the curve (p − 2, (p + 1)/4, ...), so
/// the square-and-multiply schedule leaks nothing about `base`.
pub(crate) fn mont_pow(base: &Limbs, exp: &Limbs, modulus: &Modulus) -> Limbs {
    let mut acc = modulus.one;
    for limb in exp.iter().rev() {
        for bit in (0..64).rev() {
            acc = mont_mul(&acc, &acc, modulus);
            if (limb >> bit) & 1 == 1 {
                acc = mont_mul(&acc, base, modulus);
            }
        }
    }
    acc
}
