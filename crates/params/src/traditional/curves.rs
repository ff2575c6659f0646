//! Short-Weierstrass curve parameter sets
//!
//! All values are big-endian byte strings, exactly as published in
//! SEC 2 / FIPS 186-5.

use core::fmt;
use core::str::FromStr;

/// Parameters `(p, a, b, n, G, h)` of a 256-bit prime-order curve
/// `y² = x³ + a·x + b` over 𝔽ₚ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Canonical curve name
    pub name: &'static str,
    /// Field prime p
    pub p: [u8; 32],
    /// Curve coefficient a
    pub a: [u8; 32],
    /// Curve coefficient b
    pub b: [u8; 32],
    /// Order n of the base point
    pub n: [u8; 32],
    /// Base point x-coordinate
    pub g_x: [u8; 32],
    /// Base point y-coordinate
    pub g_y: [u8; 32],
    /// Cofactor
    pub h: u32,
}

/// NIST P-256 (secp256r1, prime256v1)
pub const NIST_P256: CurveParams = CurveParams {
    name: "P-256",
    // p = 2^256 - 2^224 + 2^192 + 2^96 - 1
    p: [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF,
    ],
    // a = p - 3
    a: [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFC,
    ],
    b: [
        0x5A, 0xC6, 0x35, 0xD8, 0xAA, 0x3A, 0x93, 0xE7, 0xB3, 0xEB, 0xBD, 0x55, 0x76, 0x98, 0x86,
        0xBC, 0x65, 0x1D, 0x06, 0xB0, 0xCC, 0x53, 0xB0, 0xF6, 0x3B, 0xCE, 0x3C, 0x3E, 0x27, 0xD2,
        0x60, 0x4B,
    ],
    n: [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xBC, 0xE6, 0xFA, 0xAD, 0xA7, 0x17, 0x9E, 0x84, 0xF3, 0xB9, 0xCA, 0xC2, 0xFC, 0x63,
        0x25, 0x51,
    ],
    g_x: [
        0x6B, 0x17, 0xD1, 0xF2, 0xE1, 0x2C, 0x42, 0x47, 0xF8, 0xBC, 0xE6, 0xE5, 0x63, 0xA4, 0x40,
        0xF2, 0x77, 0x03, 0x7D, 0x81, 0x2D, 0xEB, 0x33, 0xA0, 0xF4, 0xA1, 0x39, 0x45, 0xD8, 0x98,
        0xC2, 0x96,
    ],
    g_y: [
        0x4F, 0xE3, 0x42, 0xE2, 0xFE, 0x1A, 0x7F, 0x9B, 0x8E, 0xE7, 0xEB, 0x4A, 0x7C, 0x0F, 0x9E,
        0x16, 0x2B, 0xCE, 0x33, 0x57, 0x6B, 0x31, 0x5E, 0xCE, 0xCB, 0xB6, 0x40, 0x68, 0x37, 0xBF,
        0x51, 0xF5,
    ],
    h: 1,
};

/// Named curve selector used as configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveName {
    /// NIST P-256
    #[cfg_attr(
        feature = "serde",
        serde(rename = "P-256", alias = "secp256r1", alias = "prime256v1")
    )]
    P256,
}

impl CurveName {
    /// Resolve a curve by any of its common names (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        const P256_ALIASES: [&str; 4] = ["P-256", "P256", "secp256r1", "prime256v1"];
        P256_ALIASES
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(name.trim()))
            .then_some(CurveName::P256)
    }

    /// Parameter set for this curve
    pub fn params(&self) -> &'static CurveParams {
        match self {
            CurveName::P256 => &NIST_P256,
        }
    }

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        self.params().name
    }
}

/// Returned when a curve name matches no known parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCurveName;

impl fmt::Display for UnknownCurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown curve name")
    }
}

impl FromStr for CurveName {
    type Err = UnknownCurveName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(UnknownCurveName)
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
