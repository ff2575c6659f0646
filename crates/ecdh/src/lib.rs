//! Elliptic Curve Diffie-Hellman key agreement
//!
//! Two parties each generate a key pair `(d, Q = d·G)`, exchange the
//! public points and compute `x(d_A·Q_B) = x(d_B·Q_A)`. The peer's point is
//! validated on every computation; the resulting x-coordinate is meant to be
//! fed to a KDF, not used as a key directly.

#![forbid(unsafe_code)]

pub mod p256;

// Re-exports
pub use p256::{
    compute_shared, generate_public, EcdhP256, EcdhP256PublicKey, EcdhP256SecretKey,
    EcdhP256SharedSecret, KeyPair, SharedSecret,
};
