//! Trait definition for two-party Diffie-Hellman style key agreement
//!
//! Each party generates a key pair once, sends its public key to the peer
//! and combines the peer's public key with its own secret key. Both sides end
//! up with bit-identical shared secrets.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for key agreement schemes with domain-specific types.
///
/// # Security Design
///
/// Secret keys and shared secrets must be zeroizable and only serialize
/// through the zeroizing contract of [`SerializeSecret`]. Public keys coming
/// from a peer are validated inside [`KeyAgreement::compute_shared`], never
/// trusted on the strength of having been parsed.
pub trait KeyAgreement {
    /// Public key type, exchanged over the wire.
    type PublicKey: Clone + Serialize;

    /// Secret key type.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type. Should be fed to a KDF and dropped immediately.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Keypair type; an intermediate type without a serialization contract.
    type KeyPair: Clone;

    /// Returns the scheme name.
    fn name() -> &'static str;

    /// Generate a new keypair from the provided CSPRNG.
    fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Combine the local secret key with the peer's public key.
    ///
    /// # Security Requirements
    /// - Must validate the peer public key, even for trusted peers.
    /// - Must reject degenerate (identity) results.
    /// - Must run in time independent of the secret key.
    fn compute_shared(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
