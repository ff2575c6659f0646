//! ECDH with NIST P-256
//!
//! The free functions [`generate_public`] and [`compute_shared`] take the
//! curve group explicitly; [`EcdhP256`] wraps them behind the
//! [`KeyAgreement`] trait using the process-wide P-256 group.
//!
//! # Security Features
//!
//! - Uniform secret scalars by rejection sampling, never reduced mod n
//! - Constant-time scalar multiplication
//! - Peer point validation on every computation (invalid-curve attacks)
//! - Secret scalars and shared secrets zeroized on drop, redacted in `Debug`

use core::fmt;
use ecka_algorithms::ec::p256::{self as ec_p256, CurveGroup, Point, PointFormat, Scalar};
use ecka_api::{Error, KeyAgreement, Result, ResultExt, Serialize, SerializeSecret};
use ecka_common::security::SecretBuffer;
use ecka_params::traditional::ecdh::{
    ECDH_P256_PRIVATE_KEY_SIZE, ECDH_P256_PUBLIC_KEY_COMPRESSED_SIZE, ECDH_P256_PUBLIC_KEY_SIZE,
    ECDH_P256_SHARED_SECRET_SIZE,
};
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// A secret scalar together with its public point `secret·G`
#[derive(Clone)]
pub struct KeyPair {
    secret: Scalar,
    public: Point,
}

impl KeyPair {
    /// Rebuild a key pair from a known secret scalar
    pub fn from_secret(group: &CurveGroup, secret: Scalar) -> Result<Self> {
        let public = ec_p256::multiply_base(group, &secret)?;
        Ok(KeyPair { secret, public })
    }

    /// The secret scalar
    pub fn secret(&self) -> &Scalar {
        &self.secret
    }

    /// The public point
    pub fn public(&self) -> &Point {
        &self.public
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Raw ECDH output: the big-endian x-coordinate of the shared point
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(SecretBuffer<ECDH_P256_SHARED_SECRET_SIZE>);

impl SharedSecret {
    /// Borrow the 32 secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Copy the secret bytes into a buffer that is zeroized on drop
    pub fn to_zeroizing_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_slice().to_vec())
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SharedSecret {}

impl SerializeSecret for SharedSecret {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        SecretBuffer::from_slice(bytes)
            .map(SharedSecret)
            .with_context("SharedSecret::from_bytes")
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.to_zeroizing_bytes()
    }
}

/// Generate a key pair in `group`.
///
/// Draws 32-byte candidates from `rng` until one lies in `[1, n)` and
/// returns it with `secret·G`. Fails with [`Error::RandomnessExhausted`]
/// when the source errors or keeps producing out-of-range values.
pub fn generate_public<R: CryptoRng + RngCore>(group: &CurveGroup, rng: &mut R) -> Result<KeyPair> {
    let (secret, public) =
        ec_p256::generate_keypair(group, rng).with_context("generate_public")?;
    tracing::debug!(curve = group.name(), "generated key pair");
    Ok(KeyPair { secret, public })
}

/// Compute the shared secret `x(local.secret · peer)`.
///
/// The peer point is always validated: off-curve points and the identity
/// are rejected with [`Error::InvalidPeerPoint`] before any multiplication
/// with the secret scalar. An identity result is reported as
/// [`Error::DegenerateSecret`].
pub fn compute_shared(group: &CurveGroup, local: &KeyPair, peer: &Point) -> Result<SharedSecret> {
    shared_x_coordinate(group, &local.secret, peer)
}

fn shared_x_coordinate(group: &CurveGroup, secret: &Scalar, peer: &Point) -> Result<SharedSecret> {
    const CONTEXT: &str = "compute_shared";

    if group.validate(peer).is_err() {
        tracing::warn!(curve = group.name(), "rejected peer point not on the curve");
        return Err(Error::InvalidPeerPoint {
            context: CONTEXT,
            reason: "point is not on the curve",
        });
    }
    if group.is_identity(peer) {
        tracing::warn!(curve = group.name(), "rejected identity peer point");
        return Err(Error::InvalidPeerPoint {
            context: CONTEXT,
            reason: "point is the identity",
        });
    }

    let shared = ec_p256::multiply(group, secret, peer)?;
    if shared.is_identity() {
        tracing::warn!(curve = group.name(), "shared point is the identity");
        return Err(Error::DegenerateSecret { context: CONTEXT });
    }

    tracing::debug!(curve = group.name(), "computed shared secret");
    Ok(SharedSecret(SecretBuffer::new(shared.x_coordinate_bytes())))
}

/// ECDH key agreement over P-256
pub struct EcdhP256;

/// Public key for ECDH-P256: a validated, non-identity curve point
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdhP256PublicKey(Point);

/// Secret key for ECDH-P256: a scalar in `[1, n)`
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EcdhP256SecretKey(Scalar);

/// Shared secret for ECDH-P256
pub type EcdhP256SharedSecret = SharedSecret;

impl EcdhP256PublicKey {
    /// Wrap a point after checking it is on the curve and not the identity
    pub fn from_point(point: Point) -> Result<Self> {
        const CONTEXT: &str = "EcdhP256PublicKey::from_point";

        CurveGroup::p256()
            .validate(&point)
            .with_context(CONTEXT)?;
        if point.is_identity() {
            return Err(Error::InvalidPeerPoint {
                context: CONTEXT,
                reason: "point is the identity",
            });
        }
        Ok(Self(point))
    }

    /// The underlying curve point
    pub fn as_point(&self) -> &Point {
        &self.0
    }

    /// Export the public key in the requested SEC 1 layout
    pub fn to_bytes_with_format(&self, format: PointFormat) -> Vec<u8> {
        ec_p256::encode(&self.0, format)
    }
}

impl Serialize for EcdhP256PublicKey {
    /// Accepts the uncompressed and compressed SEC 1 forms
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let point = ec_p256::decode(CurveGroup::p256(), bytes)
            .with_context("EcdhP256PublicKey::from_bytes")?;
        Self::from_point(point).with_context("EcdhP256PublicKey::from_bytes")
    }

    /// Uncompressed SEC 1 encoding (65 bytes)
    fn to_bytes(&self) -> Vec<u8> {
        ec_p256::encode_uncompressed(&self.0)
    }
}

impl EcdhP256SecretKey {
    /// The underlying scalar
    pub fn as_scalar(&self) -> &Scalar {
        &self.0
    }
}

impl SerializeSecret for EcdhP256SecretKey {
    /// 32-byte big-endian scalar; zero and values `≥ n` are rejected
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Scalar::deserialize(bytes)
            .map(Self)
            .with_context("EcdhP256SecretKey::from_bytes")
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.serialize().as_slice().to_vec())
    }
}

impl KeyAgreement for EcdhP256 {
    type PublicKey = EcdhP256PublicKey;
    type SecretKey = EcdhP256SecretKey;
    type SharedSecret = EcdhP256SharedSecret;
    type KeyPair = KeyPair;

    fn name() -> &'static str {
        "ECDH-P256"
    }

    fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        generate_public(CurveGroup::p256(), rng)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        EcdhP256PublicKey(keypair.public)
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        EcdhP256SecretKey(keypair.secret.clone())
    }

    fn compute_shared(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret> {
        shared_x_coordinate(CurveGroup::p256(), &secret_key.0, &peer_public_key.0)
    }
}

/// Extension methods for P-256 key types
impl EcdhP256 {
    /// Derive the public key `secret·G` belonging to a secret key
    pub fn public_key_from_secret(secret_key: &EcdhP256SecretKey) -> Result<EcdhP256PublicKey> {
        let point = ec_p256::multiply_base(CurveGroup::p256(), &secret_key.0)?;
        Ok(EcdhP256PublicKey(point))
    }

    /// Re-check a public key against the curve
    pub fn validate_public_key(key: &EcdhP256PublicKey) -> Result<()> {
        EcdhP256PublicKey::from_point(key.0).map(|_| ())
    }

    /// Size of an exported secret key in bytes
    pub const SECRET_KEY_SIZE: usize = ECDH_P256_PRIVATE_KEY_SIZE;

    /// Size of an uncompressed public key in bytes
    pub const PUBLIC_KEY_SIZE: usize = ECDH_P256_PUBLIC_KEY_SIZE;

    /// Size of a compressed public key in bytes
    pub const PUBLIC_KEY_COMPRESSED_SIZE: usize = ECDH_P256_PUBLIC_KEY_COMPRESSED_SIZE;

    /// Size of the shared secret in bytes
    pub const SHARED_SECRET_SIZE: usize = ECDH_P256_SHARED_SECRET_SIZE;
}
