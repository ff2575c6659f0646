//! Data model for the ECDH vector file

use serde::Deserialize;

/// One suite: a curve, the cases that must agree and the peers that must fail
#[derive(Debug, Deserialize)]
pub struct EcdhSuite {
    pub algorithm: String,
    pub curve: String,
    pub mode: String,
    pub valid: Vec<ValidCase>,
    pub invalid: Vec<InvalidPeerCase>,
}

/// Static private key, the matching public point, a peer point and the
/// expected x-coordinate of the shared point. All fields are hex.
#[derive(Debug, Deserialize)]
pub struct ValidCase {
    pub id: u64,
    #[serde(default)]
    pub source: Option<String>,
    pub d: String,
    pub qx_iut: String,
    pub qy_iut: String,
    pub qx_peer: String,
    pub qy_peer: String,
    pub z: String,
}

/// Encoded peer public key that must be rejected with `error`
#[derive(Debug, Deserialize)]
pub struct InvalidPeerCase {
    pub id: u64,
    #[serde(default)]
    pub comment: Option<String>,
    pub peer: String,
    pub error: String,
}
