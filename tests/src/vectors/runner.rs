//! Executes vector cases against the ECDH implementation

use super::error::{Result, VectorError};
use super::model::{EcdhSuite, InvalidPeerCase, ValidCase};
use ecka_algorithms::ec::p256::{CurveGroup, Point, PointFormat, Scalar};
use ecka_api::{Error, KeyAgreement, Serialize, SerializeSecret};
use ecka_ecdh::{compute_shared, EcdhP256, EcdhP256PublicKey, EcdhP256SecretKey, KeyPair};
use zeroize::Zeroizing;

/// Tally of a suite run
#[derive(Debug, Default)]
pub struct Summary {
    pub passed: usize,
    pub failures: Vec<VectorError>,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run every case of a suite and collect failures instead of stopping
pub fn run_suite(suite: &EcdhSuite) -> Summary {
    let mut summary = Summary::default();
    let outcomes = suite
        .valid
        .iter()
        .map(run_valid_case)
        .chain(suite.invalid.iter().map(run_invalid_case));

    for outcome in outcomes {
        match outcome {
            Ok(()) => summary.passed += 1,
            Err(e) => summary.failures.push(e),
        }
    }
    summary
}

/// Check the public key derivation and the shared secret of one case.
///
/// The peer is fed in both SEC 1 forms and the secret is computed through
/// both the trait surface and the free functions.
pub fn run_valid_case(case: &ValidCase) -> Result<()> {
    let d = Zeroizing::new(hex::decode(&case.d)?);
    let sk = EcdhP256SecretKey::from_bytes(&d)?;

    let pk = EcdhP256::public_key_from_secret(&sk)?;
    let point = pk.as_point();
    expect_hex(case.id, "qx_iut", &case.qx_iut, &point.x_coordinate_bytes())?;
    expect_hex(case.id, "qy_iut", &case.qy_iut, &point.y_coordinate_bytes())?;

    let peer_x = fixed::<32>("qx_peer", &hex::decode(&case.qx_peer)?)?;
    let peer_y = fixed::<32>("qy_peer", &hex::decode(&case.qy_peer)?)?;
    let peer_point = Point::new_uncompressed(&peer_x, &peer_y)?;
    let peer = EcdhP256PublicKey::from_point(peer_point)?;
    let compressed = EcdhP256PublicKey::from_bytes(
        &peer.to_bytes_with_format(PointFormat::Compressed),
    )?;
    if compressed != peer {
        return Err(VectorError::Mismatch {
            id: case.id,
            field: "compressed peer",
            expected: hex::encode(peer.to_bytes()),
            actual: hex::encode(compressed.to_bytes()),
        });
    }

    let via_trait = EcdhP256::compute_shared(&sk, &compressed)?;
    expect_hex(case.id, "z", &case.z, via_trait.as_bytes())?;

    let group = CurveGroup::p256();
    let local = KeyPair::from_secret(group, Scalar::deserialize(&d)?)?;
    let via_free_fn = compute_shared(group, &local, &peer_point)?;
    expect_hex(case.id, "z", &case.z, via_free_fn.as_bytes())
}

/// Check that an encoded peer key is rejected with the expected error kind
pub fn run_invalid_case(case: &InvalidPeerCase) -> Result<()> {
    let bytes = hex::decode(&case.peer)?;
    match EcdhP256PublicKey::from_bytes(&bytes) {
        Ok(_) => Err(VectorError::WrongOutcome {
            id: case.id,
            expected: case.error.clone(),
            actual: "success".to_string(),
        }),
        Err(e) if error_kind(&e) == case.error => Ok(()),
        Err(e) => Err(VectorError::WrongOutcome {
            id: case.id,
            expected: case.error.clone(),
            actual: e.to_string(),
        }),
    }
}

/// Variant name of an error, as written in the vector files
pub fn error_kind(error: &Error) -> &'static str {
    match error {
        Error::InvalidScalar { .. } => "InvalidScalar",
        Error::InvalidPoint { .. } => "InvalidPoint",
        Error::InvalidPeerPoint { .. } => "InvalidPeerPoint",
        Error::DivisionByZero { .. } => "DivisionByZero",
        Error::MalformedEncoding { .. } => "MalformedEncoding",
        Error::FieldElementOutOfRange { .. } => "FieldElementOutOfRange",
        Error::DegenerateSecret { .. } => "DegenerateSecret",
        Error::RandomnessExhausted { .. } => "RandomnessExhausted",
        Error::UnknownCurve { .. } => "UnknownCurve",
        Error::InvalidParameters { .. } => "InvalidParameters",
    }
}

fn fixed<const N: usize>(field: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| VectorError::Length {
        field,
        expected: N,
        actual: bytes.len(),
    })
}

fn expect_hex(id: u64, field: &'static str, expected: &str, actual: &[u8]) -> Result<()> {
    let actual = hex::encode(actual);
    if actual.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(VectorError::Mismatch {
            id,
            field,
            expected: expected.to_string(),
            actual,
        })
    }
}
