// Cross-crate key agreement tests: curve lookup, the KeyAgreement trait
// surface and the wire formats exchanged between two parties
use ecka_algorithms::ec::p256::{self, CurveGroup, PointFormat};
use ecka_api::{Error, KeyAgreement, Serialize, SerializeSecret};
use ecka_ecdh::{compute_shared, generate_public, EcdhP256, EcdhP256PublicKey};
use ecka_params::traditional::curves::CurveName;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Full two-party exchange through any key agreement scheme
fn agree<K: KeyAgreement, R: rand::RngCore + rand::CryptoRng>(
    rng: &mut R,
) -> ecka_api::Result<(K::SharedSecret, K::SharedSecret)> {
    let alice = K::generate_keypair(rng)?;
    let bob = K::generate_keypair(rng)?;

    // Public keys cross the wire as bytes
    let alice_wire = K::public_key(&alice).to_bytes();
    let bob_wire = K::public_key(&bob).to_bytes();
    let alice_pk = K::PublicKey::from_bytes(&alice_wire)?;
    let bob_pk = K::PublicKey::from_bytes(&bob_wire)?;

    let ss_alice = K::compute_shared(&K::secret_key(&alice), &bob_pk)?;
    let ss_bob = K::compute_shared(&K::secret_key(&bob), &alice_pk)?;
    Ok((ss_alice, ss_bob))
}

#[test]
fn test_generic_agreement() {
    let (a, b) = agree::<EcdhP256, _>(&mut OsRng).expect("agreement failed");
    assert_eq!(a.to_bytes_zeroizing(), b.to_bytes_zeroizing());
}

#[test]
fn test_group_lookup_by_name() {
    let by_name = CurveGroup::from_name("P-256").unwrap();
    let by_alias = CurveGroup::from_name("secp256r1").unwrap();
    let by_enum = CurveGroup::for_curve(CurveName::P256);

    assert!(std::ptr::eq(by_name, CurveGroup::p256()));
    assert!(std::ptr::eq(by_alias, by_enum));
    assert_eq!(by_name.name(), "P-256");

    assert!(matches!(
        CurveGroup::from_name("P-999"),
        Err(Error::UnknownCurve { .. })
    ));
}

#[test]
fn test_agreement_with_looked_up_group() -> ecka_api::Result<()> {
    let group = CurveGroup::from_name("P-256")?;
    let mut rng = ChaCha20Rng::seed_from_u64(2024);

    let client = generate_public(group, &mut rng)?;
    let server = generate_public(group, &mut rng)?;

    let client_secret = compute_shared(group, &client, server.public())?;
    let server_secret = compute_shared(group, &server, client.public())?;
    assert_eq!(client_secret, server_secret);
    Ok(())
}

#[test]
fn test_compressed_wire_format() -> ecka_api::Result<()> {
    let alice = EcdhP256::generate_keypair(&mut OsRng)?;
    let bob = EcdhP256::generate_keypair(&mut OsRng)?;

    let bob_wire = EcdhP256::public_key(&bob).to_bytes_with_format(PointFormat::Compressed);
    assert_eq!(p256::detect_format(&bob_wire)?, PointFormat::Compressed);
    let bob_pk = EcdhP256PublicKey::from_bytes(&bob_wire)?;

    let alice_pk = EcdhP256PublicKey::from_bytes(&EcdhP256::public_key(&alice).to_bytes())?;

    assert_eq!(
        EcdhP256::compute_shared(&EcdhP256::secret_key(&alice), &bob_pk)?,
        EcdhP256::compute_shared(&EcdhP256::secret_key(&bob), &alice_pk)?
    );
    Ok(())
}

#[test]
fn test_different_peers_different_secrets() -> ecka_api::Result<()> {
    let alice = EcdhP256::generate_keypair(&mut OsRng)?;
    let bob = EcdhP256::generate_keypair(&mut OsRng)?;
    let carol = EcdhP256::generate_keypair(&mut OsRng)?;
    let sk = EcdhP256::secret_key(&alice);

    let with_bob = EcdhP256::compute_shared(&sk, &EcdhP256::public_key(&bob))?;
    let with_carol = EcdhP256::compute_shared(&sk, &EcdhP256::public_key(&carol))?;
    assert_ne!(with_bob, with_carol);
    Ok(())
}

#[test]
fn test_tampered_public_key_rejected() -> ecka_api::Result<()> {
    let bob = EcdhP256::generate_keypair(&mut OsRng)?;
    let mut wire = EcdhP256::public_key(&bob).to_bytes();
    wire[64] ^= 0x01;

    let err = EcdhP256PublicKey::from_bytes(&wire).unwrap_err();
    assert!(matches!(err, Error::InvalidPoint { .. }));
    assert!(err.is_boundary_error());
    Ok(())
}

#[test]
fn test_all_zero_encodings_rejected() {
    for len in [1usize, 33, 65] {
        let bytes = vec![0u8; len];
        assert!(EcdhP256PublicKey::from_bytes(&bytes).is_err(), "len {}", len);
    }
}
