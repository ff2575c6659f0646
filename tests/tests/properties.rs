// Property-based tests for key agreement and point encodings
use ecka_algorithms::ec::p256::{self, CurveGroup, PointFormat};
use ecka_api::{KeyAgreement, Serialize};
use ecka_ecdh::{compute_shared, generate_public, EcdhP256, EcdhP256PublicKey};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_both_parties_agree(seed_a in any::<u64>(), seed_b in any::<u64>()) {
        prop_assume!(seed_a != seed_b);
        let group = CurveGroup::p256();
        let a = generate_public(group, &mut ChaCha20Rng::seed_from_u64(seed_a)).unwrap();
        let b = generate_public(group, &mut ChaCha20Rng::seed_from_u64(seed_b)).unwrap();

        let k_ab = compute_shared(group, &a, b.public()).unwrap();
        let k_ba = compute_shared(group, &b, a.public()).unwrap();
        prop_assert_eq!(k_ab, k_ba);
    }

    #[test]
    fn prop_public_key_round_trips(seed in any::<u64>(), compressed in any::<bool>()) {
        let keypair = EcdhP256::generate_keypair(&mut ChaCha20Rng::seed_from_u64(seed)).unwrap();
        let pk = EcdhP256::public_key(&keypair);
        let format = if compressed { PointFormat::Compressed } else { PointFormat::Uncompressed };

        let bytes = pk.to_bytes_with_format(format);
        prop_assert_eq!(p256::detect_format(&bytes).unwrap(), format);
        prop_assert_eq!(EcdhP256PublicKey::from_bytes(&bytes).unwrap(), pk);
    }

    #[test]
    fn prop_accepted_encodings_are_on_curve(tail in proptest::collection::vec(any::<u8>(), 64)) {
        let mut bytes = vec![0x04];
        bytes.extend_from_slice(&tail);
        // Random coordinates essentially never land on the curve; whatever
        // is accepted must be a valid non-identity point.
        if let Ok(pk) = EcdhP256PublicKey::from_bytes(&bytes) {
            prop_assert!(CurveGroup::p256().is_on_curve(pk.as_point()));
            prop_assert!(!pk.as_point().is_identity());
        }
    }

    #[test]
    fn prop_compressed_decode_yields_curve_points(x in any::<[u8; 32]>(), odd in any::<bool>()) {
        let mut bytes = vec![if odd { 0x03 } else { 0x02 }];
        bytes.extend_from_slice(&x);
        let group = CurveGroup::p256();
        if let Ok(point) = p256::decode_compressed(group, &bytes) {
            prop_assert!(group.is_on_curve(&point));
            prop_assert_eq!(point.x_coordinate_bytes(), x);
            prop_assert_eq!(p256::encode_compressed(&point), bytes);
        }
    }
}
