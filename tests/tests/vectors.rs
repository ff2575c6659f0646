// Known-answer tests for ECDH P-256 from the bundled vector file
use ecka_tests::vectors::{self, run_invalid_case, run_suite, run_valid_case};

#[test]
fn test_ecdh_p256_valid_vectors() {
    let suite = vectors::ecdh_p256().expect("Failed to load ECDH P-256 vectors");
    for case in &suite.valid {
        if let Err(e) = run_valid_case(case) {
            panic!(
                "case {} ({}) failed: {}",
                case.id,
                case.source.as_deref().unwrap_or("unknown source"),
                e
            );
        }
    }
}

#[test]
fn test_ecdh_p256_invalid_peers() {
    let suite = vectors::ecdh_p256().expect("Failed to load ECDH P-256 vectors");
    for case in &suite.invalid {
        if let Err(e) = run_invalid_case(case) {
            panic!(
                "case {} ({}) failed: {}",
                case.id,
                case.comment.as_deref().unwrap_or(""),
                e
            );
        }
    }
}

#[test]
fn test_ecdh_p256_suite_summary() {
    let suite = vectors::ecdh_p256().expect("Failed to load ECDH P-256 vectors");
    let summary = run_suite(suite);
    println!("ECDH P-256: {} cases passed", summary.passed);
    assert!(summary.is_success(), "failures: {:?}", summary.failures);
    assert_eq!(summary.passed, suite.valid.len() + suite.invalid.len());
}

#[test]
fn test_tampered_vector_is_detected() {
    let suite = vectors::ecdh_p256().expect("Failed to load ECDH P-256 vectors");
    let original = &suite.valid[0];
    let mut z = hex::decode(&original.z).unwrap();
    z[0] ^= 0x80;

    let tampered = vectors::ValidCase {
        id: original.id,
        source: None,
        d: original.d.clone(),
        qx_iut: original.qx_iut.clone(),
        qy_iut: original.qy_iut.clone(),
        qx_peer: original.qx_peer.clone(),
        qy_peer: original.qy_peer.clone(),
        z: hex::encode(z),
    };
    assert!(matches!(
        run_valid_case(&tampered),
        Err(vectors::VectorError::Mismatch { field: "z", .. })
    ));
}
