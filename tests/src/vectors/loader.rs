//! Loads the bundled vector files

use super::error::Result;
use super::model::EcdhSuite;
use once_cell::sync::Lazy;

const ECDH_P256_JSON: &str = include_str!("data/ecdh_p256.json");

static ECDH_P256: Lazy<std::result::Result<EcdhSuite, String>> =
    Lazy::new(|| parse(ECDH_P256_JSON).map_err(|e| e.to_string()));

/// Parse a suite from JSON text
pub fn parse(json: &str) -> Result<EcdhSuite> {
    Ok(serde_json::from_str(json)?)
}

/// The P-256 ECDH suite, parsed once per process
pub fn ecdh_p256() -> std::result::Result<&'static EcdhSuite, String> {
    ECDH_P256.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_suite_parses() {
        let suite = ecdh_p256().unwrap();
        assert_eq!(suite.algorithm, "ECDH");
        assert_eq!(suite.curve, "P-256");
        assert!(!suite.valid.is_empty());
        assert!(!suite.invalid.is_empty());
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(parse("{\"algorithm\": ").is_err());
    }
}
