//! Known-answer vectors for ECDH on P-256
//!
//! The JSON file under `data/` holds the NIST CAVS component vector plus
//! cases cross-checked against OpenSSL, and a set of peer encodings that
//! must be rejected with a given error kind.

pub mod error;
pub mod loader;
pub mod model;
pub mod runner;

pub use error::{Result, VectorError};
pub use loader::ecdh_p256;
pub use model::{EcdhSuite, InvalidPeerCase, ValidCase};
pub use runner::{error_kind, run_invalid_case, run_suite, run_valid_case, Summary};
