//! # ecka
//!
//! Elliptic Curve Diffie-Hellman key agreement over NIST P-256.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecka = "0.3"
//! ```
//!
//! ```no_run
//! use ecka::prelude::*;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> ecka::api::Result<()> {
//! let alice = EcdhP256::generate_keypair(&mut OsRng)?;
//! let bob = EcdhP256::generate_keypair(&mut OsRng)?;
//!
//! let ss_alice = EcdhP256::compute_shared(&EcdhP256::secret_key(&alice), &EcdhP256::public_key(&bob))?;
//! let ss_bob = EcdhP256::compute_shared(&EcdhP256::secret_key(&bob), &EcdhP256::public_key(&alice))?;
//! assert_eq!(ss_alice, ss_bob);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `serde`: serde derives for curve names and point formats
//!
//! The crate requires the standard library; only `ecka-params` builds
//! under `no_std`.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecka-api`]: Error type and the `KeyAgreement` / serialization traits
//! - [`ecka-common`]: Zeroizing secret buffers
//! - [`ecka-params`]: Named curve parameter sets
//! - [`ecka-algorithms`]: P-256 field, scalar and group arithmetic, point codec
//! - [`ecka-ecdh`]: Key pair generation and shared secret computation

// Core re-exports
pub use ecka_algorithms as algorithms;
pub use ecka_api as api;
pub use ecka_common as common;
pub use ecka_ecdh as ecdh;
pub use ecka_params as params;

// Re-export workspace dependencies that appear in the public API
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for ecka users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{KeyAgreement, Serialize, SerializeSecret};

    // Curve arithmetic and encodings
    pub use crate::algorithms::ec::p256::{CurveGroup, Point, PointFormat, Scalar};
    pub use crate::params::traditional::curves::CurveName;

    // Key agreement
    pub use crate::ecdh::{
        compute_shared, generate_public, EcdhP256, EcdhP256PublicKey, EcdhP256SecretKey,
        KeyPair, SharedSecret,
    };

    // Re-export security types
    pub use crate::common::SecretBuffer;
}
