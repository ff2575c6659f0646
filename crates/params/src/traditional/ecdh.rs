//! Constants for Elliptic Curve Diffie-Hellman

/// Size of shared secret for ECDH using P-256 in bytes
pub const ECDH_P256_SHARED_SECRET_SIZE: usize = 32;

/// Size of public key for ECDH using P-256 in bytes (uncompressed format)
pub const ECDH_P256_PUBLIC_KEY_SIZE: usize = 65;

/// Size of public key for ECDH using P-256 in bytes (compressed format)
pub const ECDH_P256_PUBLIC_KEY_COMPRESSED_SIZE: usize = 33;

/// Size of private key for ECDH using P-256 in bytes
pub const ECDH_P256_PRIVATE_KEY_SIZE: usize = 32;
