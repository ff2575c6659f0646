//! Constants for traditional (elliptic curve) key agreement

pub mod curves;
pub mod ecdh;
