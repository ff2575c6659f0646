//! Common implementations and shared functionality for the ecka library
//!
//! Secret-bearing byte containers live here so that the arithmetic crate and
//! the key agreement crate agree on one zeroizing representation.

pub mod security;

pub use security::SecretBuffer;
