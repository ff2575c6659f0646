//! Test vectors and cross-crate tests for the ecka library
pub mod vectors;
