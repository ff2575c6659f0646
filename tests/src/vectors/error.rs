//! Structured error types for the vector runner

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("crypto operation failed: {0}")]
    Crypto(#[from] ecka_api::Error),

    #[error("field {field} must be {expected} bytes, got {actual}")]
    Length {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("case {id}: mismatch in {field} - expected: {expected}, got: {actual}")]
    Mismatch {
        id: u64,
        field: &'static str,
        expected: String,
        actual: String,
    },

    #[error("case {id}: expected {expected} error, got {actual}")]
    WrongOutcome {
        id: u64,
        expected: String,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, VectorError>;
