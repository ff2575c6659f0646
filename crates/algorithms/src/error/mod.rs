//! Error handling for the arithmetic layer
//!
//! The arithmetic crate reports failures with the shared [`ecka_api::Error`]
//! so that key-agreement callers match on a single enum. This module adds
//! the validation helpers used at the arithmetic boundaries.

pub use ecka_api::error::ResultExt;
pub use ecka_api::{Error, Result};

pub mod validate;
