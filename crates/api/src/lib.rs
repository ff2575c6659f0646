//! Public API traits and types for the ecka library
//!
//! This crate provides the public API surface shared by every ecka crate:
//! the error type, the result alias and the key agreement / serialization
//! traits that concrete curves implement.

pub mod error;
pub mod traits;

pub use error::{Error, Result, ResultExt};
pub use traits::{KeyAgreement, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{key_agreement, serialize};
