//! Constant values for the ecka library
//!
//! Curve parameter sets are kept here, separate from the arithmetic, so that
//! every layer refers to the same named configuration.

#![no_std]

pub mod traditional;
