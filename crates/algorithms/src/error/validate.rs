//! Validation utilities for the arithmetic layer

use super::{Error, Result};

/// Validate a parameter-set condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameters { context, reason });
    }
    Ok(())
}

/// Validate the exact length of an encoding
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::MalformedEncoding {
            context,
            reason: "unexpected length",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_is_malformed() {
        assert!(length("ctx", 65, 65).is_ok());
        assert_eq!(
            length("ctx", 64, 65),
            Err(Error::MalformedEncoding {
                context: "ctx",
                reason: "unexpected length"
            })
        );
    }

    #[test]
    fn parameter_condition() {
        assert!(parameter(true, "ctx", "fine").is_ok());
        assert!(matches!(
            parameter(false, "ctx", "broken"),
            Err(Error::InvalidParameters { reason: "broken", .. })
        ));
    }
}
