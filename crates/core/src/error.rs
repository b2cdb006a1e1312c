//! Codec error model.

use core::num::ParseIntError;

use thiserror::Error;

/// Result type used across the codec.
pub type EanResult<T> = Result<T, EanError>;

/// Codec-level error.
///
/// Every variant is a deterministic outcome of the inputs; retrying with the
/// same arguments yields the same error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EanError {
    /// The code (or the payload/prefix combination) does not fit in 13 digits.
    #[error("EAN is out of range")]
    OutOfRange,

    /// The leading digits of a code differ from the expected prefix.
    #[error("EAN prefix mismatch")]
    PrefixMismatch,

    /// The check digit does not match the other twelve digits.
    #[error("EAN is invalid")]
    Invalid,

    /// A freshly encoded value failed validation.
    #[error("EAN not created")]
    CreateFailed,

    /// Input text is not an integer literal.
    #[error("EAN is not a number: {0}")]
    Parse(#[from] ParseIntError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_convert_via_from() {
        let err: EanError = "abc".parse::<i64>().unwrap_err().into();
        assert!(matches!(err, EanError::Parse(_)));
        assert!(err.to_string().starts_with("EAN is not a number"));
    }
}
