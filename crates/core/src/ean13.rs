//! The `Ean13` identifier and its codec operations.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::digits::{checksum, nth_digit};
use crate::error::{EanError, EanResult};
use crate::value_object::ValueObject;

/// Number of decimal digits in an EAN-13.
const DIGITS: usize = 13;

/// A 13-digit EAN identifier.
///
/// The wrapper can hold any `i64` (prefix constants, raw values under
/// inspection), but only values in `0..=MAX` whose last digit equals the GS1
/// checksum of the other twelve [`validate`](Ean13::validate). Fallible
/// constructors (`encode`, `parse`, `TryFrom`) only ever return valid codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Ean13(i64);

impl ValueObject for Ean13 {}

impl Ean13 {
    /// Largest 13-digit value.
    pub const MAX: Self = Self(9_999_999_999_999);
    /// Private numbers (restricted circulation).
    pub const PRIVATE: Self = Self(2_000_000_000_000);
    /// Printed work ("Bookland").
    pub const BOOKS: Self = Self(9_700_000_000_000);
    /// Area 1 for ISBN.
    pub const ISBN1: Self = Self(9_780_000_000_000);
    /// Area 2 for ISBN.
    pub const ISBN2: Self = Self(9_790_000_000_000);
    /// ISSN (serial publications).
    pub const ISSN: Self = Self(9_770_000_000_000);
    /// No number.
    pub const NULL: Self = Self(0);

    /// Wraps a raw integer without validating it.
    pub const fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// The underlying integer.
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Builds a valid code from `payload` inside the range starting at `prefix`.
    ///
    /// The payload is shifted one digit left to make room for the check digit,
    /// added to the prefix, and completed with the GS1 checksum.
    ///
    /// # Errors
    ///
    /// - [`EanError::OutOfRange`] if `payload` is negative, or if
    ///   `payload * 10 + prefix` is negative or exceeds [`Ean13::MAX`].
    /// - [`EanError::CreateFailed`] if the completed value does not validate
    ///   (a prefix with a non-zero last digit, or a check digit that pushes the
    ///   value past `MAX`).
    pub fn encode(payload: i64, prefix: Ean13) -> EanResult<Self> {
        if payload < 0 {
            return Err(EanError::OutOfRange);
        }

        let candidate = payload
            .checked_mul(10)
            .and_then(|shifted| shifted.checked_add(prefix.0))
            .ok_or(EanError::OutOfRange)?;

        if !(0..=Self::MAX.0).contains(&candidate) {
            return Err(EanError::OutOfRange);
        }

        let code = Self(candidate + checksum(candidate));
        if !code.validate() {
            return Err(EanError::CreateFailed);
        }

        Ok(code)
    }

    /// Parses a decimal string and validates it.
    ///
    /// # Errors
    ///
    /// [`EanError::Parse`] for non-numeric text, [`EanError::Invalid`] if the
    /// number is not a valid EAN-13.
    pub fn parse(text: &str) -> EanResult<Self> {
        let value: i64 = text.parse()?;
        Self::try_from(value)
    }

    /// True if the value is in range and its last digit is the GS1 checksum.
    pub fn validate(self) -> bool {
        validate(self.0)
    }

    /// The digit stored at position 0.
    pub fn check_digit(self) -> u8 {
        // rem_euclid keeps the digit in 0..=9 for out-of-range negatives
        self.0.rem_euclid(10) as u8
    }

    /// True if the `n` most significant digits of `self` equal those of `prefix`.
    ///
    /// `n = 0` always matches; `n` above 13 is treated as 13.
    pub fn is(self, prefix: Ean13, n: usize) -> bool {
        let n = n.min(DIGITS);
        (DIGITS - n..DIGITS)
            .all(|position| nth_digit(self.0, position) == nth_digit(prefix.0, position))
    }

    /// Strips `prefix` and the check digit, returning the encoded payload.
    ///
    /// `n` is the number of leading digits that identify the prefix range.
    ///
    /// # Errors
    ///
    /// [`EanError::PrefixMismatch`] if the leading `n` digits differ, or if the
    /// code lies below `prefix` so that no payload exists.
    pub fn decode(self, prefix: Ean13, n: usize) -> EanResult<i64> {
        if !self.is(prefix, n) {
            return Err(EanError::PrefixMismatch);
        }

        let payload = (self.0 - prefix.0) / 10;
        if payload < 0 {
            return Err(EanError::PrefixMismatch);
        }

        Ok(payload)
    }
}

/// Validates a raw integer as an EAN-13.
///
/// Negative values and values above [`Ean13::MAX`] are never valid.
pub fn validate(value: i64) -> bool {
    if !(0..=Ean13::MAX.0).contains(&value) {
        return false;
    }
    checksum(value) == nth_digit(value, 0)
}

impl core::fmt::Display for Ean13 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Ean13 {
    type Err = EanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<i64> for Ean13 {
    type Error = EanError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if validate(value) {
            Ok(Self(value))
        } else {
            Err(EanError::Invalid)
        }
    }
}

impl TryFrom<&str> for Ean13 {
    type Error = EanError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Ean13> for i64 {
    fn from(value: Ean13) -> Self {
        value.0
    }
}
