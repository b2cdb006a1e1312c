//! Named reserved ranges.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ean13::Ean13;
use crate::error::{EanError, EanResult};

/// A reserved EAN-13 range, together with how many leading digits identify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prefix {
    /// `2…`: restricted circulation / private use.
    Private,
    /// `97…`: printed work.
    Books,
    /// `978…`: ISBN area 1.
    Isbn1,
    /// `979…`: ISBN area 2.
    Isbn2,
    /// `977…`: ISSN.
    Issn,
    /// No prefix; the whole 13-digit space.
    Null,
}

impl Prefix {
    /// Every named range, `Null` last.
    pub const ALL: [Prefix; 6] = [
        Prefix::Private,
        Prefix::Books,
        Prefix::Isbn1,
        Prefix::Isbn2,
        Prefix::Issn,
        Prefix::Null,
    ];

    /// First value of the range.
    pub const fn value(self) -> Ean13 {
        match self {
            Prefix::Private => Ean13::PRIVATE,
            Prefix::Books => Ean13::BOOKS,
            Prefix::Isbn1 => Ean13::ISBN1,
            Prefix::Isbn2 => Ean13::ISBN2,
            Prefix::Issn => Ean13::ISSN,
            Prefix::Null => Ean13::NULL,
        }
    }

    /// Number of leading digits that identify the range.
    pub const fn digits(self) -> usize {
        match self {
            Prefix::Private => 1,
            Prefix::Books => 2,
            Prefix::Isbn1 | Prefix::Isbn2 | Prefix::Issn => 3,
            Prefix::Null => 0,
        }
    }

    /// Lowercase name used by `FromStr`, `Display` and serde.
    pub const fn name(self) -> &'static str {
        match self {
            Prefix::Private => "private",
            Prefix::Books => "books",
            Prefix::Isbn1 => "isbn1",
            Prefix::Isbn2 => "isbn2",
            Prefix::Issn => "issn",
            Prefix::Null => "null",
        }
    }

    /// Encodes `payload` into this range.
    pub fn encode(self, payload: i64) -> EanResult<Ean13> {
        Ean13::encode(payload, self.value())
    }

    /// Extracts the payload of `code`, checking the range's leading digits.
    pub fn decode(self, code: Ean13) -> EanResult<i64> {
        code.decode(self.value(), self.digits())
    }

    /// True if the leading digits of `code` place it in this range.
    pub fn matches(self, code: Ean13) -> bool {
        code.is(self.value(), self.digits())
    }
}

impl core::fmt::Display for Prefix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a prefix name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown prefix '{0}' (expected one of: private, books, isbn1, isbn2, issn, null)")]
pub struct UnknownPrefix(pub String);

impl FromStr for Prefix {
    type Err = UnknownPrefix;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::ALL
            .into_iter()
            .find(|prefix| prefix.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPrefix(s.to_string()))
    }
}

impl From<Prefix> for Ean13 {
    fn from(value: Prefix) -> Self {
        value.value()
    }
}

impl TryFrom<Ean13> for Prefix {
    type Error = EanError;

    /// Most specific named range containing `code`.
    fn try_from(code: Ean13) -> Result<Self, Self::Error> {
        let mut candidates = Prefix::ALL;
        candidates.sort_by_key(|prefix| core::cmp::Reverse(prefix.digits()));
        candidates
            .into_iter()
            .find(|prefix| *prefix != Prefix::Null && prefix.matches(code))
            .ok_or(EanError::PrefixMismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("ISBN1".parse::<Prefix>(), Ok(Prefix::Isbn1));
        assert_eq!(" private ".parse::<Prefix>(), Ok(Prefix::Private));
        for prefix in Prefix::ALL {
            assert_eq!(prefix.to_string().parse::<Prefix>(), Ok(prefix));
        }
        assert!("bogus".parse::<Prefix>().is_err());
    }

    #[test]
    fn digit_counts_cover_the_distinguishing_digits() {
        // ISBN1 and ISSN share "97" and differ on the third digit.
        assert!(Prefix::Books.matches(Ean13::ISBN1));
        assert!(!Prefix::Isbn1.matches(Ean13::ISSN));
        assert!(Prefix::Null.matches(Ean13::MAX));
    }

    #[test]
    fn encode_then_decode_within_range() {
        for prefix in Prefix::ALL {
            let code = prefix.encode(1234).unwrap();
            assert!(prefix.matches(code), "{prefix}");
            assert_eq!(prefix.decode(code), Ok(1234));
        }
    }

    #[test]
    fn classify_picks_most_specific_range() {
        let isbn = Ean13::from_raw(9_780_306_406_157);
        assert_eq!(Prefix::try_from(isbn), Ok(Prefix::Isbn1));

        let books = Prefix::Books.encode(5).unwrap();
        assert_eq!(Prefix::try_from(books), Ok(Prefix::Books));

        let retail = Ean13::from_raw(4_006_381_333_931);
        assert_eq!(Prefix::try_from(retail), Err(EanError::PrefixMismatch));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Prefix::Issn).unwrap(), "\"issn\"");
        assert_eq!(serde_json::from_str::<Prefix>("\"isbn2\"").unwrap(), Prefix::Isbn2);
    }
}
