//! `ean13-core` — EAN-13 identifier codec.
//!
//! This crate contains **pure** numeric logic (no IO, no logging): the GS1
//! check digit, encoding payloads into reserved prefix ranges, decoding them
//! back, and validating arbitrary 13-digit numbers.

pub mod digits;
pub mod ean13;
pub mod error;
pub mod prefix;
pub mod sequence;
pub mod value_object;

pub use digits::{checksum, nth_digit, POWERS_OF_TEN};
pub use ean13::{validate, Ean13};
pub use error::{EanError, EanResult};
pub use prefix::{Prefix, UnknownPrefix};
pub use sequence::Sequence;
pub use value_object::ValueObject;
