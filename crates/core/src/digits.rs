//! Digit extraction and the GS1 check digit.

/// `10^n` for every digit position of a 13-digit number.
pub const POWERS_OF_TEN: [i64; 13] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
];

/// Returns the base-10 digit of `value` at position `n` (0 = least significant).
///
/// # Panics
///
/// Panics if `n > 12`.
pub fn nth_digit(value: i64, n: usize) -> i64 {
    assert!(n < POWERS_OF_TEN.len(), "digit position {n} out of range 0..=12");
    (value / POWERS_OF_TEN[n]) % 10
}

/// Computes the check digit defined in the GS1 General Specifications.
///
/// Only positions 12..=1 contribute; whatever sits at position 0 is ignored.
/// Weights alternate starting with 3 at position 1: odd positions weigh 3,
/// even positions weigh 1.
pub fn checksum(value: i64) -> i64 {
    let sum: i64 = (1..=12)
        .rev()
        .map(|position| {
            let weight = if position % 2 == 1 { 3 } else { 1 };
            nth_digit(value, position) * weight
        })
        .sum();

    (10 - sum % 10) % 10
}
