//! Batch generation over consecutive payloads.

use crate::ean13::Ean13;
use crate::error::{EanError, EanResult};

/// Default distance between consecutive payloads.
pub const DEFAULT_STEP: i64 = 10;

/// Lazily encodes `count` payloads `start, start + step, ...` into `prefix`.
///
/// Yields one `Result` per payload. The first error is yielded once and ends
/// the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    start: i64,
    count: u64,
    step: i64,
    prefix: Ean13,
    index: u64,
    failed: bool,
}

impl Sequence {
    pub fn new(start: i64, count: u64, prefix: Ean13) -> Self {
        Self {
            start,
            count,
            step: DEFAULT_STEP,
            prefix,
            index: 0,
            failed: false,
        }
    }

    #[must_use]
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn prefix(&self) -> Ean13 {
        self.prefix
    }

    /// Payload for position `index`, if it fits in an `i64`.
    pub fn payload_at(&self, index: u64) -> Option<i64> {
        i64::try_from(index)
            .ok()
            .and_then(|i| i.checked_mul(self.step))
            .and_then(|offset| self.start.checked_add(offset))
    }

    fn remaining(&self) -> u64 {
        if self.failed {
            0
        } else {
            self.count - self.index
        }
    }
}

impl Iterator for Sequence {
    type Item = EanResult<Ean13>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }

        let result = self
            .payload_at(self.index)
            .ok_or(EanError::OutOfRange)
            .and_then(|payload| Ean13::encode(payload, self.prefix));

        self.index += 1;
        self.failed = result.is_err();
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).ok();
        // Only the next item is guaranteed; a later one may end the sequence.
        (remaining.map_or(0, |r| r.min(1)), remaining)
    }
}

impl core::iter::FusedIterator for Sequence {}
