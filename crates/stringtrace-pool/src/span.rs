//! Non-owning references into pooled text

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A non-owning reference to a contiguous range of pooled text.
///
/// A span records a start in the pool's virtual address space plus a byte
/// length. Spans are only meaningful to the pool that issued them; they
/// stay valid until the owning buffer is taken out of that pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    start: u64,
    len: usize,
}

impl Span {
    pub(crate) fn new(start: u64, len: usize) -> Self {
        Span { start, len }
    }

    /// Virtual address of the first byte.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A sub-span covering `range` of this span's bytes.
    ///
    /// `range.end == self.len()` is allowed, so `slice(len..len)` denotes
    /// the zero-length span at the very end.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds or inverted.
    pub fn slice(&self, range: Range<usize>) -> Span {
        assert!(
            range.start <= range.end && range.end <= self.len,
            "span slice {}..{} out of range for span of length {}",
            range.start,
            range.end,
            self.len
        );
        Span {
            start: self.start + range.start as u64,
            len: range.end - range.start,
        }
    }
}
