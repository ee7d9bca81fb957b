//! The address-ordered buffer store

use crate::span::Span;
use std::collections::BTreeMap;

/// An owning store of immutable text buffers, each tagged with metadata.
///
/// Every buffer occupies its own range of a virtual address space that
/// grows monotonically with each insertion. Consecutive ranges are kept
/// disjoint (one unused unit between buffers) so that a zero-length span
/// sitting exactly at a buffer's end still resolves to that buffer and
/// never to its successor.
///
/// Lookup is a floor search over the base addresses: O(log n) in the
/// number of buffers, independent of their lengths.
#[derive(Debug, Clone)]
pub struct StringPool<T> {
    entries: BTreeMap<u64, PoolEntry<T>>,
    next_start: u64,
}

#[derive(Debug, Clone)]
struct PoolEntry<T> {
    text: String,
    meta: T,
}

/// The result of resolving a span to its owning buffer.
#[derive(Debug)]
pub struct Owner<'a, T> {
    /// Full text of the owning buffer.
    pub text: &'a str,
    /// Metadata the buffer was registered with.
    pub meta: &'a T,
    /// Byte offset of the span's start inside the owning buffer.
    /// May equal `text.len()` for an end-of-buffer span.
    pub offset: usize,
}

impl<T> Default for StringPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StringPool<T> {
    pub fn new() -> Self {
        StringPool {
            entries: BTreeMap::new(),
            next_start: 0,
        }
    }

    /// Number of buffers currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take ownership of `text`, tag it with `meta`, and return a span
    /// covering the whole buffer.
    pub fn put(&mut self, text: String, meta: T) -> Span {
        let start = self.next_start;
        let span = Span::new(start, text.len());
        // +1 keeps ranges disjoint: an end-of-buffer span must floor to
        // its own buffer, not to the next one.
        self.next_start = start + text.len() as u64 + 1;
        self.entries.insert(start, PoolEntry { text, meta });
        span
    }

    /// Resolve `span` to the buffer containing it.
    ///
    /// Returns `None` if the span does not point into any stored buffer,
    /// for example after the buffer has been taken out. An offset equal to
    /// the buffer length (a zero-length end-of-buffer span) is accepted.
    pub fn get(&self, span: Span) -> Option<Owner<'_, T>> {
        let (base, entry) = self.lookup(span)?;
        Some(Owner {
            text: &entry.text,
            meta: &entry.meta,
            offset: (span.start() - base) as usize,
        })
    }

    /// Remove the buffer containing `span`, returning its text and
    /// metadata by value. Spans into that buffer no longer resolve.
    pub fn take(&mut self, span: Span) -> Option<(String, T)> {
        let (base, _) = self.lookup(span)?;
        let entry = self.entries.remove(&base)?;
        Some((entry.text, entry.meta))
    }

    fn lookup(&self, span: Span) -> Option<(u64, &PoolEntry<T>)> {
        let (&base, entry) = self.entries.range(..=span.start()).next_back()?;
        let offset = span.start() - base;
        if offset > entry.text.len() as u64 {
            return None;
        }
        Some((base, entry))
    }
}
