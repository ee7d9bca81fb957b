//! Buffer provenance metadata

use crate::location::SourceLocation;
use serde::{Deserialize, Serialize};
use stringtrace_pool::Span;

/// Provenance attached to a tracked buffer at registration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SourceOrigin {
    /// The buffer came from one place: a file anchor or a caller-supplied
    /// (possibly unknown) location.
    Location(SourceLocation),
    /// The buffer was assembled by a [`StringBuilder`](crate::StringBuilder)
    /// and each byte range derives from an earlier-tracked span.
    Map(SourceMap),
}

impl Default for SourceOrigin {
    fn default() -> Self {
        SourceOrigin::Location(SourceLocation::UNKNOWN)
    }
}

/// A piecewise origin map for a buffer built out of fragments.
///
/// Segments are ordered by strictly increasing offset, the first offset is
/// 0, and each segment covers the bytes from its offset up to the next
/// segment's offset (or the end of the buffer for the last one).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceMap {
    segments: Vec<Segment>,
}

/// One fragment of a built buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Byte offset of the fragment in the built buffer.
    pub offset: usize,
    /// Where the fragment's text came from, or `None` for literal text
    /// with no tracked origin.
    pub source: Option<Span>,
}

impl SourceMap {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn push(&mut self, offset: usize, source: Option<Span>) {
        // A zero-length fragment leaves two segments at the same offset;
        // the floor search picks the later one, which shadows it.
        debug_assert!(
            self.segments
                .last()
                .map_or(offset == 0, |last| last.offset <= offset),
            "segment offsets must be non-decreasing from 0"
        );
        self.segments.push(Segment { offset, source });
    }

    /// The segment covering `offset`: the one with the greatest segment
    /// offset that is `<= offset`.
    ///
    /// # Panics
    ///
    /// Panics if the map is empty. Registered maps are never empty and
    /// always start at offset 0.
    pub(crate) fn segment_at(&self, offset: usize) -> &Segment {
        let idx = self.segments.partition_point(|s| s.offset <= offset);
        &self.segments[idx - 1]
    }
}
