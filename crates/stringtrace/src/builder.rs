//! Assembling tracked buffers out of fragments

use crate::error::{Result, TrackerError};
use crate::location::SourceLocation;
use crate::origin::{SourceMap, SourceOrigin};
use crate::tracker::StringTracker;
use stringtrace_pool::Span;

/// Accumulates fragments into a new tracked buffer, recording where each
/// fragment came from.
///
/// Fragments are either already-tracked spans (whose provenance is
/// recorded) or literal text (whose provenance is unknown unless
/// explicitly attributed). [`build`](StringBuilder::build) consumes the
/// builder and registers the result with the tracker, so a finalized
/// builder cannot be appended to again.
///
/// # Example
///
/// ```rust
/// use stringtrace::{SourceLocation, StringTracker};
///
/// let mut tracker = StringTracker::new();
/// let input = tracker.add_at(
///     "let x = 1;",
///     SourceLocation { file: None, line: Some(1), column: Some(1) },
/// );
///
/// let mut builder = tracker.builder();
/// builder.push_str("const ");
/// builder.push_span(input.slice(4..10)).unwrap();
/// let rewritten = builder.build();
///
/// assert_eq!(tracker.text(rewritten), Some("const x = 1;"));
/// let loc = tracker.locate(rewritten.slice(6..7)).unwrap();
/// assert_eq!(loc.column, Some(5));
/// ```
pub struct StringBuilder<'t> {
    tracker: &'t mut StringTracker,
    buffer: String,
    map: SourceMap,
}

impl<'t> StringBuilder<'t> {
    pub(crate) fn new(tracker: &'t mut StringTracker) -> Self {
        StringBuilder {
            tracker,
            buffer: String::new(),
            map: SourceMap::default(),
        }
    }

    /// True until the first fragment is appended. A zero-length fragment
    /// still counts as appended.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Bytes accumulated so far.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Reserve capacity for at least `additional` more bytes.
    pub fn reserve(&mut self, additional: usize) {
        self.buffer.reserve(additional);
    }

    /// Append an already-tracked fragment, recording its provenance.
    ///
    /// Fails with [`TrackerError::Untracked`] if the span does not resolve
    /// through this builder's tracker, and with [`TrackerError::Misaligned`]
    /// if it cuts into a multi-byte character; nothing is appended in
    /// either case.
    pub fn push_span(&mut self, span: Span) -> Result<()> {
        let text = Self::fragment(self.tracker, span)?;
        self.map.push(self.buffer.len(), Some(span));
        self.buffer.push_str(text);
        Ok(())
    }

    /// Append a tracked fragment's text but attribute it to `origin`
    /// instead of where the text actually came from.
    pub fn push_span_from(&mut self, span: Span, origin: Span) -> Result<()> {
        let text = Self::fragment(self.tracker, span)?;
        self.map.push(self.buffer.len(), Some(origin));
        self.buffer.push_str(text);
        Ok(())
    }

    fn fragment(tracker: &StringTracker, span: Span) -> Result<&str> {
        if !tracker.is_tracked(span) {
            return Err(TrackerError::Untracked);
        }
        tracker.text(span).ok_or(TrackerError::Misaligned)
    }

    /// Append literal text with no tracked origin.
    pub fn push_str(&mut self, text: &str) {
        self.map.push(self.buffer.len(), None);
        self.buffer.push_str(text);
    }

    /// Append literal text attributed to `origin`, e.g. synthesized output
    /// attributed to the site that asked for it.
    pub fn push_str_from(&mut self, text: &str, origin: Span) {
        self.map.push(self.buffer.len(), Some(origin));
        self.buffer.push_str(text);
    }

    /// Move the accumulated text into the tracker under the accumulated
    /// origin map and return a span over the new buffer.
    ///
    /// A builder with no fragments registers an empty buffer with an
    /// unknown location instead of an empty map.
    pub fn build(self) -> Span {
        tracing::trace!(
            bytes = self.buffer.len(),
            segments = self.map.segments().len(),
            "registering built buffer"
        );
        let origin = if self.map.is_empty() {
            SourceOrigin::Location(SourceLocation::UNKNOWN)
        } else {
            SourceOrigin::Map(self.map)
        };
        self.tracker.pool.put(self.buffer, origin)
    }
}
